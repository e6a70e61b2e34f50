//! Command-line front end: extract one puzzle scan or dump the
//! transformation catalog.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, warn, LevelFilter};

use pegboard_ocr::io::DetectReport;
use pegboard_ocr::{rgb_view, write_transformation_dump, BoardDetector, GridParams};

#[derive(Parser)]
#[command(name = "pegboard-ocr", version, about = "Peg-board puzzle scan extraction")]
struct Cli {
    /// Log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract placements from a puzzle image plus detected peg centers.
    Detect {
        /// Puzzle image (any format the `image` crate decodes).
        #[arg(long)]
        image: PathBuf,
        /// JSON array of `[x, y]` peg centers from the circle detector.
        #[arg(long)]
        centers: PathBuf,
        /// Report output path.
        #[arg(long, default_value = "pegboard_report.json")]
        output: PathBuf,
        /// Puzzle id recorded in the report.
        #[arg(long, default_value = "0")]
        puzzle: String,
        /// Sampling mask radius in pixels.
        #[arg(long, default_value_t = 12)]
        sample_radius: i32,
    },
    /// Write the 16-variant transformation catalog for all 12 pieces.
    DumpTransformations {
        #[arg(long, default_value = "shapes_transformations.json")]
        output: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Detect {
            image: image_path,
            centers,
            output,
            puzzle,
            sample_radius,
        } => {
            let img = image::open(&image_path)?.to_rgb8();
            let raw = fs::read_to_string(&centers)?;
            let centers: Vec<(i32, i32)> = serde_json::from_str::<Vec<[i32; 2]>>(&raw)?
                .into_iter()
                .map(|[x, y]| (x, y))
                .collect();

            let params = GridParams {
                sample_radius,
                ..GridParams::default()
            };
            let detector = BoardDetector::new(params);

            let mut report = DetectReport::new(puzzle);
            match detector.detect(&rgb_view(&img), &centers) {
                Ok(detection) => report.set_detection(detection),
                Err(err) => {
                    warn!("{} skipped: {err}", image_path.display());
                    report.set_error(&err);
                }
            }
            report.write_json(&output)?;
            println!("report written to {}", output.display());
        }
        Command::DumpTransformations { output } => {
            write_transformation_dump(&output)?;
            println!("transformations written to {}", output.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = pegboard_core::init_with_level(level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
