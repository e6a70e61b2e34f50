//! JSON persistence for placements and the transformation catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pegboard_core::{catalog_transformations, PieceKind, Transformation};

use crate::detector::BoardDetection;
use crate::error::BoardDetectError;
use crate::grid::BoardGrid;
use crate::matcher::Placement;

#[derive(thiserror::Error, Debug)]
pub enum BoardIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Placement lists keyed by puzzle id, as persisted on disk.
pub type PuzzleConfig = BTreeMap<String, Vec<Placement>>;

/// Load a puzzle config from JSON on disk.
pub fn load_puzzle_config(path: impl AsRef<Path>) -> Result<PuzzleConfig, BoardIoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write a puzzle config to disk as pretty JSON.
pub fn write_puzzle_config(
    config: &PuzzleConfig,
    path: impl AsRef<Path>,
) -> Result<(), BoardIoError> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the catalog-wide transformation dump: every piece name mapped to
/// its 16 transformation records, independent of any specific puzzle.
pub fn write_transformation_dump(path: impl AsRef<Path>) -> Result<(), BoardIoError> {
    let catalog: BTreeMap<PieceKind, Vec<Transformation>> = catalog_transformations();
    let json = serde_json::to_string_pretty(&catalog)?;
    fs::write(path, json)?;
    Ok(())
}

/// Per-puzzle extraction record, including skip reasons for failed scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectReport {
    pub puzzle: String,
    #[serde(default)]
    pub grid: Option<BoardGrid>,
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DetectReport {
    pub fn new(puzzle: impl Into<String>) -> Self {
        Self {
            puzzle: puzzle.into(),
            grid: None,
            placements: Vec::new(),
            error: None,
        }
    }

    /// Populate from a successful extraction.
    pub fn set_detection(&mut self, detection: BoardDetection) {
        self.grid = Some(detection.grid);
        self.placements = detection.placements;
        self.error = None;
    }

    /// Record why this puzzle was skipped.
    pub fn set_error(&mut self, err: &BoardDetectError) {
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, BoardIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), BoardIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
