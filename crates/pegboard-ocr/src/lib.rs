//! Symbolic extraction of peg-board puzzle placements.
//!
//! The pipeline turns a rendered puzzle scan into symbols: an external
//! circle detector supplies peg centers; [`grid::build_grid`] orders them
//! into a 5x11 grid and labels every cell against the fixed palette;
//! [`matcher::locate_all`] then searches the labeled grid for the placement
//! (anchor plus rotation/flip variant) of each of the 12 cataloged pieces.
//!
//! Page rasterization, sub-image extraction and circle detection are
//! external collaborators; this crate neither locates boards on a page nor
//! repairs malformed scans. A malformed scan yields a typed
//! [`BoardDetectError`], and every error is recoverable per puzzle.
//!
//! ```
//! use pegboard_core::Color;
//! use pegboard_ocr::{grid::BoardGrid, matcher::locate_all};
//!
//! let mut cells = vec![vec![Some(Color::Grey); 11]; 5];
//! for r in 1..3 {
//!     for c in 4..6 {
//!         cells[r][c] = Some(Color::YellowGreen);
//!     }
//! }
//! let placements = locate_all(&BoardGrid::new(cells));
//! assert_eq!(placements.len(), 1);
//! assert_eq!((placements[0].y, placements[0].x), (1, 4));
//! ```

pub mod detector;
pub mod error;
pub mod grid;
pub mod io;
pub mod matcher;
#[cfg(feature = "image")]
pub mod render;

pub use detector::{BoardDetection, BoardDetector};
pub use error::BoardDetectError;
pub use grid::{build_grid, BoardGrid, GridParams};
pub use io::{load_puzzle_config, write_puzzle_config, write_transformation_dump, PuzzleConfig};
pub use matcher::{locate, locate_all, paint_placements, Placement};

#[cfg(feature = "image")]
pub use render::render_board;

/// Adapt an `image::RgbImage` into the borrowed core view type.
#[cfg(feature = "image")]
pub fn rgb_view(img: &::image::RgbImage) -> pegboard_core::RgbImageView<'_> {
    pegboard_core::RgbImageView::rgb(img.width() as usize, img.height() as usize, img.as_raw())
}
