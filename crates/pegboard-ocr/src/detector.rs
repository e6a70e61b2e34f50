//! End-to-end board extraction: peg centers -> labeled grid -> placements.

use log::{debug, info};

use pegboard_core::RgbImageView;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::BoardDetectError;
use crate::grid::{build_grid, BoardGrid, GridParams};
use crate::matcher::{locate_all, Placement};

/// Result of extracting one puzzle board.
#[derive(Clone, Debug)]
pub struct BoardDetection {
    pub grid: BoardGrid,
    pub placements: Vec<Placement>,
}

/// Symbolic board extractor.
///
/// Holds only immutable parameters; one detector may be reused across any
/// number of puzzles.
pub struct BoardDetector {
    params: GridParams,
}

impl BoardDetector {
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    /// Detector parameters.
    #[inline]
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Extract the board under `centers` from `img`.
    ///
    /// `centers` come from an external circle detector and may be in any
    /// order. Every error is per-puzzle recoverable.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, img, centers), fields(width = img.width, height = img.height, centers = centers.len()))
    )]
    pub fn detect(
        &self,
        img: &RgbImageView<'_>,
        centers: &[(i32, i32)],
    ) -> Result<BoardDetection, BoardDetectError> {
        let grid = build_grid(img, centers, &self.params)?;
        debug!(
            "labeled {}x{} grid from {} centers",
            grid.rows(),
            grid.cols(),
            centers.len()
        );

        let placements = locate_all(&grid);
        info!("located {} of 12 pieces", placements.len());

        Ok(BoardDetection { grid, placements })
    }
}

impl Default for BoardDetector {
    fn default() -> Self {
        Self::new(GridParams::default())
    }
}
