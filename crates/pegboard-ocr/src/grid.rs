//! Assembling detected peg centers into a labeled board grid.
//!
//! Peg centers arrive unordered from an external circle detector. Rows are
//! recovered by clustering the vertical coordinate with a tolerance derived
//! from the expected row pitch; a layout that does not split into exactly
//! `rows` clusters of `cols` pegs fails loudly instead of producing a
//! silently misassigned grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pegboard_core::{sample_exact, Color, PieceKind, RgbImageView};

use crate::error::BoardDetectError;

/// Grid assembly parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridParams {
    /// Peg rows on the board.
    pub rows: usize,
    /// Peg columns on the board.
    pub cols: usize,
    /// Radius in pixels of the circular sampling mask per peg.
    ///
    /// Chosen to cover a peg's visible area without bleeding into its
    /// neighbors.
    pub sample_radius: i32,
    /// Row-break threshold as a fraction of the expected row pitch.
    pub row_tolerance_frac: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 11,
            sample_radius: 12,
            row_tolerance_frac: 0.5,
        }
    }
}

impl GridParams {
    #[inline]
    pub fn expected_centers(&self) -> usize {
        self.rows * self.cols
    }
}

/// Labeled board grid: `rows` x `cols` of palette colors, `None` where no
/// peg was sampled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardGrid(pub Vec<Vec<Option<Color>>>);

impl BoardGrid {
    pub fn new(cells: Vec<Vec<Option<Color>>>) -> Self {
        debug_assert!(cells.windows(2).all(|w| w[0].len() == w[1].len()));
        Self(cells)
    }

    /// Grid filled with `None`.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self(vec![vec![None; cols]; rows])
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Label at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.0[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Option<Color>) {
        self.0[row][col] = color;
    }

    /// Per-piece cell counts over the whole grid.
    pub fn color_counts(&self) -> BTreeMap<PieceKind, usize> {
        let mut counts = BTreeMap::new();
        for &piece in &PieceKind::ALL {
            let count = self
                .0
                .iter()
                .flatten()
                .filter(|&&cell| cell == Some(piece.color()))
                .count();
            counts.insert(piece, count);
        }
        counts
    }
}

/// Cluster centers into `params.rows` rows ordered top-to-bottom, each
/// sorted left-to-right.
fn cluster_rows(
    centers: &[(i32, i32)],
    params: &GridParams,
) -> Result<Vec<Vec<(i32, i32)>>, BoardDetectError> {
    let mut sorted: Vec<(i32, i32)> = centers.to_vec();
    sorted.sort_unstable_by_key(|&(x, y)| (y, x));

    let mut clusters: Vec<Vec<(i32, i32)>> = Vec::with_capacity(params.rows);
    if params.rows <= 1 {
        clusters.push(sorted);
    } else {
        let span = (sorted[sorted.len() - 1].1 - sorted[0].1) as f32;
        let pitch = span / (params.rows - 1) as f32;
        let tolerance = pitch * params.row_tolerance_frac;

        let mut current: Vec<(i32, i32)> = Vec::with_capacity(params.cols);
        let mut prev_y = sorted[0].1;
        for center in sorted {
            if !current.is_empty() && (center.1 - prev_y) as f32 > tolerance {
                clusters.push(std::mem::take(&mut current));
            }
            prev_y = center.1;
            current.push(center);
        }
        clusters.push(current);
    }

    if clusters.len() != params.rows || clusters.iter().any(|row| row.len() != params.cols) {
        return Err(BoardDetectError::RowClusterFailed {
            rows_found: clusters.len(),
            rows_expected: params.rows,
        });
    }

    for row in &mut clusters {
        row.sort_unstable_by_key(|&(x, y)| (x, y));
    }
    Ok(clusters)
}

/// Order `centers` into a grid and label every cell from the image.
///
/// Fails when the center count is off, when a sampled modal color is not in
/// the palette, or when the completed grid's per-piece cell counts violate
/// the expected-count table. All failures are per-puzzle recoverable.
pub fn build_grid(
    img: &RgbImageView<'_>,
    centers: &[(i32, i32)],
    params: &GridParams,
) -> Result<BoardGrid, BoardDetectError> {
    let expected = params.expected_centers();
    if centers.len() != expected {
        return Err(BoardDetectError::WrongCircleCount {
            found: centers.len(),
            expected,
        });
    }

    let rows = cluster_rows(centers, params)?;

    let mut grid = BoardGrid::empty(params.rows, params.cols);
    for (r, row) in rows.iter().enumerate() {
        for (c, &center) in row.iter().enumerate() {
            let label = sample_exact(img, center, params.sample_radius).map_err(|err| {
                BoardDetectError::UnknownColor {
                    rgb: err.rgb,
                    row: r,
                    col: c,
                }
            })?;
            grid.set(r, c, label);
        }
    }

    for (piece, count) in grid.color_counts() {
        let expected = piece.cell_count();
        if count != 0 && count != expected {
            return Err(BoardDetectError::ColorCountMismatch {
                piece,
                found: count,
                expected,
            });
        }
    }

    Ok(grid)
}
