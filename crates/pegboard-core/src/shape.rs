//! Piece footprints and their rotation/flip variants.
//!
//! Every piece expands into exactly 16 transformations in a fixed order:
//! four clockwise rotation steps, and at each step the four flip
//! combinations (none, horizontal, vertical, both) derived from that
//! step's grid. Symmetric pieces produce bitwise-duplicate grids; those
//! are kept, because the transformation *index* is part of the persisted
//! format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::palette::PieceKind;

/// Boolean occupancy grid of a piece footprint.
///
/// Row-major; serializes as a nested JSON array of booleans, matching the
/// persisted transformation records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeGrid(pub Vec<Vec<bool>>);

impl ShapeGrid {
    /// Build from nested rows. All rows must have equal length.
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() == w[1].len()));
        Self(rows)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Occupancy at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.0[row][col]
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&b| b).count()
    }

    /// 90° clockwise rotation (transpose then reverse each row).
    pub fn rotate_cw(&self) -> ShapeGrid {
        let rows = self.rows();
        let cols = self.cols();
        let mut out = vec![vec![false; rows]; cols];
        for (r, row) in self.0.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                out[c][rows - 1 - r] = cell;
            }
        }
        ShapeGrid(out)
    }

    /// Mirror columns (left-right).
    pub fn flip_horizontal(&self) -> ShapeGrid {
        ShapeGrid(
            self.0
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        )
    }

    /// Mirror rows (top-bottom).
    pub fn flip_vertical(&self) -> ShapeGrid {
        ShapeGrid(self.0.iter().rev().cloned().collect())
    }
}

impl PieceKind {
    /// Canonical footprint of the piece.
    pub fn footprint(self) -> ShapeGrid {
        let rows: Vec<Vec<bool>> = match self {
            PieceKind::Orange => vec![vec![true, true, true], vec![true, false, false]],
            PieceKind::Blue => vec![
                vec![true, true, true, true],
                vec![true, false, false, false],
            ],
            PieceKind::Pink => vec![
                vec![true, true, true, true],
                vec![false, true, false, false],
            ],
            PieceKind::Magenta => vec![
                vec![true, true, false],
                vec![false, true, true],
                vec![false, false, true],
            ],
            PieceKind::Cyan => vec![
                vec![true, true, true],
                vec![true, false, false],
                vec![true, false, false],
            ],
            PieceKind::LightGray => vec![
                vec![false, true, false],
                vec![true, true, true],
                vec![false, true, false],
            ],
            PieceKind::YellowGreen => vec![vec![true, true], vec![true, true]],
            PieceKind::Yellow => vec![
                vec![true, true, false],
                vec![true, false, false],
                vec![true, true, false],
            ],
            PieceKind::OffWhite => vec![vec![true, false], vec![true, true]],
            PieceKind::Green => vec![
                vec![true, true, false, false],
                vec![false, true, true, true],
            ],
            PieceKind::Purple => vec![vec![true, true, true, true]],
            PieceKind::Red => vec![vec![true, true], vec![true, true], vec![true, false]],
        };
        ShapeGrid(rows)
    }
}

/// One rotation/flip variant of a piece footprint.
///
/// Field names and layout match the persisted JSON records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    /// Rotation in degrees: 0, 90, 180 or 270.
    pub rotation: u16,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub shape: ShapeGrid,
}

/// The 16 transformations of a footprint, in catalog order.
///
/// Flips at each rotation step are derived from that step's rotated grid,
/// not from the unrotated original.
pub fn transformations(footprint: &ShapeGrid) -> Vec<Transformation> {
    let mut out = Vec::with_capacity(16);
    let mut current = footprint.clone();
    for step in 0..4u16 {
        let rotation = step * 90;
        out.push(Transformation {
            rotation,
            flip_horizontal: false,
            flip_vertical: false,
            shape: current.clone(),
        });
        out.push(Transformation {
            rotation,
            flip_horizontal: true,
            flip_vertical: false,
            shape: current.flip_horizontal(),
        });
        out.push(Transformation {
            rotation,
            flip_horizontal: false,
            flip_vertical: true,
            shape: current.flip_vertical(),
        });
        out.push(Transformation {
            rotation,
            flip_horizontal: true,
            flip_vertical: true,
            shape: current.flip_vertical().flip_horizontal(),
        });
        current = current.rotate_cw();
    }
    out
}

/// Catalog-wide transformation table: every piece with its 16 variants.
pub fn catalog_transformations() -> BTreeMap<PieceKind, Vec<Transformation>> {
    PieceKind::ALL
        .iter()
        .map(|&piece| (piece, transformations(&piece.footprint())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprints_match_expected_cell_counts() {
        for &piece in &PieceKind::ALL {
            assert_eq!(
                piece.footprint().cell_count(),
                piece.cell_count(),
                "{piece} footprint size"
            );
        }
    }

    #[test]
    fn rotation_four_times_is_identity() {
        for &piece in &PieceKind::ALL {
            let original = piece.footprint();
            let rotated = original.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(rotated, original, "{piece}");
        }
    }

    #[test]
    fn flips_are_involutions() {
        for &piece in &PieceKind::ALL {
            let original = piece.footprint();
            assert_eq!(original.flip_horizontal().flip_horizontal(), original);
            assert_eq!(original.flip_vertical().flip_vertical(), original);
        }
    }

    #[test]
    fn rotate_cw_on_asymmetric_grid() {
        let grid = ShapeGrid::new(vec![vec![true, true], vec![true, false], vec![true, false]]);
        let rotated = grid.rotate_cw();
        assert_eq!(
            rotated,
            ShapeGrid::new(vec![vec![true, true, true], vec![false, false, true]])
        );
    }

    #[test]
    fn sixteen_transformations_in_fixed_order() {
        for &piece in &PieceKind::ALL {
            let ts = transformations(&piece.footprint());
            assert_eq!(ts.len(), 16);
            for (i, t) in ts.iter().enumerate() {
                assert_eq!(t.rotation, (i as u16 / 4) * 90);
                assert_eq!(t.flip_horizontal, i % 2 == 1);
                assert_eq!(t.flip_vertical, i % 4 >= 2);
            }
        }
    }

    #[test]
    fn symmetric_piece_keeps_duplicate_variants() {
        // The 2x2 square is invariant under every transformation; all 16
        // grids are identical and none are dropped.
        let ts = transformations(&PieceKind::YellowGreen.footprint());
        assert_eq!(ts.len(), 16);
        assert!(ts.iter().all(|t| t.shape == ts[0].shape));
    }

    #[test]
    fn transformation_json_round_trip() {
        let ts = transformations(&PieceKind::Magenta.footprint());
        let json = serde_json::to_string(&ts[5]).unwrap();
        let back: Transformation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts[5]);
        assert!(json.contains("\"rotation\":90"));
        assert!(json.contains("\"flip_horizontal\":true"));
    }

    #[test]
    fn catalog_covers_every_piece() {
        let catalog = catalog_transformations();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.values().all(|ts| ts.len() == 16));
    }
}
