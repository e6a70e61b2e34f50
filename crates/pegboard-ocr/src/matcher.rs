//! Exhaustive placement search over a labeled grid.
//!
//! Anchors are scanned row-major, and at each anchor the piece's 16
//! transformations are tried in catalog order. The first full match wins;
//! symmetric pieces carry bitwise-duplicate transformation grids, so the
//! enumeration order is the tie-break. A piece found nowhere is simply
//! absent, not an error.

use serde::{Deserialize, Serialize};

use pegboard_core::{transformations, PieceKind, Transformation};

use crate::grid::BoardGrid;

/// A located piece: anchor cell plus the matching transformation.
///
/// `x` is the anchor column, `y` the anchor row, as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub piece: PieceKind,
    pub x: usize,
    pub y: usize,
    pub transformation: Transformation,
}

/// True when `t`'s bitmap placed at `(row, col)` matches the grid exactly:
/// occupied cells carry the piece's own color, empty cells anything else.
fn matches_at(piece: PieceKind, t: &Transformation, grid: &BoardGrid, row: usize, col: usize) -> bool {
    let shape = &t.shape;
    if row + shape.rows() > grid.rows() || col + shape.cols() > grid.cols() {
        return false;
    }
    let own = piece.color();
    for r in 0..shape.rows() {
        for c in 0..shape.cols() {
            let occupied = grid.get(row + r, col + c) == Some(own);
            if shape.get(r, c) != occupied {
                return false;
            }
        }
    }
    true
}

/// Find the placement of `piece` in `grid`, trying `variants` in order at
/// every anchor. Returns `None` when the piece is not on the board.
pub fn locate(
    piece: PieceKind,
    grid: &BoardGrid,
    variants: &[Transformation],
) -> Option<Placement> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            for t in variants {
                if matches_at(piece, t, grid, row, col) {
                    return Some(Placement {
                        piece,
                        x: col,
                        y: row,
                        transformation: t.clone(),
                    });
                }
            }
        }
    }
    None
}

/// Locate every cataloged piece, in catalog order, omitting absent pieces.
pub fn locate_all(grid: &BoardGrid) -> Vec<Placement> {
    PieceKind::ALL
        .iter()
        .filter_map(|&piece| {
            let variants = transformations(&piece.footprint());
            locate(piece, grid, &variants)
        })
        .collect()
}

/// Replay a placement list onto a fresh grid, labeling each covered cell
/// with its piece's color. Cells outside the grid are ignored.
pub fn paint_placements(placements: &[Placement], rows: usize, cols: usize) -> BoardGrid {
    let mut grid = BoardGrid::empty(rows, cols);
    for p in placements {
        let shape = &p.transformation.shape;
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                if shape.get(r, c) && p.y + r < rows && p.x + c < cols {
                    grid.set(p.y + r, p.x + c, Some(p.piece.color()));
                }
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use pegboard_core::Color;

    /// All-GREY 5x11 grid.
    fn grey_board() -> BoardGrid {
        BoardGrid::new(vec![vec![Some(Color::Grey); 11]; 5])
    }

    fn place(grid: &mut BoardGrid, piece: PieceKind, row: usize, col: usize) {
        let shape = piece.footprint();
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                if shape.get(r, c) {
                    grid.set(row + r, col + c, Some(piece.color()));
                }
            }
        }
    }

    #[test]
    fn locates_square_piece_at_first_variant() {
        let mut grid = grey_board();
        place(&mut grid, PieceKind::YellowGreen, 1, 4);

        let variants = transformations(&PieceKind::YellowGreen.footprint());
        let placement = locate(PieceKind::YellowGreen, &grid, &variants).expect("placement");
        assert_eq!(placement.y, 1);
        assert_eq!(placement.x, 4);
        // All 16 variants of the square are identical; index 0 wins.
        assert_eq!(placement.transformation, variants[0]);
    }

    #[test]
    fn absent_piece_returns_none() {
        let grid = grey_board();
        let variants = transformations(&PieceKind::Red.footprint());
        assert!(locate(PieceKind::Red, &grid, &variants).is_none());
    }

    #[test]
    fn locate_is_deterministic() {
        let mut grid = grey_board();
        place(&mut grid, PieceKind::Purple, 2, 3);
        let variants = transformations(&PieceKind::Purple.footprint());
        let a = locate(PieceKind::Purple, &grid, &variants).expect("first");
        let b = locate(PieceKind::Purple, &grid, &variants).expect("second");
        assert_eq!(a, b);
    }

    #[test]
    fn rotated_piece_is_found_with_matching_variant() {
        // Purple (1x4 bar) standing vertically in the last column.
        let mut grid = grey_board();
        for r in 0..4 {
            grid.set(r, 10, Some(Color::Purple));
        }

        let variants = transformations(&PieceKind::Purple.footprint());
        let placement = locate(PieceKind::Purple, &grid, &variants).expect("placement");
        assert_eq!((placement.y, placement.x), (0, 10));
        assert_eq!(placement.transformation.shape.rows(), 4);
        assert_eq!(placement.transformation.shape.cols(), 1);
        // First vertical variant in catalog order is the 90-degree block.
        assert_eq!(placement.transformation.rotation, 90);
    }

    #[test]
    fn near_board_edge_oversized_variants_are_skipped() {
        // Horizontal bar in the bottom row: vertical variants would run
        // past the board and must be skipped, not panic.
        let mut grid = grey_board();
        for c in 7..11 {
            grid.set(4, c, Some(Color::Purple));
        }
        let variants = transformations(&PieceKind::Purple.footprint());
        let placement = locate(PieceKind::Purple, &grid, &variants).expect("placement");
        assert_eq!((placement.y, placement.x), (4, 7));
        assert_eq!(placement.transformation.rotation, 0);
    }

    #[test]
    fn occupied_cells_must_be_own_color() {
        // An orange-shaped region in the wrong color must not match orange.
        let mut grid = grey_board();
        place(&mut grid, PieceKind::Blue, 0, 0);
        let variants = transformations(&PieceKind::Orange.footprint());
        assert!(locate(PieceKind::Orange, &grid, &variants).is_none());
    }

    #[test]
    fn locate_all_reports_only_present_pieces() {
        let mut grid = grey_board();
        place(&mut grid, PieceKind::YellowGreen, 1, 4);
        place(&mut grid, PieceKind::OffWhite, 2, 8);
        place(&mut grid, PieceKind::Purple, 4, 0);

        let placements = locate_all(&grid);
        let pieces: Vec<PieceKind> = placements.iter().map(|p| p.piece).collect();
        assert_eq!(
            pieces,
            vec![PieceKind::YellowGreen, PieceKind::OffWhite, PieceKind::Purple]
        );
    }

    #[test]
    fn paint_placements_reproduces_located_cells() {
        let mut grid = grey_board();
        place(&mut grid, PieceKind::Magenta, 0, 0);
        place(&mut grid, PieceKind::YellowGreen, 3, 8);

        let placements = locate_all(&grid);
        let painted = paint_placements(&placements, 5, 11);
        for r in 0..5 {
            for c in 0..11 {
                let original = grid.get(r, c);
                let expected = match original {
                    Some(Color::Magenta) | Some(Color::YellowGreen) => original,
                    _ => None,
                };
                assert_eq!(painted.get(r, c), expected, "cell ({r}, {c})");
            }
        }
    }
}
