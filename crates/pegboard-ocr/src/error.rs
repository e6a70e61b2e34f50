use pegboard_core::PieceKind;

/// Errors raised while extracting one puzzle board.
///
/// Every variant is recoverable per puzzle: batch callers log the failure,
/// drop the puzzle from their output and continue with the next scan.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardDetectError {
    #[error("expected {expected} peg centers, found {found}")]
    WrongCircleCount { found: usize, expected: usize },

    #[error("cell ({row}, {col}) sampled off-palette color {rgb:?}")]
    UnknownColor {
        rgb: [u8; 3],
        row: usize,
        col: usize,
    },

    #[error("piece {piece} covers {found} cells, expected 0 or {expected}")]
    ColorCountMismatch {
        piece: PieceKind,
        found: usize,
        expected: usize,
    },

    #[error("peg centers cluster into {rows_found} rows, expected {rows_expected}")]
    RowClusterFailed {
        rows_found: usize,
        rows_expected: usize,
    },
}
