//! The fixed color palette and the piece catalog keys.
//!
//! Both enums are process-wide constants: the palette never changes at
//! runtime and the serialized names are part of the persisted JSON format.

use serde::{Deserialize, Serialize};

/// One of the 17 reference colors a sampled peg may resolve to.
///
/// The RGB triples are the exact values found in the source scans; the
/// strict classifier compares against them byte-for-byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Green,
    Cyan,
    Yellow,
    Purple,
    Orange,
    Red,
    Blue,
    Grey,
    Magenta,
    Pink,
    YellowGreen,
    DarkGray,
    OffWhite,
    DarkerGray,
    Black,
    White,
    LightGray,
}

impl Color {
    /// All palette entries, in declaration order.
    pub const ALL: [Color; 17] = [
        Color::Green,
        Color::Cyan,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Red,
        Color::Blue,
        Color::Grey,
        Color::Magenta,
        Color::Pink,
        Color::YellowGreen,
        Color::DarkGray,
        Color::OffWhite,
        Color::DarkerGray,
        Color::Black,
        Color::White,
        Color::LightGray,
    ];

    /// Canonical `(r, g, b)` reference value.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Color::Green => [0, 171, 79],
            Color::Cyan => [140, 225, 249],
            Color::Yellow => [255, 235, 61],
            Color::Purple => [152, 34, 125],
            Color::Orange => [255, 125, 36],
            Color::Red => [255, 46, 23],
            Color::Blue => [0, 144, 211],
            Color::Grey => [196, 196, 199],
            Color::Magenta => [252, 92, 172],
            Color::Pink => [255, 213, 206],
            Color::YellowGreen => [190, 214, 67],
            Color::DarkGray => [101, 102, 107],
            Color::OffWhite => [247, 243, 227],
            Color::DarkerGray => [44, 46, 53],
            Color::Black => [0, 0, 0],
            Color::White => [255, 255, 255],
            Color::LightGray => [176, 177, 179],
        }
    }

    /// Serialized (SCREAMING_SNAKE_CASE) name of the entry.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "GREEN",
            Color::Cyan => "CYAN",
            Color::Yellow => "YELLOW",
            Color::Purple => "PURPLE",
            Color::Orange => "ORANGE",
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Grey => "GREY",
            Color::Magenta => "MAGENTA",
            Color::Pink => "PINK",
            Color::YellowGreen => "YELLOW_GREEN",
            Color::DarkGray => "DARK_GRAY",
            Color::OffWhite => "OFF_WHITE",
            Color::DarkerGray => "DARKER_GRAY",
            Color::Black => "BLACK",
            Color::White => "WHITE",
            Color::LightGray => "LIGHT_GRAY",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 12 puzzle pieces, keyed by its peg color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Orange,
    Blue,
    Pink,
    Magenta,
    Cyan,
    LightGray,
    YellowGreen,
    Yellow,
    OffWhite,
    Green,
    Purple,
    Red,
}

impl PieceKind {
    /// All pieces, in catalog order.
    pub const ALL: [PieceKind; 12] = [
        PieceKind::Orange,
        PieceKind::Blue,
        PieceKind::Pink,
        PieceKind::Magenta,
        PieceKind::Cyan,
        PieceKind::LightGray,
        PieceKind::YellowGreen,
        PieceKind::Yellow,
        PieceKind::OffWhite,
        PieceKind::Green,
        PieceKind::Purple,
        PieceKind::Red,
    ];

    /// Palette color of this piece's pegs.
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            PieceKind::Orange => Color::Orange,
            PieceKind::Blue => Color::Blue,
            PieceKind::Pink => Color::Pink,
            PieceKind::Magenta => Color::Magenta,
            PieceKind::Cyan => Color::Cyan,
            PieceKind::LightGray => Color::LightGray,
            PieceKind::YellowGreen => Color::YellowGreen,
            PieceKind::Yellow => Color::Yellow,
            PieceKind::OffWhite => Color::OffWhite,
            PieceKind::Green => Color::Green,
            PieceKind::Purple => Color::Purple,
            PieceKind::Red => Color::Red,
        }
    }

    /// Number of grid cells the piece occupies when present on a board.
    ///
    /// A valid grid contains either 0 or exactly this many cells of the
    /// piece's color.
    #[inline]
    pub const fn cell_count(self) -> usize {
        match self {
            PieceKind::Orange => 4,
            PieceKind::Blue => 5,
            PieceKind::Pink => 5,
            PieceKind::Magenta => 5,
            PieceKind::Cyan => 5,
            PieceKind::LightGray => 5,
            PieceKind::YellowGreen => 4,
            PieceKind::Yellow => 5,
            PieceKind::OffWhite => 3,
            PieceKind::Green => 5,
            PieceKind::Purple => 4,
            PieceKind::Red => 5,
        }
    }

    /// Serialized (snake_case) name of the piece.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Orange => "orange",
            PieceKind::Blue => "blue",
            PieceKind::Pink => "pink",
            PieceKind::Magenta => "magenta",
            PieceKind::Cyan => "cyan",
            PieceKind::LightGray => "light_gray",
            PieceKind::YellowGreen => "yellow_green",
            PieceKind::Yellow => "yellow",
            PieceKind::OffWhite => "off_white",
            PieceKind::Green => "green",
            PieceKind::Purple => "purple",
            PieceKind::Red => "red",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_rgb_values_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a.rgb(), b.rgb(), "{a} and {b} share an RGB triple");
            }
        }
    }

    #[test]
    fn piece_cell_counts_fill_a_board() {
        let total: usize = PieceKind::ALL.iter().map(|p| p.cell_count()).sum();
        assert_eq!(total, 55, "twelve pieces must tile a 5x11 board exactly");
    }

    #[test]
    fn serialized_names_match_persisted_format() {
        let json = serde_json::to_string(&Color::YellowGreen).unwrap();
        assert_eq!(json, "\"YELLOW_GREEN\"");
        let json = serde_json::to_string(&PieceKind::OffWhite).unwrap();
        assert_eq!(json, "\"off_white\"");

        let back: PieceKind = serde_json::from_str("\"light_gray\"").unwrap();
        assert_eq!(back, PieceKind::LightGray);
    }
}
