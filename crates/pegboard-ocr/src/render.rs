//! Repainting a labeled grid as an image, for visual inspection of
//! extracted boards and replayed placement lists.

use image::{Rgb, RgbImage};

use pegboard_core::Color;

use crate::grid::BoardGrid;

/// Paint each grid cell as a `scale`-pixel square of its palette color.
/// Cells with no label are painted DARK_GRAY, matching the board base.
pub fn render_board(grid: &BoardGrid, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let width = grid.cols() as u32 * scale;
    let height = grid.rows() as u32 * scale;
    let mut img = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let row = (y / scale) as usize;
            let col = (x / scale) as usize;
            let rgb = grid
                .get(row, col)
                .unwrap_or(Color::DarkGray)
                .rgb();
            img.put_pixel(x, y, Rgb(rgb));
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_pixels_follow_cell_labels() {
        let grid = BoardGrid::new(vec![
            vec![Some(Color::Red), None],
            vec![Some(Color::Blue), Some(Color::Grey)],
        ]);
        let img = render_board(&grid, 4);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(1, 1).0, Color::Red.rgb());
        assert_eq!(img.get_pixel(5, 1).0, Color::DarkGray.rgb());
        assert_eq!(img.get_pixel(1, 5).0, Color::Blue.rgb());
        assert_eq!(img.get_pixel(7, 7).0, Color::Grey.rgb());
    }
}
