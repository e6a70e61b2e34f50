//! Borrowed view over a packed 8-bit color image.

/// Byte order of the packed 3-channel buffer.
///
/// Scans extracted with OpenCV-style tooling arrive as BGR; the view
/// normalizes so callers always receive RGB triples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

/// Lightweight view over a row-major, 3-bytes-per-pixel image buffer.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub channel_order: ChannelOrder,
    /// Packed pixel data, `len = width * height * 3`.
    pub data: &'a [u8],
}

impl<'a> RgbImageView<'a> {
    /// View over an RGB-ordered buffer.
    pub fn rgb(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            channel_order: ChannelOrder::Rgb,
            data,
        }
    }

    /// View over a BGR-ordered buffer (OpenCV convention).
    pub fn bgr(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            channel_order: ChannelOrder::Bgr,
            data,
        }
    }

    /// Pixel at `(x, y)` in RGB order, or `None` outside the image.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        let px = self.data.get(idx..idx + 3)?;
        Some(match self.channel_order {
            ChannelOrder::Rgb => [px[0], px[1], px[2]],
            ChannelOrder::Bgr => [px[2], px[1], px[0]],
        })
    }
}
