//! Palette classification of sampled pixels.
//!
//! The strict path (`sample_exact`) requires the modal color under a
//! circular mask to match a palette entry byte-for-byte. There is no
//! approximate fallback there: silently accepting a near-match could
//! mislabel a peg and corrupt shape matching downstream. The
//! nearest-distance lookup exists only as a standalone utility.

use std::collections::BTreeMap;

use crate::image::RgbImageView;
use crate::palette::Color;

/// A modal sample color that matches no palette entry exactly.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sampled color {rgb:?} not in palette")]
pub struct UnknownColorError {
    pub rgb: [u8; 3],
}

#[inline]
fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b)
        .map(|(&x, y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// Palette entry with minimal Euclidean RGB distance to `rgb`.
///
/// Total over the (non-empty) palette; ties resolve to the earlier entry
/// in [`Color::ALL`].
pub fn nearest_color(rgb: [u8; 3]) -> Color {
    let mut best = Color::ALL[0];
    let mut best_d = distance_sq(rgb, best.rgb());
    for &color in &Color::ALL[1..] {
        let d = distance_sq(rgb, color.rgb());
        if d < best_d {
            best = color;
            best_d = d;
        }
    }
    best
}

fn exact_color(rgb: [u8; 3]) -> Option<Color> {
    Color::ALL.iter().copied().find(|c| c.rgb() == rgb)
}

/// Classify the peg under a circular mask of `radius` pixels around `center`.
///
/// Returns `Ok(None)` when the mask covers no pixels (the center lies
/// outside the image). Otherwise the modal pixel value inside the mask must
/// equal a palette RGB triple exactly; anything else is an
/// [`UnknownColorError`]. Modal ties resolve to the smallest RGB triple.
pub fn sample_exact(
    img: &RgbImageView<'_>,
    center: (i32, i32),
    radius: i32,
) -> Result<Option<Color>, UnknownColorError> {
    let (cx, cy) = center;
    let mut counts: BTreeMap<[u8; 3], usize> = BTreeMap::new();

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            if let Some(px) = img.pixel(cx + dx, cy + dy) {
                *counts.entry(px).or_insert(0) += 1;
            }
        }
    }

    let mut modal: Option<([u8; 3], usize)> = None;
    for (&rgb, &count) in &counts {
        // BTreeMap iterates in ascending RGB order, so on a tie the first
        // (smallest) triple is kept.
        if modal.map_or(true, |(_, best)| count > best) {
            modal = Some((rgb, count));
        }
    }

    match modal {
        None => Ok(None),
        Some((rgb, _)) => match exact_color(rgb) {
            Some(color) => Ok(Some(color)),
            None => Err(UnknownColorError { rgb }),
        },
    }
}
