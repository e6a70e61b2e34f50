//! Core types for peg-board puzzle scan extraction.
//!
//! This crate is intentionally small and purely symbolic. It holds the fixed
//! color palette, the piece catalog with its rotation/flip variants, and the
//! strict color classifier, but does *not* depend on any concrete circle
//! detector or image decoding library.

mod classify;
mod image;
mod logger;
mod palette;
mod shape;

pub use classify::{nearest_color, sample_exact, UnknownColorError};
pub use image::{ChannelOrder, RgbImageView};
pub use palette::{Color, PieceKind};
pub use shape::{catalog_transformations, transformations, ShapeGrid, Transformation};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
