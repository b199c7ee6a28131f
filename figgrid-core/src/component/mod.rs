//! Placeable units: anything with a fixed pixel size that can render itself.

use std::sync::Arc;

use image::RgbaImage;

use crate::foundation::core::{Margin, Size};
use crate::foundation::error::FigResult;

/// Bitmap tile backed by an image file.
pub mod image_box;
/// Rasterized single-line text with alignment.
pub mod text_label;

/// A rectangular element that can be placed on a [`crate::Canvas`].
///
/// `render` must return a fresh buffer of exactly [`Component::size`] on every call and must
/// not mutate the component. New variants plug into the canvas without changing it.
pub trait Component: Send + Sync + std::fmt::Debug {
    /// Fixed pixel size of the buffer returned by [`Component::render`].
    fn size(&self) -> Size;

    /// Outer spacing; informational only.
    fn margin(&self) -> Margin {
        Margin::default()
    }

    /// Produce this component's pixels.
    fn render(&self) -> FigResult<RgbaImage>;
}

/// Shared handle stored by canvas placements; the canvas never owns components exclusively.
pub type SharedComponent = Arc<dyn Component>;
