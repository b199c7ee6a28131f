//! figgrid composes image tiles and text labels onto one canvas and writes the result.
//!
//! It is a layout utility for figure grids such as side-by-side comparisons of model outputs.
//!
//! # Model
//!
//! 1. **Components** ([`ImageBox`], [`TextLabel`], or any [`Component`] implementation) declare a
//!    fixed pixel size and render a fresh buffer of exactly that size.
//! 2. A [`Canvas`] records placements `(x, y, rotation, component)` in call order. Each
//!    placement grows the canvas extent to cover the component's rotated bounding box
//!    ([`rotated_extent`]); the extent never shrinks.
//! 3. [`Canvas::render`] replays every placement onto a background-filled buffer: render,
//!    rotate counter-clockwise with expansion, paste opaquely. Later placements overwrite
//!    earlier ones. [`Canvas::render_to`] additionally writes the image file.
//!
//! Configuration is typed and checked at construction: a missing image reference, an unknown
//! alignment or a missing font fails before anything is placed. File existence for image
//! boxes is re-checked on every render.
//!
//! ```no_run
//! use std::sync::Arc;
//! use figgrid::{Canvas, ImageBox, ImageBoxConfig, TextLabel, TextLabelConfig};
//!
//! # fn main() -> figgrid::FigResult<()> {
//! let tile = Arc::new(ImageBox::new(ImageBoxConfig::square(128, "sample.png"))?);
//! let title = Arc::new(TextLabel::new(TextLabelConfig {
//!     width: 128,
//!     height: 32,
//!     text: "DDPM".into(),
//!     ..TextLabelConfig::default()
//! })?);
//!
//! let mut canvas = Canvas::new();
//! canvas.add(0, 0, tile.clone())?;
//! canvas.add(129, 0, tile)?;
//! canvas.add(0, 129, title)?;
//! canvas.render_to("./", "demo.png", false)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod canvas;
mod component;
mod foundation;
mod layout;

pub use assets::decode::{decode_image, load_image, resize_bilinear};
pub use assets::font::{
    DEFAULT_FONT_FAMILY, FontSource, LoadedFont, TextBrushRgba8, TextLayoutEngine, load_font,
    measure_layout,
};
pub use canvas::output::{save_image, show_image};
pub use canvas::{Canvas, DEFAULT_SAVE_NAME, Placement, render_many};
pub use component::image_box::{ImageBox, ImageBoxConfig};
pub use component::text_label::{TextAlign, TextLabel, TextLabelConfig};
pub use component::{Component, SharedComponent};
pub use foundation::core::{Margin, Rgba8, Size};
pub use foundation::error::{FigError, FigResult};
pub use foundation::math::rotated_extent;
pub use layout::figure::{ComponentSpec, FigureSpec, PlacementSpec};
pub use layout::grid::GridLayout;
