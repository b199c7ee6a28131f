//! External resources: decoded bitmaps, fonts and text layout, colors.

pub(crate) mod color;
/// Image Source: decode and bilinear resize.
pub mod decode;
/// Font resolution and Parley text layout.
pub mod font;
