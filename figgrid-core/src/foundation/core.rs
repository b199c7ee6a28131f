use crate::foundation::error::{FigError, FigResult};

/// Pixel dimensions of a component or canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a size, rejecting zero-area dimensions.
    pub fn non_empty(width: u32, height: u32) -> FigResult<Self> {
        if width == 0 || height == 0 {
            return Err(FigError::validation(format!(
                "size must be at least 1x1 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Outer spacing around a component: up, down, left, right.
///
/// Stored alongside every component; rendering does not consume it yet.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct Margin {
    /// Space above.
    pub top: u32,
    /// Space below.
    pub bottom: u32,
    /// Space on the left.
    pub left: u32,
    /// Space on the right.
    pub right: u32,
}

impl From<[u32; 4]> for Margin {
    fn from([top, bottom, left, right]: [u32; 4]) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

impl From<Margin> for [u32; 4] {
    fn from(m: Margin) -> Self {
        [m.top, m.bottom, m.left, m.right]
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the default background.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque black, the text color.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Construct a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as an array, in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert into an `image` pixel.
    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba(self.to_array())
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
