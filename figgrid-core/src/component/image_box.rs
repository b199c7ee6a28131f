use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::assets::decode::{load_image, resize_bilinear};
use crate::component::Component;
use crate::foundation::core::{Margin, Size};
use crate::foundation::error::{FigError, FigResult};

fn default_side() -> u32 {
    16
}

/// Construction parameters for an [`ImageBox`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageBoxConfig {
    /// Target width in pixels.
    #[serde(default = "default_side")]
    pub width: u32,
    /// Target height in pixels.
    #[serde(default = "default_side")]
    pub height: u32,
    /// Outer spacing `[up, down, left, right]`.
    #[serde(default)]
    pub margin: Margin,
    /// Source image file.
    #[serde(default)]
    pub image: Option<PathBuf>,
    /// Informational rotation hint in degrees; the canvas placement decides actual rotation.
    #[serde(default)]
    pub rotate: f64,
}

impl Default for ImageBoxConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            margin: Margin::default(),
            image: None,
            rotate: 0.0,
        }
    }
}

impl ImageBoxConfig {
    /// Square box of `side` pixels showing `image`.
    pub fn square(side: u32, image: impl Into<PathBuf>) -> Self {
        Self {
            width: side,
            height: side,
            image: Some(image.into()),
            ..Self::default()
        }
    }
}

/// A component that shows an image file resized to a fixed size.
#[derive(Clone, Debug)]
pub struct ImageBox {
    size: Size,
    margin: Margin,
    image: PathBuf,
    rotate: f64,
}

impl ImageBox {
    /// Validate `config` and build the box.
    ///
    /// The image file is not opened here; its existence is checked on every render.
    pub fn new(config: ImageBoxConfig) -> FigResult<Self> {
        let size = Size::non_empty(config.width, config.height)?;
        let image = config
            .image
            .ok_or_else(|| FigError::configuration("image box has no image reference"))?;
        if image.as_os_str().is_empty() {
            return Err(FigError::configuration("image box has an empty image path"));
        }
        if !config.rotate.is_finite() {
            return Err(FigError::validation("image box rotate hint must be finite"));
        }
        Ok(Self {
            size,
            margin: config.margin,
            image,
            rotate: config.rotate,
        })
    }

    /// Source image path.
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Rotation hint carried from the configuration.
    pub fn rotate_hint(&self) -> f64 {
        self.rotate
    }
}

impl Component for ImageBox {
    fn size(&self) -> Size {
        self.size
    }

    fn margin(&self) -> Margin {
        self.margin
    }

    #[tracing::instrument(skip(self), fields(image = %self.image.display()))]
    fn render(&self) -> FigResult<RgbaImage> {
        let src = load_image(&self.image)?;
        resize_bilinear(&src, self.size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/image_box.rs"]
mod tests;
