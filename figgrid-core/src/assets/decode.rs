use std::path::Path;

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};

use crate::foundation::core::Size;
use crate::foundation::error::{FigError, FigResult};

/// Decode the image at `path` into straight RGBA8.
///
/// A missing file is [`FigError::ResourceNotFound`]; a file that exists but is not a
/// decodable image is [`FigError::Decode`].
pub fn load_image(path: &Path) -> FigResult<RgbaImage> {
    if !path.is_file() {
        return Err(FigError::resource_not_found(format!(
            "image '{}' does not exist",
            path.display()
        )));
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("read image bytes '{}'", path.display()))?;
    let dyn_img = image::load_from_memory(&bytes)
        .map_err(|e| FigError::decode(format!("image '{}': {e}", path.display())))?;
    Ok(dyn_img.to_rgba8())
}

/// Decode an in-memory image into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> FigResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FigError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Resize to exactly `size` with bilinear filtering.
pub fn resize_bilinear(src: &RgbaImage, size: Size) -> FigResult<RgbaImage> {
    if size.is_empty() {
        return Err(FigError::validation("resize target must be at least 1x1"));
    }
    if src.dimensions() == (size.width, size.height) {
        return Ok(src.clone());
    }
    Ok(image::imageops::resize(
        src,
        size.width,
        size.height,
        FilterType::Triangle,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
