use std::path::Path;

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::foundation::error::FigResult;

/// Write `img` to `path`, creating parent directories.
///
/// The format follows the file extension (PNG when unknown). Formats without an alpha
/// channel receive an RGB8 flattening that drops alpha.
pub fn save_image(img: &RgbaImage, path: &Path) -> FigResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let dyn_img = if supports_alpha(format) {
        DynamicImage::ImageRgba8(img.clone())
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).to_rgb8())
    };
    dyn_img
        .save_with_format(path, format)
        .with_context(|| format!("write image '{}'", path.display()))?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "wrote image");
    Ok(())
}

fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Tga
            | ImageFormat::Qoi
            | ImageFormat::Ico
    )
}

/// Open `path` in the platform's default image viewer without waiting for it.
pub fn show_image(path: &Path) -> FigResult<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        std::process::Command::new("xdg-open")
    };
    cmd.arg(path)
        .spawn()
        .with_context(|| format!("launch image viewer for '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/output.rs"]
mod tests;
