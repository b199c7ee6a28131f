use image::RgbaImage;

use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::FigResult;
use crate::foundation::math::{quarter_turns, rotated_extent, sin_cos_deg};

/// Rotate `src` counter-clockwise by `degrees`, growing the buffer to fit.
///
/// The output is exactly [`rotated_extent`] of the source size. Right angles are lossless;
/// other angles use nearest-neighbour sampling and fill uncovered corners with `fill`.
pub(crate) fn rotate_expand(src: &RgbaImage, degrees: f64, fill: Rgba8) -> FigResult<RgbaImage> {
    let (sw, sh) = src.dimensions();
    let out_size = rotated_extent(Size::new(sw, sh), degrees)?;

    match quarter_turns(degrees) {
        Some(0) => return Ok(src.clone()),
        Some(1) => return Ok(image::imageops::rotate270(src)),
        Some(2) => return Ok(image::imageops::rotate180(src)),
        Some(3) => return Ok(image::imageops::rotate90(src)),
        _ => {}
    }

    let (sin, cos) = sin_cos_deg(degrees);
    let src_cx = f64::from(sw) / 2.0;
    let src_cy = f64::from(sh) / 2.0;
    let out_cx = f64::from(out_size.width) / 2.0;
    let out_cy = f64::from(out_size.height) / 2.0;
    let fill = fill.to_pixel();

    let out = RgbaImage::from_fn(out_size.width, out_size.height, |x, y| {
        let dx = f64::from(x) + 0.5 - out_cx;
        let dy = f64::from(y) + 0.5 - out_cy;
        // Inverse of a visual counter-clockwise turn in y-down image space.
        let sx = (dx * cos - dy * sin + src_cx).floor();
        let sy = (dx * sin + dy * cos + src_cy).floor();
        if sx < 0.0 || sy < 0.0 || sx >= f64::from(sw) || sy >= f64::from(sh) {
            fill
        } else {
            *src.get_pixel(sx as u32, sy as u32)
        }
    });
    Ok(out)
}

/// Copy `src` over `dst` with its top-left at (`x`, `y`), clipped to `dst`.
///
/// Source alpha is discarded: pasted pixels keep their color channels and become fully
/// opaque, so transparent sources never punch holes through the background.
pub(crate) fn paste_opaque(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    let (dw, dh) = dst.dimensions();
    for (sx, sy, px) in src.enumerate_pixels() {
        let (Some(dx), Some(dy)) = (x.checked_add(sx), y.checked_add(sy)) else {
            continue;
        };
        if dx >= dw || dy >= dh {
            continue;
        }
        let [r, g, b, _] = px.0;
        dst.put_pixel(dx, dy, image::Rgba([r, g, b, 255]));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/raster.rs"]
mod tests;
