use crate::foundation::core::Size;
use crate::foundation::error::{FigError, FigResult};

/// `(sin, cos)` of an angle in degrees, exact on multiples of 90°.
pub(crate) fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let d = degrees.rem_euclid(360.0);
    if d == 0.0 {
        (0.0, 1.0)
    } else if d == 90.0 {
        (1.0, 0.0)
    } else if d == 180.0 {
        (0.0, -1.0)
    } else if d == 270.0 {
        (-1.0, 0.0)
    } else {
        d.to_radians().sin_cos()
    }
}

/// Quarter turns for angles that are an exact multiple of 90°, counter-clockwise.
pub(crate) fn quarter_turns(degrees: f64) -> Option<u8> {
    let d = degrees.rem_euclid(360.0);
    if d % 90.0 == 0.0 {
        Some((d / 90.0) as u8 % 4)
    } else {
        None
    }
}

/// Axis-aligned extent of a `size` rectangle rotated by `degrees`.
///
/// `floor(w·|cos θ| + h·|sin θ|)` by `floor(h·|cos θ| + w·|sin θ|)`, never below 1x1.
/// Canvas extent accounting and the rotated pixel buffer both use this, so a placement
/// never outgrows the area reserved for it.
pub fn rotated_extent(size: Size, degrees: f64) -> FigResult<Size> {
    if !degrees.is_finite() {
        return Err(FigError::validation(format!(
            "rotation must be finite (got {degrees})"
        )));
    }
    let (sin, cos) = sin_cos_deg(degrees);
    let (sin, cos) = (sin.abs(), cos.abs());
    let w = f64::from(size.width);
    let h = f64::from(size.height);
    let width = (w * cos + h * sin).floor().max(1.0) as u32;
    let height = (h * cos + w * sin).floor().max(1.0) as u32;
    Ok(Size::new(width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
