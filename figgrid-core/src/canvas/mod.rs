//! Canvas composition: placements, extent accounting, rotation and paste.
//!
//! A [`Canvas`] accumulates placements in call order. Each placement grows the canvas extent
//! to cover the rotated bounding box of its component, and rendering replays every
//! placement from scratch onto a fresh background-filled buffer. Later placements overwrite
//! earlier ones where they overlap.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;

use crate::component::SharedComponent;
use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{FigError, FigResult};
use crate::foundation::math::rotated_extent;

/// Writing and presenting rendered canvases.
pub mod output;
pub(crate) mod raster;

/// File name used by [`Canvas::render_to`] callers that have no better name.
pub const DEFAULT_SAVE_NAME: &str = "CanvasRender.png";

/// One component at a position, with a counter-clockwise rotation in degrees.
#[derive(Clone, Debug)]
pub struct Placement {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// The placed component.
    pub component: SharedComponent,
    /// Area reserved on the canvas: the component size after rotation.
    pub extent: Size,
}

/// An ordered set of placements composited onto one image.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    total_width: u32,
    total_height: u32,
    background: Rgba8,
    placements: Vec<Placement>,
}

impl Canvas {
    /// Empty canvas with a white background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style background override.
    pub fn with_background(mut self, background: Rgba8) -> Self {
        self.background = background;
        self
    }

    /// Background color used for the base buffer and rotated corners.
    pub fn background(&self) -> Rgba8 {
        self.background
    }

    /// Current extent width.
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    /// Current extent height.
    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    /// Current extent; never shrinks as placements are added.
    pub fn extent(&self) -> Size {
        Size::new(self.total_width, self.total_height)
    }

    /// Placements in insertion (and paint) order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Return `true` when nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Place `component` unrotated at (`x`, `y`).
    pub fn add(&mut self, x: u32, y: u32, component: SharedComponent) -> FigResult<&mut Self> {
        self.add_component(x, y, component, 0.0)
    }

    /// Place `component` at (`x`, `y`) rotated counter-clockwise by `rotation_deg`.
    ///
    /// The extent grows to `max(total, pos + rotated size)` on each axis.
    pub fn add_component(
        &mut self,
        x: u32,
        y: u32,
        component: SharedComponent,
        rotation_deg: f64,
    ) -> FigResult<&mut Self> {
        let size = component.size();
        if size.is_empty() {
            return Err(FigError::validation(format!(
                "component size must be at least 1x1 (got {}x{})",
                size.width, size.height
            )));
        }
        let extent = rotated_extent(size, rotation_deg)?;
        let right = x
            .checked_add(extent.width)
            .ok_or_else(|| FigError::validation("placement right edge overflows u32"))?;
        let bottom = y
            .checked_add(extent.height)
            .ok_or_else(|| FigError::validation("placement bottom edge overflows u32"))?;

        self.total_width = self.total_width.max(right);
        self.total_height = self.total_height.max(bottom);
        tracing::debug!(
            x,
            y,
            rotation_deg,
            extent_w = extent.width,
            extent_h = extent.height,
            total_w = self.total_width,
            total_h = self.total_height,
            "placed component"
        );

        self.placements.push(Placement {
            x,
            y,
            rotation_deg,
            component,
            extent,
        });
        Ok(self)
    }

    /// Composite every placement, in order, onto a fresh buffer of the current extent.
    ///
    /// Any component failure aborts the whole render; no partial image is returned.
    #[tracing::instrument(skip(self), fields(placements = self.placements.len()))]
    pub fn render(&self) -> FigResult<RgbaImage> {
        if self.placements.is_empty() {
            return Err(FigError::validation("canvas has no placements"));
        }

        let mut out = RgbaImage::from_pixel(
            self.total_width,
            self.total_height,
            self.background.to_pixel(),
        );
        for p in &self.placements {
            let pixels = p.component.render()?;
            let expected = p.component.size();
            if pixels.dimensions() != (expected.width, expected.height) {
                return Err(FigError::validation(format!(
                    "component rendered {}x{} but declares {}x{}",
                    pixels.width(),
                    pixels.height(),
                    expected.width,
                    expected.height
                )));
            }
            let rotated = raster::rotate_expand(&pixels, p.rotation_deg, self.background)?;
            raster::paste_opaque(&mut out, &rotated, p.x, p.y);
        }
        tracing::debug!(
            width = self.total_width,
            height = self.total_height,
            "canvas rendered"
        );
        Ok(out)
    }

    /// Render, then write the result to `save_dir/save_name`, optionally opening a viewer.
    ///
    /// Nothing is written unless the whole composite succeeds. Returns the written path.
    pub fn render_to(
        &self,
        save_dir: impl AsRef<Path>,
        save_name: &str,
        show: bool,
    ) -> FigResult<PathBuf> {
        let img = self.render()?;
        let path = save_dir.as_ref().join(save_name);
        output::save_image(&img, &path)?;
        if show {
            output::show_image(&path)?;
        }
        Ok(path)
    }
}

/// Render independent canvases in parallel; results keep the input order.
pub fn render_many(canvases: &[&Canvas]) -> Vec<FigResult<RgbaImage>> {
    canvases.par_iter().map(|c| c.render()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/canvas.rs"]
mod tests;
