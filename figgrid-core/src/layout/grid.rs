use crate::canvas::Canvas;
use crate::component::SharedComponent;
use crate::foundation::core::Size;
use crate::foundation::error::{FigError, FigResult};

/// Row-major grid of equally sized cells separated by `pad` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    /// Cells per row, at least 1.
    pub columns: u32,
    /// Size of every cell.
    pub cell: Size,
    /// Gap between neighbouring cells on both axes.
    #[serde(default)]
    pub pad: u32,
}

impl GridLayout {
    /// Validated grid description.
    pub fn new(columns: u32, cell: Size, pad: u32) -> FigResult<Self> {
        if columns == 0 {
            return Err(FigError::validation("grid needs at least one column"));
        }
        if cell.is_empty() {
            return Err(FigError::validation("grid cells must be at least 1x1"));
        }
        Ok(Self { columns, cell, pad })
    }

    /// Top-left corner of the `index`-th cell.
    pub fn cell_origin(&self, index: u32) -> FigResult<(u32, u32)> {
        let cols = self.columns.max(1);
        let x = span(index % cols, self.cell.width, self.pad)?;
        let y = span(index / cols, self.cell.height, self.pad)?;
        Ok((x, y))
    }

    /// Rows needed for `count` cells.
    pub fn rows_for(&self, count: u32) -> u32 {
        count.div_ceil(self.columns.max(1))
    }

    /// Height covered by `count` cells, excluding a trailing pad.
    pub fn content_height(&self, count: u32) -> FigResult<u32> {
        extent(self.rows_for(count), self.cell.height, self.pad)
    }

    /// Width covered by a full row, excluding a trailing pad.
    pub fn content_width(&self, count: u32) -> FigResult<u32> {
        extent(count.min(self.columns.max(1)), self.cell.width, self.pad)
    }

    /// Place `components` in row-major order, unrotated. Returns how many were placed.
    pub fn place_all(
        &self,
        canvas: &mut Canvas,
        components: impl IntoIterator<Item = SharedComponent>,
    ) -> FigResult<u32> {
        let mut placed = 0u32;
        for component in components {
            let (x, y) = self.cell_origin(placed)?;
            canvas.add(x, y, component)?;
            placed += 1;
        }
        Ok(placed)
    }
}

/// Offset of the `n`-th cell along one axis.
fn span(n: u32, cell: u32, pad: u32) -> FigResult<u32> {
    n.checked_mul(cell)
        .zip(n.checked_mul(pad))
        .and_then(|(cells, pads)| cells.checked_add(pads))
        .ok_or_else(|| FigError::validation(format!("grid offset overflows u32 at cell {n}")))
}

/// Length of `n` cells along one axis without the trailing pad.
fn extent(n: u32, cell: u32, pad: u32) -> FigResult<u32> {
    if n == 0 {
        return Ok(0);
    }
    span(n - 1, cell, pad)?
        .checked_add(cell)
        .ok_or_else(|| FigError::validation(format!("grid of {n} cells overflows u32")))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
