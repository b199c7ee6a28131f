use std::sync::Arc;

use image::RgbaImage;

use super::*;
use crate::component::Component;

#[derive(Debug)]
struct Tile(Size);

impl Component for Tile {
    fn size(&self) -> Size {
        self.0
    }

    fn render(&self) -> FigResult<RgbaImage> {
        Ok(RgbaImage::from_pixel(
            self.0.width,
            self.0.height,
            image::Rgba([0, 0, 0, 255]),
        ))
    }
}

#[test]
fn rejects_degenerate_grids() {
    assert!(GridLayout::new(0, Size::new(4, 4), 1).is_err());
    assert!(GridLayout::new(2, Size::new(0, 4), 1).is_err());
}

#[test]
fn two_by_two_grid_matches_padded_cells() {
    let g = GridLayout::new(2, Size::new(128, 128), 1).unwrap();
    assert_eq!(g.cell_origin(0).unwrap(), (0, 0));
    assert_eq!(g.cell_origin(1).unwrap(), (129, 0));
    assert_eq!(g.cell_origin(2).unwrap(), (0, 129));
    assert_eq!(g.cell_origin(3).unwrap(), (129, 129));
    assert_eq!(g.rows_for(4), 2);
    assert_eq!(g.rows_for(5), 3);
    assert_eq!(g.content_height(4).unwrap(), 257);
    assert_eq!(g.content_width(4).unwrap(), 257);
    assert_eq!(g.content_width(1).unwrap(), 128);
    assert_eq!(g.content_height(0).unwrap(), 0);
}

#[test]
fn place_all_grows_canvas_to_grid_extent() {
    let g = GridLayout::new(3, Size::new(10, 5), 2).unwrap();
    let tiles = (0..5).map(|_| Arc::new(Tile(Size::new(10, 5))) as SharedComponent);
    let mut canvas = Canvas::new();
    let n = g.place_all(&mut canvas, tiles).unwrap();
    assert_eq!(n, 5);
    assert_eq!(canvas.extent(), Size::new(34, 12));
    assert_eq!(canvas.placements()[4].x, 12);
    assert_eq!(canvas.placements()[4].y, 7);
}

#[test]
fn oversized_cells_overflow_as_validation_errors() {
    let g = GridLayout::new(2, Size::new(u32::MAX - 1, 4), 5).unwrap();
    assert_eq!(g.cell_origin(0).unwrap(), (0, 0));
    assert!(matches!(g.cell_origin(1), Err(FigError::Validation(_))));
    assert!(matches!(g.content_width(2), Err(FigError::Validation(_))));
    assert_eq!(g.content_width(1).unwrap(), u32::MAX - 1);

    let tall = GridLayout::new(1, Size::new(4, u32::MAX / 2), 2).unwrap();
    assert!(tall.content_height(3).is_err());
    assert!(tall.cell_origin(2).is_err());
}

#[test]
fn place_all_stops_at_the_first_overflowing_cell() {
    let g = GridLayout::new(2, Size::new(u32::MAX - 1, 1), 5).unwrap();
    let tiles = (0..2).map(|_| Arc::new(Tile(Size::new(1, 1))) as SharedComponent);
    let mut canvas = Canvas::new();
    assert!(g.place_all(&mut canvas, tiles).is_err());
    assert_eq!(canvas.len(), 1);
}
