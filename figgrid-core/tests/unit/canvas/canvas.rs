use std::sync::Arc;

use super::*;
use crate::component::Component;

#[derive(Debug)]
struct Solid {
    size: Size,
    color: image::Rgba<u8>,
}

impl Component for Solid {
    fn size(&self) -> Size {
        self.size
    }

    fn render(&self) -> FigResult<RgbaImage> {
        Ok(RgbaImage::from_pixel(
            self.size.width,
            self.size.height,
            self.color,
        ))
    }
}

#[derive(Debug)]
struct Broken;

impl Component for Broken {
    fn size(&self) -> Size {
        Size::new(2, 2)
    }

    fn render(&self) -> FigResult<RgbaImage> {
        Err(FigError::configuration("broken component"))
    }
}

#[derive(Debug)]
struct Liar;

impl Component for Liar {
    fn size(&self) -> Size {
        Size::new(4, 4)
    }

    fn render(&self) -> FigResult<RgbaImage> {
        Ok(RgbaImage::new(3, 3))
    }
}

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> SharedComponent {
    Arc::new(Solid {
        size: Size::new(w, h),
        color: image::Rgba([rgb[0], rgb[1], rgb[2], 255]),
    })
}

const WHITE: image::Rgba<u8> = image::Rgba([255, 255, 255, 255]);

#[test]
fn unrotated_extent_is_position_plus_size() {
    let mut c = Canvas::new();
    c.add(3, 5, solid(10, 20, [0, 0, 0])).unwrap();
    assert_eq!(c.extent(), Size::new(13, 25));
}

#[test]
fn rotated_extent_follows_floor_formula() {
    let mut c = Canvas::new();
    c.add_component(2, 1, solid(100, 40, [0, 0, 0]), 30.0)
        .unwrap();
    let th = 30f64.to_radians();
    let rw = (100.0 * th.cos() + 40.0 * th.sin()).floor() as u32;
    let rh = (40.0 * th.cos() + 100.0 * th.sin()).floor() as u32;
    assert_eq!(c.total_width(), 2 + rw);
    assert_eq!(c.total_height(), 1 + rh);
    assert_eq!(c.placements()[0].extent, Size::new(rw, rh));
}

#[test]
fn extent_never_shrinks() {
    let mut c = Canvas::new();
    c.add(0, 0, solid(50, 50, [0, 0, 0])).unwrap();
    let before = c.extent();
    c.add(1, 1, solid(2, 2, [0, 0, 0])).unwrap();
    assert_eq!(c.extent(), before);
    c.add(60, 0, solid(5, 5, [0, 0, 0])).unwrap();
    assert_eq!(c.extent(), Size::new(65, 50));
}

#[test]
fn placements_keep_insertion_order() {
    let mut c = Canvas::new();
    c.add(0, 0, solid(1, 1, [0, 0, 0]))
        .unwrap()
        .add_component(5, 6, solid(2, 3, [0, 0, 0]), 90.0)
        .unwrap();
    assert_eq!(c.len(), 2);
    let p = &c.placements()[1];
    assert_eq!((p.x, p.y, p.rotation_deg), (5, 6, 90.0));
    assert_eq!(p.extent, Size::new(3, 2));
}

#[test]
fn empty_canvas_render_is_an_error() {
    let c = Canvas::new();
    assert!(c.is_empty());
    assert!(matches!(c.render().unwrap_err(), FigError::Validation(_)));
}

#[test]
fn non_finite_rotation_is_rejected_without_side_effects() {
    let mut c = Canvas::new();
    assert!(
        c.add_component(0, 0, solid(4, 4, [0, 0, 0]), f64::NAN)
            .is_err()
    );
    assert!(c.is_empty());
    assert_eq!(c.extent(), Size::new(0, 0));
}

#[test]
fn render_fills_background_and_paints_placements() {
    let mut c = Canvas::new();
    c.add(2, 2, solid(2, 2, [10, 20, 30])).unwrap();
    c.add(0, 0, solid(1, 1, [0, 0, 0])).unwrap();
    let img = c.render().unwrap();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(*img.get_pixel(0, 0), image::Rgba([0, 0, 0, 255]));
    assert_eq!(*img.get_pixel(1, 1), WHITE);
    assert_eq!(*img.get_pixel(3, 3), image::Rgba([10, 20, 30, 255]));
}

#[test]
fn later_placement_wins_in_overlap() {
    let mut c = Canvas::new();
    c.add(0, 0, solid(4, 4, [255, 0, 0])).unwrap();
    c.add(2, 2, solid(4, 4, [0, 0, 255])).unwrap();
    let img = c.render().unwrap();
    assert_eq!(*img.get_pixel(1, 1), image::Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(2, 2), image::Rgba([0, 0, 255, 255]));
    assert_eq!(*img.get_pixel(3, 3), image::Rgba([0, 0, 255, 255]));
    assert_eq!(*img.get_pixel(5, 0), WHITE);
}

#[test]
fn custom_background_is_used() {
    let bg = Rgba8::opaque(1, 2, 3);
    let mut c = Canvas::new().with_background(bg);
    c.add(1, 1, solid(1, 1, [0, 0, 0])).unwrap();
    let img = c.render().unwrap();
    assert_eq!(*img.get_pixel(0, 0), bg.to_pixel());
}

#[test]
fn rotated_placement_fits_reserved_area() {
    let mut c = Canvas::new();
    c.add_component(0, 0, solid(30, 10, [0, 0, 0]), 45.0).unwrap();
    c.add_component(0, 0, solid(30, 10, [0, 0, 0]), 120.0).unwrap();
    let img = c.render().unwrap();
    assert_eq!(img.dimensions(), (c.total_width(), c.total_height()));
}

#[test]
fn failing_component_aborts_render() {
    let mut c = Canvas::new();
    c.add(0, 0, solid(2, 2, [0, 0, 0])).unwrap();
    c.add(2, 0, Arc::new(Broken)).unwrap();
    assert!(matches!(
        c.render().unwrap_err(),
        FigError::Configuration(_)
    ));
}

#[test]
fn component_rendering_wrong_size_is_rejected() {
    let mut c = Canvas::new();
    c.add(0, 0, Arc::new(Liar)).unwrap();
    assert!(matches!(c.render().unwrap_err(), FigError::Validation(_)));
}

#[test]
fn rerender_after_more_placements_replays_everything() {
    let mut c = Canvas::new();
    c.add(0, 0, solid(2, 2, [9, 9, 9])).unwrap();
    let first = c.render().unwrap();
    assert_eq!(first.dimensions(), (2, 2));

    c.add(2, 0, solid(2, 2, [7, 7, 7])).unwrap();
    let second = c.render().unwrap();
    assert_eq!(second.dimensions(), (4, 2));
    assert_eq!(*second.get_pixel(0, 0), image::Rgba([9, 9, 9, 255]));
    assert_eq!(*second.get_pixel(3, 1), image::Rgba([7, 7, 7, 255]));
}

#[test]
fn shared_component_can_be_placed_many_times() {
    let tile = solid(2, 2, [5, 5, 5]);
    let mut c = Canvas::new();
    c.add(0, 0, tile.clone()).unwrap();
    c.add(3, 0, tile.clone()).unwrap();
    c.add(0, 3, tile).unwrap();
    let img = c.render().unwrap();
    assert_eq!(img.dimensions(), (5, 5));
    assert_eq!(*img.get_pixel(4, 1), image::Rgba([5, 5, 5, 255]));
    assert_eq!(*img.get_pixel(2, 2), WHITE);
}

#[test]
fn render_many_preserves_order() {
    let mut a = Canvas::new();
    a.add(0, 0, solid(1, 1, [1, 1, 1])).unwrap();
    let b = Canvas::new();
    let mut d = Canvas::new();
    d.add(0, 0, solid(3, 1, [2, 2, 2])).unwrap();

    let out = render_many(&[&a, &b, &d]);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].as_ref().unwrap().dimensions(), (1, 1));
    assert!(out[1].is_err());
    assert_eq!(out[2].as_ref().unwrap().dimensions(), (3, 1));
}
