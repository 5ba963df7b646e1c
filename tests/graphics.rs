//! Tests for the embedded-graphics integration behind the "graphics"
//! feature flag.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use remote_panel::fonts::FONT_6X8;
use remote_panel::{FrameBuffer, Rotate};

fn pixel(fb: &FrameBuffer, x: usize, y: usize) -> bool {
    let row = (fb.width() + 7) / 8;
    fb.buffer()[x / 8 + y * row] & (0b1000_0000 >> (x & 0b111)) != 0
}

#[test]
fn size_reports_the_physical_dimensions() {
    let mut buffer = [0u8; 16];
    let fb = FrameBuffer::new(16, 8, &FONT_6X8, &mut buffer).unwrap();
    assert_eq!(fb.size(), Size::new(16, 8));
}

#[test]
fn draw_iter_sets_and_clears_pixels() {
    let mut buffer = [0u8; 16];
    let mut fb = FrameBuffer::new(16, 8, &FONT_6X8, &mut buffer).unwrap();

    fb.draw_iter([
        Pixel(Point::new(1, 1), BinaryColor::On),
        Pixel(Point::new(2, 2), BinaryColor::On),
        Pixel(Point::new(1, 1), BinaryColor::Off),
    ])
    .unwrap();

    assert!(!pixel(&fb, 1, 1));
    assert!(pixel(&fb, 2, 2));
}

#[test]
fn out_of_bounds_pixels_are_dropped() {
    let mut buffer = [0u8; 16];
    let mut fb = FrameBuffer::new(16, 8, &FONT_6X8, &mut buffer).unwrap();

    fb.draw_iter([
        Pixel(Point::new(-1, 0), BinaryColor::On),
        Pixel(Point::new(16, 0), BinaryColor::On),
        Pixel(Point::new(0, 8), BinaryColor::On),
    ])
    .unwrap();

    assert!(fb.buffer().iter().all(|b| *b == 0));
}

#[test]
fn clear_fills_the_buffer() {
    let mut buffer = [0u8; 16];
    let mut fb = FrameBuffer::new(16, 8, &FONT_6X8, &mut buffer).unwrap();

    DrawTarget::clear(&mut fb, BinaryColor::On).unwrap();
    assert!(fb.buffer().iter().all(|b| *b == 0xFF));
}

#[test]
fn drawing_respects_the_configured_transform() {
    let mut buffer = [0u8; 16];
    let mut fb = FrameBuffer::new(16, 8, &FONT_6X8, &mut buffer).unwrap();

    fb.set_rotate(Rotate::Rotate180);
    fb.draw_iter([Pixel(Point::new(0, 0), BinaryColor::On)])
        .unwrap();
    assert!(pixel(&fb, 15, 7));
}
