//! # embedded-graphics support for the frame buffer
//!
//! This module is behind the "graphics" feature flag. It implements
//! [`DrawTarget`] for [`FrameBuffer`], so all the circle/rectangle/text
//! primitives of the embedded-graphics library draw straight into the
//! buffer. Pixels are routed through [`FrameBuffer::paint_pixel`], which
//! means the configured rotation, mirroring, scaling and write mode apply
//! to embedded-graphics drawing as well.

use core::convert::Infallible;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::framebuffer::{Colour, FrameBuffer};

impl From<BinaryColor> for Colour {
    fn from(color: BinaryColor) -> Colour {
        match color {
            BinaryColor::On => Colour::White,
            BinaryColor::Off => Colour::Black,
        }
    }
}

impl<'a> DrawTarget for FrameBuffer<'a> {
    type Color = BinaryColor;
    // Out of bounds pixels are dropped by paint_pixel, so drawing can
    // never fail.
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.paint_pixel(point.x, point.y, Colour::from(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, Colour::from(color));
        Ok(())
    }
}

impl<'a> OriginDimensions for FrameBuffer<'a> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}
