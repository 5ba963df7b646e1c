//! # Line, rectangle and circle drawing
//!
//! Axis aligned lines take a fast path that works on whole bytes of the
//! frame buffer with edge masks, replicating rows for the current scale.
//! Everything else steps pixel by pixel through
//! [`FrameBuffer::paint_pixel`]: lines with Bresenham, circles with the
//! integer midpoint algorithm.
//!
//! Endpoints are normalised before drawing, so only the resulting pixel set
//! is defined, not the draw direction. A line whose (normalised) first
//! endpoint leaves the canvas after the transform is dropped as a whole;
//! the remaining clipping happens per pixel or per byte.

use crate::framebuffer::{FrameBuffer, Scale};

impl<'a> FrameBuffer<'a> {
    /// Fast line drawing for canvas y0 == y1.
    ///
    /// Coordinates are canvas (transformed, unscaled) pixels.
    pub(crate) fn draw_horizontal_line(&mut self, x0: i32, y0: i32, x1: i32) {
        let w = (self.width / self.scale as usize) as i32;
        let h = (self.height / self.scale as usize) as i32;
        if y0 < 0 || y0 >= h {
            return;
        }
        let x0 = x0.max(0) as usize;
        let x1 = x1.min(w - 1);
        if x1 < x0 as i32 {
            return;
        }
        let x1 = x1 as usize;

        let colour = self.colour;
        let row = self.row_bytes();
        match self.scale {
            // x = 8 pixels/byte; y = 1 row/pixel
            Scale::Scale1 => {
                let mut mask: u8 = 0b1111_1111 >> (x0 & 0b111);
                let last_mask = (0b1111_1111_1000_0000u16 >> (x1 & 0b111)) as u8;
                let x0 = x0 / 8;
                let x1 = x1 / 8;
                let mut address = x0 + y0 as usize * row;
                for x in x0..=x1 {
                    if x == x1 {
                        // last byte
                        mask &= last_mask;
                    }
                    self.combine(address, mask, colour);
                    address += 1;
                    mask = 0b1111_1111;
                }
            }
            // x = 4 pixels/byte; y = 2 rows/pixel
            Scale::Scale2 => {
                let mut mask: u8 = 0b1111_1111 >> (2 * (x0 & 0b11));
                let last_mask = (0b1111_1111_1000_0000u16 >> (2 * (x1 & 0b11) + 1)) as u8;
                let x0 = x0 / 4;
                let x1 = x1 / 4;
                let y0 = y0 as usize * 2;
                let mut address = x0 + y0 * row;
                for x in x0..=x1 {
                    if x == x1 {
                        // last byte
                        mask &= last_mask;
                    }
                    self.combine(address, mask, colour);
                    self.combine(address + row, mask, colour);
                    address += 1;
                    mask = 0b1111_1111;
                }
            }
            // x = 2 pixels/byte; y = 4 rows/pixel
            Scale::Scale4 => {
                let mut mask: u8 = 0b1111_1111 >> (4 * (x0 & 0b1));
                let last_mask = (0b1111_1111_1000_0000u16 >> (4 * (x1 & 0b1) + 3)) as u8;
                let x0 = x0 / 2;
                let x1 = x1 / 2;
                let y0 = y0 as usize * 4;
                let mut address = x0 + y0 * row;
                for x in x0..=x1 {
                    if x == x1 {
                        // last byte
                        mask &= last_mask;
                    }
                    self.combine(address, mask, colour);
                    self.combine(address + row, mask, colour);
                    self.combine(address + 2 * row, mask, colour);
                    self.combine(address + 3 * row, mask, colour);
                    address += 1;
                    mask = 0b1111_1111;
                }
            }
        }
    }

    /// Fast line drawing for canvas x0 == x1.
    ///
    /// Coordinates are canvas (transformed, unscaled) pixels.
    pub(crate) fn draw_vertical_line(&mut self, x0: i32, y0: i32, y1: i32) {
        let w = (self.width / self.scale as usize) as i32;
        let h = (self.height / self.scale as usize) as i32;
        if x0 < 0 || x0 >= w {
            return;
        }
        let y0 = y0.max(0) as usize;
        let y1 = y1.min(h - 1);
        if y1 < y0 as i32 {
            return;
        }
        let y1 = y1 as usize;
        let x0 = x0 as usize;

        let colour = self.colour;
        let row = self.row_bytes();
        let (mask, x0, y0, y1): (u8, usize, usize, usize) = match self.scale {
            // x = 8 pixels/byte; y = 1 row/pixel
            Scale::Scale1 => (0b1000_0000 >> (x0 & 0b111), x0 / 8, y0, y1),
            // x = 4 pixels/byte; y = 2 rows/pixel
            Scale::Scale2 => (0b1100_0000 >> (2 * (x0 & 0b11)), x0 / 4, y0 * 2, 2 * y1 + 1),
            // x = 2 pixels/byte; y = 4 rows/pixel
            Scale::Scale4 => (0b1111_0000 >> (4 * (x0 & 0b1)), x0 / 2, y0 * 4, 4 * y1 + 3),
        };

        let mut address = x0 + y0 * row;
        for _ in y0..=y1 {
            self.combine(address, mask, colour);
            address += row;
        }
    }

    /// Draw a line between two logical points in the current colour.
    ///
    /// Lines that are axis aligned after the transform use the byte-wise
    /// fast paths, everything else is Bresenham through
    /// [`FrameBuffer::paint_pixel`].
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (mut x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (mut y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };

        let (tx0, ty0) = self.transform(x0, y0);
        if !self.on_canvas(tx0, ty0) {
            // off screen
            return;
        }
        let (tx1, ty1) = self.transform(x1, y1);
        // Clipped is OK

        if ty0 == ty1 {
            let (a, b) = if tx0 > tx1 { (tx1, tx0) } else { (tx0, tx1) };
            self.draw_horizontal_line(a, ty0, b);
        } else if tx0 == tx1 {
            let (a, b) = if ty0 > ty1 { (ty1, ty0) } else { (ty0, ty1) };
            self.draw_vertical_line(tx0, a, b);
        } else {
            // https://en.wikipedia.org/wiki/Bresenham's_line_algorithm
            let colour = self.colour;
            let dx = (x1 - x0).abs();
            let sx = if x0 < x1 { 1 } else { -1 };
            let dy = -(y1 - y0).abs();
            let sy = if y0 < y1 { 1 } else { -1 };
            let mut error = dx + dy;

            loop {
                self.paint_pixel(x0, y0, colour);
                let e2 = 2 * error;
                if e2 >= dy {
                    if x0 == x1 {
                        break;
                    }
                    error += dy;
                    x0 += sx;
                }
                if e2 <= dx {
                    if y0 == y1 {
                        break;
                    }
                    error += dx;
                    y0 += sy;
                }
            }
        }
    }

    /// Draw a filled rectangle between two corners.
    pub fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        for y in y0..=y1 {
            self.draw_line(x0, y, x1, y);
        }
    }

    /// Draw a rectangle outline between two corners.
    pub fn draw_open_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        self.draw_line(x0, y0, x1, y0);
        self.draw_line(x0, y1, x1, y1);
        if y1 - y0 > 1 {
            self.draw_line(x0, y0 + 1, x0, y1 - 1);
            self.draw_line(x1, y0 + 1, x1, y1 - 1);
        }
    }

    /// Draw a filled circle.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32) {
        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut dx = 0;
        let mut dy = radius;

        // fill line through the centre
        self.draw_line(x - radius, y, x + radius, y);

        while dx < dy {
            if f >= 0 {
                dy -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            dx += 1;
            ddf_x += 2;
            f += ddf_x;

            // fill lines connecting the symmetric point pairs
            self.draw_line(x - dx, y + dy, x + dx, y + dy);
            self.draw_line(x - dx, y - dy, x + dx, y - dy);
            self.draw_line(x - dy, y + dx, x + dy, y + dx);
            self.draw_line(x - dy, y - dx, x + dy, y - dx);
        }
    }

    /// Draw a circle outline.
    pub fn draw_open_circle(&mut self, x: i32, y: i32, radius: i32) {
        let colour = self.colour;
        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut dx = 0;
        let mut dy = radius;

        self.paint_pixel(x, y + radius, colour);
        self.paint_pixel(x, y - radius, colour);
        self.paint_pixel(x + radius, y, colour);
        self.paint_pixel(x - radius, y, colour);

        while dx < dy {
            if f >= 0 {
                dy -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            dx += 1;
            ddf_x += 2;
            f += ddf_x;

            // 8 points of symmetry
            self.paint_pixel(x + dx, y + dy, colour);
            self.paint_pixel(x - dx, y + dy, colour);
            self.paint_pixel(x + dx, y - dy, colour);
            self.paint_pixel(x - dx, y - dy, colour);
            self.paint_pixel(x + dy, y + dx, colour);
            self.paint_pixel(x - dy, y + dx, colour);
            self.paint_pixel(x + dy, y - dx, colour);
            self.paint_pixel(x - dy, y - dx, colour);
        }
    }
}
