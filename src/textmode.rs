//! # Text rendering on the frame buffer
//!
//! Glyphs reach the canvas through [`FrameBuffer::write_image`], so the
//! current colour, write mode, rotation, mirroring and scale all apply to
//! text as well. The frame buffer keeps a text cursor in logical pixels and
//! implements [`core::fmt::Write`], so the `write!()` macros work directly
//! on it.

use core::fmt;

use crate::framebuffer::FrameBuffer;

/// An indexable glyph table.
///
/// Glyphs are fixed size, row major bitmaps with byte aligned rows and the
/// leftmost pixel in the most significant bit, ready for
/// [`FrameBuffer::write_image`]. See [`crate::fonts`] for the built-in font.
pub struct Font {
    /// Glyph width in pixels
    pub width: u8,
    /// Glyph height in pixels
    pub height: u8,
    /// Bitmap lookup for a character
    pub lookup: fn(char) -> &'static [u8],
}

impl Font {
    /// The bitmap for `ch`. Unmapped characters yield a fallback glyph.
    pub fn glyph(&self, ch: char) -> &'static [u8] {
        (self.lookup)(ch)
    }
}

impl<'a> FrameBuffer<'a> {
    /// Move the text cursor, in logical pixels
    pub fn move_xy(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Current cursor X location in logical pixels
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current cursor Y location in logical pixels
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Write one character at the cursor using the current font.
    ///
    /// `'\n'` returns the cursor to x = 0 and advances it by the tallest
    /// glyph written on the line. Characters that would run past the right
    /// edge are dropped whole rather than partially displayed.
    pub fn write_char(&mut self, ch: char) {
        let width = self.font.width as i32;
        let height = self.font.height as u32;

        if ch == '\n' {
            self.x = 0;
            self.y += self.font_height as i32;
            self.font_height = 0;
        } else {
            if self.x + width > self.width as i32 {
                // Don't display partial characters
                return;
            }
            let glyph = self.font.glyph(ch);
            self.write_image(glyph, self.x, self.y, self.font.width as u32, height);
            self.x += width;
            self.font_height = self.font_height.max(height);
        }
    }

    /// Write a custom character image at the cursor and advance it.
    pub fn put_custom_char(&mut self, image: &[u8], width: u32, height: u32) -> &mut Self {
        self.write_image(image, self.x, self.y, width, height);
        self.x += width as i32;
        self.font_height = self.font_height.max(height);
        self
    }

    /// Write `width` pixels of whitespace at the cursor.
    pub fn put_space(&mut self, mut width: i32) -> &mut Self {
        static SPACE: [u8; 8] = [0x00; 8];
        while width > 0 {
            let t = width.min(8);
            self.put_custom_char(&SPACE, t as u32, 8);
            width -= t;
        }
        self
    }
}

impl<'a> fmt::Write for FrameBuffer<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            self.write_char(ch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use crate::fonts::FONT_6X8;
    use crate::framebuffer::{Colour, FrameBuffer, WriteMode};

    fn buffer_for(width: usize, height: usize) -> std::vec::Vec<u8> {
        vec![0u8; height * ((width + 7) / 8)]
    }

    fn pixel(fb: &FrameBuffer, x: usize, y: usize) -> bool {
        let row = (fb.width() + 7) / 8;
        fb.buffer()[x / 8 + y * row] & (0b1000_0000 >> (x & 0b111)) != 0
    }

    fn lit(fb: &FrameBuffer) -> usize {
        fb.buffer().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn glyphs_render_at_the_cursor() {
        let mut buffer = buffer_for(24, 16);
        let mut fb = FrameBuffer::new(24, 16, &FONT_6X8, &mut buffer).unwrap();

        fb.write_char('|');
        // '|' is a solid vertical bar through the glyph centre
        let glyph = FONT_6X8.glyph('|');
        assert_eq!(glyph.len(), 8);
        for y in 0..8 {
            for x in 0..6 {
                let expected = glyph[y] & (0b1000_0000 >> x) != 0;
                assert_eq!(pixel(&fb, x, y), expected, "at {},{}", x, y);
            }
        }
        assert_eq!(fb.x(), 6);
    }

    #[test]
    fn newline_returns_and_advances_the_cursor() {
        let mut buffer = buffer_for(24, 16);
        let mut fb = FrameBuffer::new(24, 16, &FONT_6X8, &mut buffer).unwrap();

        write!(fb, "ab\ncd").unwrap();
        assert_eq!(fb.x(), 12);
        assert_eq!(fb.y(), 8);
    }

    #[test]
    fn partial_characters_are_dropped() {
        let mut buffer = buffer_for(16, 8);
        let mut fb = FrameBuffer::new(16, 8, &FONT_6X8, &mut buffer).unwrap();

        write!(fb, "xyz").unwrap();
        // two glyphs fit in 16 pixels, the third does not
        assert_eq!(fb.x(), 12);
        let after_two = lit(&fb);
        fb.write_char('w');
        assert_eq!(lit(&fb), after_two);
    }

    #[test]
    fn space_blanks_the_area() {
        let mut buffer = buffer_for(24, 8);
        let mut fb = FrameBuffer::new(24, 8, &FONT_6X8, &mut buffer).unwrap();

        fb.clear(Colour::White);
        fb.set_write_mode(WriteMode::Write);
        fb.put_space(10);
        for x in 0..10 {
            for y in 0..8 {
                assert!(!pixel(&fb, x, y));
            }
        }
        assert!(pixel(&fb, 10, 0));
        assert_eq!(fb.x(), 10);
    }

    #[test]
    fn unmapped_characters_use_the_fallback_glyph() {
        let mut buffer = buffer_for(8, 8);
        let mut fb = FrameBuffer::new(8, 8, &FONT_6X8, &mut buffer).unwrap();

        fb.write_char('\u{263A}');
        // fallback glyph is a solid block
        assert_eq!(lit(&fb), 5 * 8);
    }
}
