//! Draws a few shapes and some text into a frame buffer and dumps it to
//! stdout as ASCII art. Handy for eyeballing the rasterizers without any
//! display hardware.

use std::fmt::Write;

use remote_panel::fonts::FONT_6X8;
use remote_panel::{Colour, FrameBuffer, Scale, WriteMode};

fn dump(fb: &FrameBuffer) {
    println!(
        "width={}, height={}, size={}",
        fb.width(),
        fb.height(),
        fb.frame_size()
    );
    let row = (fb.width() + 7) / 8;
    for y in 0..fb.height() {
        let mut line = String::new();
        for x in 0..fb.width() {
            let bit = fb.buffer()[x / 8 + y * row] & (0b1000_0000 >> (x & 0b111)) != 0;
            line.push(if bit { '*' } else { '.' });
        }
        println!("{}", line);
    }
}

fn main() {
    let mut buffer = [0u8; 50 * 8];
    let mut fb = FrameBuffer::new(64, 50, &FONT_6X8, &mut buffer).unwrap();

    fb.clear(Colour::Black);
    fb.draw_open_rect(0, 0, 63, 49);
    fb.draw_circle(45, 28, 14);
    fb.set_write_mode(WriteMode::Xor);
    fb.draw_circle(45, 28, 9);
    fb.set_write_mode(WriteMode::Write);

    fb.move_xy(4, 4);
    write!(fb, "Hello").unwrap();

    fb.set_scale(Scale::Scale2);
    fb.draw_line(2, 8, 12, 22);
    dump(&fb);
}
