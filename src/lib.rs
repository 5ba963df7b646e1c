//! # remote-panel
//!
//! Building blocks for embedded remote controls: an interrupt driven IR
//! pulse transmitter for interval based protocols (NEC, Samsung, Sony SIRC)
//! and a 1 bit per pixel frame buffer with rotation, mirroring, scaling and
//! combine modes for monochrome panels.
//!
//! The two halves are independent and share no state. The transmitter talks
//! to hardware through the [`WaveGenerator`]/[`DelayTimer`] traits, the
//! frame buffer exposes its raw byte buffer for whatever transfer mechanism
//! the display uses. Neither half touches registers itself, which also
//! makes both fully testable on the host.
//!
//! Enable the "graphics" feature for an embedded-graphics `DrawTarget`
//! implementation on the frame buffer, and the "defmt" feature for defmt
//! formatting of the public types.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
pub mod fonts;
pub mod framebuffer;
mod graphics;
pub mod protocol;
pub mod remotes;
pub mod textmode;
pub mod transmitter;
pub mod wavegen;

#[cfg(feature = "graphics")]
mod drawtarget;

pub use error::Error;
pub use framebuffer::{Colour, FrameBuffer, MirrorMode, Rotate, Scale, WriteMode};
pub use protocol::{Framing, Parameters};
pub use textmode::Font;
pub use transmitter::IrTransmitter;
pub use wavegen::{DelayTimer, DummyDelay, DummyWave, PwmCarrier, WaveGenerator};
