//! Prints the pulse train of an IR transmission instead of driving an LED:
//! the waveform generator below records what the hardware would emit.

use remote_panel::remotes::{laser_dvd, sony_tv};
use remote_panel::{DummyDelay, IrTransmitter, WaveGenerator};

struct PrintWave {
    carrier_enabled: bool,
}

impl WaveGenerator for PrintWave {
    fn set_carrier(&mut self, carrier_hz: u32) {
        println!("carrier {} Hz", carrier_hz);
    }

    fn set_mark_space(&mut self, mark: u32, space: u32) {
        if self.carrier_enabled {
            println!("  mark {:6} us   space {:6} us", mark, space);
        } else {
            println!("  gap  {:6} us", mark + space);
        }
    }

    fn set_carrier_enabled(&mut self, enabled: bool) {
        self.carrier_enabled = enabled;
    }

    fn start(&mut self) {}

    fn stop(&mut self) {
        println!("done");
    }
}

fn main() {
    let mut tx = IrTransmitter::new(
        PrintWave {
            carrier_enabled: true,
        },
        DummyDelay,
    );

    println!("Laser DVD, Play:");
    laser_dvd::try_send(&mut tx, laser_dvd::Button::Play, 0, 0).unwrap();
    while tx.is_busy() {
        tx.on_interval();
    }

    println!();
    println!("Sony TV, volume up:");
    sony_tv::try_send(&mut tx, sony_tv::Button::VolumeUp, 0, 0).unwrap();
    while tx.is_busy() {
        tx.on_interval();
    }
}
