//! # Interval driven IR transmitter
//!
//! One [`IrTransmitter`] owns the waveform generator, the quiet-period timer
//! and at most one transmission session. A session walks the packet as a
//! state machine that advances once per generator end-of-cycle event:
//!
//! ```text
//!  Initial -> Start -> FirstWord -> MiddleStop -> SecondWord -> Stop -> Trailer
//!                ^                                                        |
//!                +-------- repeat leader (while repeats remain) ----------+
//! ```
//!
//! Packets without a middle stop skip straight from `Start` to the data
//! word; SIRC packets skip the stop bit. The trailer pads the packet out to
//! `repeat_time` with the carrier gated off, so packet starts are spaced by
//! exactly the configured period. With `fast_repeats` set, repeats after the
//! first packet send only the repeat leader and a stop bit.
//!
//! ## Concurrency
//!
//! The state machine is advanced exclusively from the timer callback context
//! via [`IrTransmitter::on_interval`] and [`IrTransmitter::on_delay_elapsed`];
//! no locking is needed for its counters. The busy flag is the one value
//! shared with polling callers and is kept in an atomic: written by the
//! callback side, read by [`IrTransmitter::is_busy`].
//!
//! Cancellation mid-transmission is not supported. A started send runs to
//! completion, followed by the optional quiet period.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::protocol::{Framing, Parameters};
use crate::wavegen::{DelayTimer, WaveGenerator};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Start,
    FirstWord,
    MiddleStop,
    SecondWord,
    Stop,
    Trailer,
    Complete,
}

/// State of one transmission, alive from `try_send` until the last trailer.
#[derive(Debug)]
struct Session {
    parameters: Parameters,
    state: State,
    /// 1st command/address/extended word to transmit
    data1: u32,
    /// 2nd word, used after the middle stop bit
    data2: u32,
    /// Remaining bits of the word currently being sent, LSB first
    shift_reg: u32,
    /// Bits programmed so far across both words
    bit_num: u32,
    /// Packets completed so far
    repeat_count: u32,
    /// Ticks programmed since the start of the current packet
    progress: u32,
    /// Quiet period after the final packet, in ms
    post_delay_ms: u32,
}

/// IR transmitter for interval based protocols, e.g. NEC, Samsung, SIRC.
///
/// Wire the platform timer interrupts to [`IrTransmitter::on_interval`] and
/// [`IrTransmitter::on_delay_elapsed`]; everything else is driven through
/// [`IrTransmitter::try_send`] / [`IrTransmitter::send`].
pub struct IrTransmitter<W: WaveGenerator, D: DelayTimer> {
    wave: W,
    delay: D,
    session: Option<Session>,
    busy: AtomicBool,
}

impl<W: WaveGenerator, D: DelayTimer> IrTransmitter<W, D> {
    pub fn new(wave: W, delay: D) -> Self {
        IrTransmitter {
            wave,
            delay,
            session: None,
            busy: AtomicBool::new(false),
        }
    }

    /// Give the waveform generator and delay timer back.
    pub fn release(self) -> (W, D) {
        (self.wave, self.delay)
    }

    /// Access to the owned waveform generator, for platform glue that needs
    /// to read the programmed interval from its interrupt handler.
    pub fn wave_mut(&mut self) -> &mut W {
        &mut self.wave
    }

    /// Whether a transmission (including its quiet period) is in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Busy-wait until the transmitter is idle.
    ///
    /// Upper bound for a correct waveform generator:
    /// `repeats * repeat_time + post_delay`.
    pub fn wait_until_complete(&self) {
        while self.is_busy() {
            core::hint::spin_loop();
        }
    }

    /// Start a transmission, rejecting with [`Error::Busy`] while a previous
    /// session is still running.
    ///
    /// `data1` is sent first; `data2` follows the middle stop bit for split
    /// packets and is ignored otherwise. A non-zero `repeats` overrides the
    /// parameter set's repeat count. `post_delay_ms` keeps the transmitter
    /// busy for a quiet period after the final packet.
    ///
    /// Configuration errors leave the transmitter idle and usable.
    pub fn try_send(
        &mut self,
        parameters: &Parameters,
        data1: u32,
        data2: u32,
        post_delay_ms: u32,
        repeats: u32,
    ) -> Result<(), Error> {
        if self.is_busy() {
            return Err(Error::Busy);
        }

        let mut parameters = *parameters;
        if repeats != 0 {
            parameters.repeats = repeats;
        }
        parameters.validate()?;

        self.busy.store(true, Ordering::Release);

        self.wave.set_carrier(parameters.carrier);
        self.wave.set_carrier_enabled(true);
        self.wave.set_mark_space(parameters.start_high, parameters.start_low);
        self.session = Some(Session {
            progress: parameters.start_high + parameters.start_low,
            parameters,
            state: State::Initial,
            data1,
            data2,
            shift_reg: 0,
            bit_num: 0,
            repeat_count: 0,
            post_delay_ms,
        });
        self.wave.start();
        Ok(())
    }

    /// Blocking variant of [`IrTransmitter::try_send`]: waits out a previous
    /// session first.
    pub fn send(
        &mut self,
        parameters: &Parameters,
        data1: u32,
        data2: u32,
        post_delay_ms: u32,
        repeats: u32,
    ) -> Result<(), Error> {
        self.wait_until_complete();
        self.try_send(parameters, data1, data2, post_delay_ms, repeats)
    }

    /// End-of-cycle event from the waveform generator.
    ///
    /// Advances the state machine out of the interval that just finished and
    /// programs the next one. Events without an active session are ignored.
    pub fn on_interval(&mut self) {
        let IrTransmitter {
            wave,
            delay,
            session,
            busy,
        } = self;
        let s = match session.as_mut() {
            Some(s) => s,
            None => return,
        };

        // Leave the state whose interval just finished
        match s.state {
            State::Initial => {
                // Start mark/space of the 1st packet just went out
                s.repeat_count = 0;
                enter_data(s);
            }
            State::Start => enter_data(s),
            State::FirstWord => {
                if s.bit_num == s.parameters.middle_stop_bit {
                    s.state = State::MiddleStop;
                }
            }
            State::MiddleStop => {
                s.state = State::SecondWord;
                s.shift_reg = s.data2;
            }
            State::SecondWord => {
                if s.bit_num == s.parameters.packet_length {
                    // Last bit just went out; SIRC has no stop bit
                    s.state = match s.parameters.framing {
                        Framing::PulseDistance => State::Stop,
                        Framing::Sirc => State::Trailer,
                    };
                }
            }
            State::Stop => s.state = State::Trailer,
            State::Trailer => s.state = State::Complete,
            State::Complete => {}
        }

        // Program the interval for the new state
        let mut finished = None;
        match s.state {
            State::Initial | State::Start => {
                // enter_data() always leaves these
            }
            State::FirstWord | State::SecondWord => {
                let p = &s.parameters;
                let (mark, space) = if s.shift_reg & 0b1 != 0 {
                    (p.one_high, p.one_low)
                } else {
                    (p.zero_high, p.zero_low)
                };
                wave.set_mark_space(mark, space);
                s.progress += mark + space;
                s.bit_num += 1;
                s.shift_reg >>= 1;
            }
            State::MiddleStop => {
                let p = &s.parameters;
                wave.set_mark_space(p.one_high, p.start_low);
                s.progress += p.one_high + p.start_low;
            }
            State::Stop => {
                let p = &s.parameters;
                wave.set_mark_space(p.zero_high, p.zero_low);
                s.progress += p.zero_high + p.zero_low;
            }
            State::Trailer => {
                // Pad the packet out to repeat_time, carrier gated off
                let half = s.parameters.repeat_time.saturating_sub(s.progress) / 2;
                wave.set_carrier_enabled(false);
                wave.set_mark_space(half, half);
            }
            State::Complete => {
                s.repeat_count += 1;
                if s.repeat_count >= s.parameters.repeats {
                    wave.set_carrier_enabled(true);
                    wave.stop();
                    finished = Some(s.post_delay_ms);
                } else {
                    // Set up the repeat packet's leader
                    let p = &s.parameters;
                    wave.set_carrier_enabled(true);
                    wave.set_mark_space(p.repeat_high, p.repeat_low);
                    s.progress = p.repeat_high + p.repeat_low;
                    s.state = State::Start;
                }
            }
        }

        if let Some(post_delay_ms) = finished {
            *session = None;
            if post_delay_ms == 0 {
                busy.store(false, Ordering::Release);
            } else {
                delay.one_shot_ms(post_delay_ms);
            }
        }
    }

    /// Expiry event from the quiet-period timer.
    pub fn on_delay_elapsed(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// A start or repeat leader just went out; set up the data bits.
fn enter_data(s: &mut Session) {
    s.bit_num = 0;
    s.shift_reg = s.data1;

    if s.repeat_count > 0 && s.parameters.fast_repeats {
        // Skip data in repeated packets
        s.bit_num = s.parameters.packet_length;
        s.state = State::Stop;
    } else if s.parameters.middle_stop_bit == 0 {
        // Skip 1st word & middle stop
        s.state = State::SecondWord;
    } else {
        s.state = State::FirstWord;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remotes;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Pulse {
        mark: u32,
        space: u32,
        carrier: bool,
    }

    #[derive(Default)]
    struct RecordingWave {
        pulses: Vec<Pulse>,
        carrier_hz: u32,
        carrier_enabled: bool,
        running: bool,
    }

    impl WaveGenerator for RecordingWave {
        fn set_carrier(&mut self, carrier_hz: u32) {
            self.carrier_hz = carrier_hz;
        }

        fn set_mark_space(&mut self, mark: u32, space: u32) {
            self.pulses.push(Pulse {
                mark,
                space,
                carrier: self.carrier_enabled,
            });
        }

        fn set_carrier_enabled(&mut self, enabled: bool) {
            self.carrier_enabled = enabled;
        }

        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        armed_ms: Option<u32>,
    }

    impl DelayTimer for RecordingDelay {
        fn one_shot_ms(&mut self, ms: u32) {
            self.armed_ms = Some(ms);
        }
    }

    type TestTransmitter = IrTransmitter<RecordingWave, RecordingDelay>;

    fn transmitter() -> TestTransmitter {
        IrTransmitter::new(RecordingWave::default(), RecordingDelay::default())
    }

    /// Step the transmitter through every interval until the session ends.
    fn run_to_completion(tx: &mut TestTransmitter) -> Vec<Pulse> {
        for _ in 0..100_000 {
            if tx.session.is_none() {
                return tx.wave.pulses.clone();
            }
            tx.on_interval();
        }
        panic!("state machine did not terminate");
    }

    fn mark(mark: u32, space: u32) -> Pulse {
        Pulse {
            mark,
            space,
            carrier: true,
        }
    }

    const U: u32 = 564; // NEC base unit

    #[test]
    fn nec_golden_sequence() {
        let mut tx = transmitter();
        // 0xA5 in the low byte, upper bits zero
        tx.try_send(&remotes::laser_dvd::PARAMETERS, 0xA5, 0, 0, 1)
            .unwrap();
        let pulses = run_to_completion(&mut tx);

        let mut expected = Vec::new();
        expected.push(mark(16 * U, 8 * U)); // start 16:8
        for bit in 0..32u32 {
            if (0xA5u32 >> bit) & 1 != 0 {
                expected.push(mark(U, 3 * U)); // one 1:3
            } else {
                expected.push(mark(U, U)); // zero 1:1
            }
        }
        expected.push(mark(U, U)); // stop 1:1

        // trailer pads out to the repeat period with the carrier off
        let progress: u32 = expected.iter().map(|p| p.mark + p.space).sum();
        let half = (108_000 - progress) / 2;
        expected.push(Pulse {
            mark: half,
            space: half,
            carrier: false,
        });

        assert_eq!(pulses, expected);
        assert_eq!(tx.wave.carrier_hz, 38_000);
        assert!(!tx.wave.running);
        assert!(!tx.is_busy());
    }

    #[test]
    fn bit_order_is_lsb_first() {
        let mut tx = transmitter();
        let mut parameters = remotes::laser_dvd::PARAMETERS;
        parameters.packet_length = 8;
        tx.try_send(&parameters, 0xA5, 0, 0, 1).unwrap();
        let pulses = run_to_completion(&mut tx);

        let bits: Vec<u32> = pulses[1..9]
            .iter()
            .map(|p| if p.space == 3 * U { 1 } else { 0 })
            .collect();
        assert_eq!(bits, [1, 0, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn fast_repeats_send_leader_and_stop_only() {
        let mut tx = transmitter();
        tx.try_send(&remotes::laser_dvd::PARAMETERS, 0xFF00FF00, 0, 0, 3)
            .unwrap();
        let pulses = run_to_completion(&mut tx);

        // 1 full packet: start + 32 bits + stop + trailer
        // 2 fast repeats: leader + stop + trailer each
        assert_eq!(pulses.len(), (1 + 32 + 1 + 1) + 2 * 3);

        let repeat = &pulses[35..38];
        assert_eq!(repeat[0], mark(16 * U, 4 * U)); // repeat leader 16:4
        assert_eq!(repeat[1], mark(U, U)); // stop
        assert!(!repeat[2].carrier); // trailer
        assert_eq!(&pulses[38..41], repeat);
    }

    #[test]
    fn packets_are_spaced_by_exactly_the_repeat_time() {
        let mut tx = transmitter();
        tx.try_send(&remotes::laser_dvd::PARAMETERS, 0x20DF10EF, 0, 0, 3)
            .unwrap();
        let pulses = run_to_completion(&mut tx);

        // start-to-start spacing: sum every interval of a packet incl. trailer
        let leader = mark(16 * U, 4 * U);
        let starts: Vec<usize> = pulses
            .iter()
            .enumerate()
            .filter(|(i, p)| *i == 0 || **p == leader)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(starts.len(), 3);
        for pair in starts.windows(2) {
            let total: u32 = pulses[pair[0]..pair[1]]
                .iter()
                .map(|p| p.mark + p.space)
                .sum();
            assert_eq!(total, 108_000);
        }
    }

    #[test]
    fn full_repeats_resend_the_payload() {
        let mut tx = transmitter();
        // Samsung DVD: full packet on every repeat
        tx.try_send(
            &remotes::samsung_dvd::PARAMETERS,
            0x0020,
            0xE7187,
            0,
            2,
        )
        .unwrap();
        let pulses = run_to_completion(&mut tx);

        // per packet: start + 16 bits + middle stop + 20 bits + stop + trailer
        let per_packet = 1 + 16 + 1 + 20 + 1 + 1;
        assert_eq!(pulses.len(), 2 * per_packet);
        // both packets emit identical pulse trains
        assert_eq!(pulses[..per_packet], pulses[per_packet..]);
    }

    #[test]
    fn middle_stop_splits_the_packet() {
        let mut tx = transmitter();
        tx.try_send(&remotes::samsung_dvd::PARAMETERS, 0xFFFF, 0x00000, 0, 1)
            .unwrap();
        let pulses = run_to_completion(&mut tx);

        // 16 ones from data1
        for p in &pulses[1..17] {
            assert_eq!(*p, mark(500, 1500));
        }
        // middle stop reuses the start space: 1:-9
        assert_eq!(pulses[17], mark(500, 9 * 500));
        // 20 zeros from data2
        for p in &pulses[18..38] {
            assert_eq!(*p, mark(500, 500));
        }
        // stop + trailer
        assert_eq!(pulses[38], mark(500, 500));
        assert!(!pulses[39].carrier);
        assert_eq!(pulses.len(), 40);
    }

    #[test]
    fn sirc_lengths_select_the_bit_count() {
        for (length, code) in [
            (12, remotes::sony_tv::code(remotes::sony_tv::Button::Mute)),
            (15, remotes::sony_tv::code(remotes::sony_tv::Button::Play)),
            (20, crate::protocol::sirc_code(20, 0x5A, 0x093A)),
        ]
        .iter()
        {
            let mut tx = transmitter();
            remotes::sony_tv::try_send_code(&mut tx, *code, 0, 1).unwrap();
            let pulses = run_to_completion(&mut tx);

            // start + data bits + trailer, no stop bit
            assert_eq!(pulses.len() as u32, 1 + length + 1);
            assert_eq!(pulses[0], mark(4 * 600, 600));
            for p in &pulses[1..pulses.len() - 1] {
                assert!(p.carrier);
                assert!(p.mark == 600 || p.mark == 1200);
                assert_eq!(p.space, 600);
            }
            assert!(!pulses[pulses.len() - 1].carrier);
        }
    }

    #[test]
    fn busy_until_quiet_period_elapses() {
        let mut tx = transmitter();
        tx.try_send(&remotes::laser_dvd::PARAMETERS, 0xA5, 0, 100, 1)
            .unwrap();
        assert!(tx.is_busy());
        assert_eq!(
            tx.try_send(&remotes::laser_dvd::PARAMETERS, 0xA5, 0, 0, 1),
            Err(Error::Busy)
        );

        run_to_completion(&mut tx);
        // all intervals sent, quiet period still pending
        assert!(tx.is_busy());
        assert_eq!(tx.delay.armed_ms, Some(100));

        tx.on_delay_elapsed();
        assert!(!tx.is_busy());
    }

    #[test]
    fn configuration_errors_leave_the_transmitter_usable() {
        let mut tx = transmitter();
        let mut bad = remotes::laser_dvd::PARAMETERS;
        bad.carrier = 0;
        assert_eq!(tx.try_send(&bad, 0xA5, 0, 0, 1), Err(Error::ZeroCarrier));
        assert!(!tx.is_busy());
        assert!(tx.wave.pulses.is_empty());

        tx.try_send(&remotes::laser_dvd::PARAMETERS, 0xA5, 0, 0, 1)
            .unwrap();
        run_to_completion(&mut tx);
        assert!(!tx.is_busy());
    }

    #[test]
    fn repeat_override_replaces_the_default() {
        let mut tx = transmitter();
        tx.try_send(&remotes::laser_dvd::PARAMETERS, 0xA5, 0, 0, 2)
            .unwrap();
        let pulses = run_to_completion(&mut tx);
        let leaders = pulses
            .iter()
            .filter(|p| **p == mark(16 * U, 4 * U))
            .count();
        assert_eq!(leaders, 1); // 1 original + 1 fast repeat
    }

    #[test]
    fn spurious_interval_events_are_ignored() {
        let mut tx = transmitter();
        tx.on_interval();
        tx.on_interval();
        assert!(!tx.is_busy());
        assert!(tx.wave.pulses.is_empty());
    }
}
