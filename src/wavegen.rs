//! # Hardware seam for the IR transmitter
//!
//! The state machine in [`crate::transmitter`] does not touch pins or timer
//! registers itself. It drives a mark/space waveform generator through the
//! [`WaveGenerator`] trait: a peripheral (or software construction) that
//! emits a carrier burst for the mark duration, stays silent for the space
//! duration and then raises an end-of-cycle event. The platform glue forwards
//! that event to [`crate::IrTransmitter::on_interval`], which programs the
//! next pair from inside the callback. The generator must accept being
//! reconfigured from its own expiry context without missing a cycle.
//!
//! The quiet period after a finished transmission runs on an independent
//! one-shot timer behind [`DelayTimer`].

use embedded_hal::timer::CountDown;
use embedded_hal::PwmPin;

/// Mark/space interval generator with a gated carrier output.
///
/// All methods have register-write semantics and must not block.
pub trait WaveGenerator {
    /// Program the carrier frequency in Hz. Called once per transmission
    /// before `start`.
    fn set_carrier(&mut self, carrier_hz: u32);

    /// Program the next mark/space pair in ticks of 1 us.
    fn set_mark_space(&mut self, mark: u32, space: u32);

    /// Gate the modulated output. While disabled, programmed intervals still
    /// elapse (and raise their end-of-cycle events) but the output pin stays
    /// inactive. Used for the silent trailer between packets.
    fn set_carrier_enabled(&mut self, enabled: bool);

    /// Start emitting the currently programmed interval pair.
    fn start(&mut self);

    /// Stop the generator. No further end-of-cycle events fire.
    fn stop(&mut self);
}

/// One-shot millisecond timer for the post-transmission quiet period.
///
/// The platform glue forwards the expiry event to
/// [`crate::IrTransmitter::on_delay_elapsed`].
pub trait DelayTimer {
    /// Arm the timer to fire once after `ms` milliseconds.
    fn one_shot_ms(&mut self, ms: u32);
}

impl<T> DelayTimer for T
where
    T: CountDown,
    T::Time: From<u32>,
{
    fn one_shot_ms(&mut self, ms: u32) {
        self.start(ms);
    }
}

/// Waveform generator that does nothing.
///
/// This is very usable for dry bring-up of the surrounding firmware, or when
/// the transmitter is stepped manually in tests: all interval programming is
/// accepted and discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyWave;

impl WaveGenerator for DummyWave {
    fn set_carrier(&mut self, _carrier_hz: u32) {}
    fn set_mark_space(&mut self, _mark: u32, _space: u32) {}
    fn set_carrier_enabled(&mut self, _enabled: bool) {}
    fn start(&mut self) {}
    fn stop(&mut self) {}
}

/// Delay timer that never fires.
///
/// Use together with a post delay of zero, where the busy flag clears without
/// a quiet period.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyDelay;

impl DelayTimer for DummyDelay {
    fn one_shot_ms(&mut self, _ms: u32) {}
}

/// Carrier gate over an `embedded_hal` PWM channel.
///
/// The PWM timer produces the carrier itself; configure its frequency and a
/// duty cycle of about 50 % before wrapping the pin. Interval timing stays
/// with a platform timer whose interrupt calls [`PwmCarrier::begin_mark`] and
/// [`PwmCarrier::begin_space`] at the boundaries reported by
/// [`PwmCarrier::next_interval`], and forwards the end-of-cycle event to the
/// transmitter.
pub struct PwmCarrier<PWM: PwmPin> {
    pwm: PWM,
    mark: u32,
    space: u32,
    enabled: bool,
}

impl<PWM: PwmPin> PwmCarrier<PWM> {
    pub fn new(mut pwm: PWM) -> Self {
        pwm.disable();
        PwmCarrier {
            pwm,
            mark: 0,
            space: 0,
            enabled: true,
        }
    }

    /// The currently programmed mark/space pair in ticks of 1 us.
    pub fn next_interval(&self) -> (u32, u32) {
        (self.mark, self.space)
    }

    /// Enter the mark half of the current interval.
    pub fn begin_mark(&mut self) {
        if self.enabled {
            self.pwm.enable();
        }
    }

    /// Enter the space half of the current interval.
    pub fn begin_space(&mut self) {
        self.pwm.disable();
    }

    /// Give the PWM channel back.
    pub fn release(self) -> PWM {
        self.pwm
    }
}

impl<PWM: PwmPin> WaveGenerator for PwmCarrier<PWM> {
    fn set_carrier(&mut self, _carrier_hz: u32) {
        // The carrier frequency is fixed by the PWM timer configuration;
        // it must match the parameter set the caller transmits with.
    }

    fn set_mark_space(&mut self, mark: u32, space: u32) {
        self.mark = mark;
        self.space = space;
    }

    fn set_carrier_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pwm.disable();
        }
    }

    fn start(&mut self) {
        self.begin_mark();
    }

    fn stop(&mut self) {
        self.pwm.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePwm {
        enabled: bool,
        duty: u16,
    }

    impl PwmPin for FakePwm {
        type Duty = u16;

        fn disable(&mut self) {
            self.enabled = false;
        }

        fn enable(&mut self) {
            self.enabled = true;
        }

        fn get_duty(&self) -> u16 {
            self.duty
        }

        fn get_max_duty(&self) -> u16 {
            1000
        }

        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }
    }

    #[test]
    fn pwm_carrier_gates_the_output() {
        let mut carrier = PwmCarrier::new(FakePwm {
            enabled: true,
            duty: 500,
        });
        assert!(!carrier.pwm.enabled);

        carrier.set_mark_space(564, 1692);
        assert_eq!(carrier.next_interval(), (564, 1692));

        carrier.begin_mark();
        assert!(carrier.pwm.enabled);
        carrier.begin_space();
        assert!(!carrier.pwm.enabled);

        // while the carrier is gated off, marks stay silent
        carrier.set_carrier_enabled(false);
        carrier.begin_mark();
        assert!(!carrier.pwm.enabled);

        carrier.set_carrier_enabled(true);
        carrier.begin_mark();
        assert!(carrier.pwm.enabled);

        carrier.stop();
        assert!(!carrier.release().enabled);
    }
}
