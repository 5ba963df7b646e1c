//! # Timing parameter sets for interval based IR protocols
//!
//! All supported protocols (NEC-style pulse distance, Samsung split packet,
//! Sony SIRC) share one description: a carrier frequency plus mark/space
//! durations for the start sequence, the two bit values, the repeat leader
//! and the stop bit. Durations are in ticks of 1 us.
//!
//! Pulse interval encoding of bits:
//!
//! ```text
//!    <---- start_high ---> <-- start_low -->
//!    +--------------------+                +--
//!    |---  carrier Hz  ---|                |       Start
//!  --+--------------------+----------------+--
//!
//!    <----  zero_high ---> <-- zero_low --->
//!    +--------------------+                +--
//!    |---  carrier Hz  ---|                |       Logic 0
//!  --+--------------------+----------------+--
//!
//!    <----  one_high  ---> <--- one_low --->
//!    +--------------------+                +--
//!    |---  carrier Hz  ---|                |       Logic 1
//!  --+--------------------+----------------+--
//!
//!    <----  one_high  ---> <-- start_low -->
//!    +--------------------+                +--
//!    |---  carrier Hz  ---|                |       Middle stop (optional)
//!  --+--------------------+----------------+--
//! ```
//!
//! Packet format, bits transmitted LSB first:
//!
//! ```text
//!                <-- packet_length bits (excl. stops) -->
//!    +---------+-----//------+--------+------//------+------+
//!    |  Start  |    DATA 1   |  Stop  |    DATA 2    | Stop |
//!  --+---------+-----//------+--------+------//------+------+
//!                              ^ middle_stop_bit
//! ```
//!
//! The stop bit reuses the logic 0 timing in all supported protocols. Sony
//! SIRC packets carry no stop bit at all and have a variable bit count that
//! is selected by the top two bits of the code word, see [`sirc_packet_length`].

use crate::Error;

/// How data bits are framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Framing {
    /// Pulse distance code with a trailing stop bit (NEC, Samsung, Teac)
    PulseDistance,
    /// Sony SIRC pulse width code, variable length, no stop bit
    Sirc,
}

/// Timing description of one IR protocol.
///
/// All durations are in ticks of 1 us. A parameter set is plain data and is
/// usually taken from one of the [`crate::remotes`] device modules, but can
/// also be built by hand for a protocol that is not covered there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameters {
    /// Carrier frequency in Hz, typically 36-40 kHz
    pub carrier: u32,

    /// Mark duration of a logic 0
    pub zero_high: u32,
    /// Space duration of a logic 0
    pub zero_low: u32,
    /// Mark duration of a logic 1
    pub one_high: u32,
    /// Space duration of a logic 1
    pub one_low: u32,
    /// Mark duration of the start sequence
    pub start_high: u32,
    /// Space duration of the start sequence
    pub start_low: u32,
    /// Start-to-start period enforced between (repeated) packets
    pub repeat_time: u32,
    /// Mark duration of the repeat leader
    pub repeat_high: u32,
    /// Space duration of the repeat leader
    pub repeat_low: u32,

    /// Number of data bits in the entire packet, excluding stop bits
    pub packet_length: u32,
    /// Bit position of the middle stop bit splitting the packet (0 = none)
    pub middle_stop_bit: u32,
    /// Number of transmissions including the original
    pub repeats: u32,
    /// Repeats send only leader + stop instead of the full packet
    pub fast_repeats: bool,

    /// Bit framing on the wire
    pub framing: Framing,
}

impl Parameters {
    /// Check a parameter set before it is handed to the transmitter.
    ///
    /// A failed check is a configuration error: the transmission must not be
    /// started, but the transmitter stays idle and usable.
    pub fn validate(&self) -> Result<(), Error> {
        if self.carrier == 0 {
            return Err(Error::ZeroCarrier);
        }
        let durations = [
            self.zero_high,
            self.zero_low,
            self.one_high,
            self.one_low,
            self.start_high,
            self.start_low,
            self.repeat_time,
            self.repeat_high,
            self.repeat_low,
        ];
        for duration in durations.iter() {
            if *duration == 0 {
                return Err(Error::ZeroDuration);
            }
        }
        if self.packet_length == 0 || self.packet_length > 64 {
            return Err(Error::BadPacketLength);
        }
        if self.middle_stop_bit >= self.packet_length {
            return Err(Error::BadMiddleStop);
        }
        if self.repeats == 0 {
            return Err(Error::ZeroRepeats);
        }
        Ok(())
    }
}

/// Mask over the SIRC length selector bits
pub const SIRC_LENGTH_MASK: u32 = 0xC000_0000;
/// Selector for a 12 bit packet: 7 bit command, 5 bit address
pub const SIRC_LENGTH_12: u32 = 0x0000_0000;
/// Selector for a 15 bit packet: 7 bit command, 8 bit address
pub const SIRC_LENGTH_15: u32 = 0x8000_0000;
/// Selector for a 20 bit packet: 7 bit command, 5 bit address, 8 bit extended
pub const SIRC_LENGTH_20: u32 = 0x4000_0000;

/// Pack a SIRC command, address and packet length into one code word.
///
/// The length selector lives in the two (otherwise unused) top bits of the
/// word so that code tables stay plain `u32` data.
pub const fn sirc_code(length: u32, command: u32, address: u32) -> u32 {
    let selector = match length {
        12 => SIRC_LENGTH_12,
        15 => SIRC_LENGTH_15,
        20 => SIRC_LENGTH_20,
        _ => panic!("unsupported SIRC packet length"),
    };
    command | (address << 7) | selector
}

/// Number of data bits selected by a SIRC code word.
pub fn sirc_packet_length(code: u32) -> Result<u32, Error> {
    match code & SIRC_LENGTH_MASK {
        SIRC_LENGTH_12 => Ok(12),
        SIRC_LENGTH_15 => Ok(15),
        SIRC_LENGTH_20 => Ok(20),
        _ => Err(Error::BadLengthSelector),
    }
}

/// Payload word of a SIRC code with the length selector masked off.
pub const fn sirc_payload(code: u32) -> u32 {
    code & !SIRC_LENGTH_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nec_like() -> Parameters {
        Parameters {
            carrier: 38_000,
            zero_high: 564,
            zero_low: 564,
            one_high: 564,
            one_low: 3 * 564,
            start_high: 16 * 564,
            start_low: 8 * 564,
            repeat_time: 108_000,
            repeat_high: 16 * 564,
            repeat_low: 4 * 564,
            packet_length: 32,
            middle_stop_bit: 0,
            repeats: 3,
            fast_repeats: true,
            framing: Framing::PulseDistance,
        }
    }

    #[test]
    fn valid_parameters_pass() {
        assert_eq!(nec_like().validate(), Ok(()));
    }

    #[test]
    fn zero_carrier_is_rejected() {
        let mut p = nec_like();
        p.carrier = 0;
        assert_eq!(p.validate(), Err(Error::ZeroCarrier));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut p = nec_like();
        p.one_low = 0;
        assert_eq!(p.validate(), Err(Error::ZeroDuration));
    }

    #[test]
    fn packet_length_bounds() {
        let mut p = nec_like();
        p.packet_length = 0;
        assert_eq!(p.validate(), Err(Error::BadPacketLength));
        p.packet_length = 65;
        assert_eq!(p.validate(), Err(Error::BadPacketLength));
    }

    #[test]
    fn middle_stop_must_fall_inside_packet() {
        let mut p = nec_like();
        p.middle_stop_bit = 32;
        assert_eq!(p.validate(), Err(Error::BadMiddleStop));
    }

    #[test]
    fn zero_repeats_is_rejected() {
        let mut p = nec_like();
        p.repeats = 0;
        assert_eq!(p.validate(), Err(Error::ZeroRepeats));
    }

    #[test]
    fn sirc_selector_round_trip() {
        assert_eq!(sirc_packet_length(sirc_code(12, 0x15, 0x01)), Ok(12));
        assert_eq!(sirc_packet_length(sirc_code(15, 0x26, 0x97)), Ok(15));
        assert_eq!(sirc_packet_length(sirc_code(20, 0x3A, 0x1A)), Ok(20));
        assert_eq!(
            sirc_packet_length(0xC000_0000),
            Err(Error::BadLengthSelector)
        );
    }

    #[test]
    fn sirc_payload_packing() {
        // 7 bit command, address from bit 7 upwards, selector stripped
        let code = sirc_code(15, 0x26, 0x97);
        assert_eq!(sirc_payload(code), 0x26 | (0x97 << 7));
    }
}
