#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A transmission is still in progress
    Busy,
    /// Carrier frequency of zero
    ZeroCarrier,
    /// A mark or space duration of zero ticks
    ZeroDuration,
    /// Packet length of zero or beyond the capacity of the two payload words
    BadPacketLength,
    /// Middle stop bit position at or beyond the packet length
    BadMiddleStop,
    /// Repeat count of zero
    ZeroRepeats,
    /// Code word carries an unknown length selector
    BadLengthSelector,
    /// Backing buffer does not match `height * ceil(width / 8)` bytes
    BadBufferSize,
}
