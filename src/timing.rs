use crate::frame::ONE_THRESHOLD;

/// Recommended minimum time between two reads of the same sensor.
pub const MIN_SAMPLING_INTERVAL_MS: u32 = 1000;

/// Protocol timing used by a read.
///
/// All bounds are in 1 µs ticks. The defaults are the DHT11 values and are the
/// ones the decoder is tested against.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long the host holds the line low to request a frame.
    pub start_low_ms: u32,
    /// How long the host drives the line high before releasing it.
    pub start_settle_us: u32,
    /// Bound on the sensor's acknowledgement low pulse.
    pub ack_low_bound: u16,
    /// Bound on the sensor's acknowledgement high pulse.
    pub ack_high_bound: u16,
    /// Bound on the low separator in front of every bit.
    pub bit_low_bound: u16,
    /// Bound on the high data pulse of every bit.
    pub bit_high_bound: u16,
    /// High pulses longer than this many ticks are a `1`.
    pub one_threshold: u16,
}

impl Timing {
    /// DHT11 timing: 20 ms start, 30 µs settle, bounds 83/87/50/70 µs.
    pub const DHT11: Timing = Timing {
        start_low_ms: 20,
        start_settle_us: 30,
        ack_low_bound: 83,
        ack_high_bound: 87,
        bit_low_bound: 50,
        bit_high_bound: 70,
        one_threshold: ONE_THRESHOLD,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Timing::DHT11
    }
}
