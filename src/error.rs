use core::fmt;

/// The timed wait that was running when a read gave up.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Sensor acknowledgement, low phase.
    AckLow,
    /// Sensor acknowledgement, high phase.
    AckHigh,
    /// Low separator in front of data bit `n`.
    BitLow(u8),
    /// High data pulse of bit `n`.
    BitHigh(u8),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::AckLow => f.write_str("ack low"),
            Stage::AckHigh => f.write_str("ack high"),
            Stage::BitLow(n) => write!(f, "bit {n} low"),
            Stage::BitHigh(n) => write!(f, "bit {n} high"),
        }
    }
}

/// Possible errors from a single read.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// Timed out waiting for the line to leave a level.
    Timeout(Stage),
    /// The full frame arrived but its checksum byte did not match the data.
    ChecksumMismatch {
        /// Checksum byte sent by the sensor.
        expected: u8,
        /// Wrapping sum of the four data bytes.
        computed: u8,
    },
    /// Error from the GPIO pin (input/output).
    Pin(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::Timeout(stage) => write!(f, "timed out waiting for {stage}"),
            DhtError::ChecksumMismatch { expected, computed } => write!(
                f,
                "checksum mismatch (sensor sent {expected:#04x}, data sums to {computed:#04x})"
            ),
            DhtError::Pin(err) => write!(f, "GPIO error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}

/// Rejected driver configuration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitError {
    /// The GPIO number is not usable on the target platform.
    InvalidGpio(u8),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidGpio(num) => write!(f, "GPIO{num} is not a valid pin"),
        }
    }
}

impl core::error::Error for InitError {}
