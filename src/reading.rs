/// A validated temperature and humidity measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Checksum byte of the frame this reading came from.
    pub checksum: u8,
}

/// Holds the last successful [`Reading`].
///
/// Failed reads never touch the store. Before the first success every accessor
/// returns zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReadingStore {
    last: Option<Reading>,
}

impl ReadingStore {
    /// An empty store.
    pub const fn new() -> Self {
        ReadingStore { last: None }
    }

    /// Replaces the stored reading.
    pub fn update(&mut self, reading: Reading) {
        self.last = Some(reading);
    }

    /// The last successful reading, if any.
    pub fn last(&self) -> Option<Reading> {
        self.last
    }

    /// Last temperature in °C, `0.0` before the first success.
    pub fn temperature(&self) -> f32 {
        self.last.map_or(0.0, |r| r.temperature)
    }

    /// Last relative humidity in percent, `0.0` before the first success.
    pub fn humidity(&self) -> f32 {
        self.last.map_or(0.0, |r| r.humidity)
    }

    /// Last checksum byte, `0` before the first success.
    pub fn last_checksum_byte(&self) -> u8 {
        self.last.map_or(0, |r| r.checksum)
    }
}
