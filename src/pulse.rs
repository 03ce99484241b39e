//! Pulse timer: measures how long the sensor holds the line at a level.

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, PinState},
};

/// Failure of a single [`PulseTimer::measure_hold`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum PulseError<E> {
    /// The line stayed at the level for more than the bound.
    Timeout,
    /// Reading the line failed.
    Pin(E),
}

impl<E> From<E> for PulseError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

/// Something that can time how long the data line holds a level.
pub trait PulseTimer: ErrorType {
    /// Counts 1 µs ticks while the line stays at `level`.
    ///
    /// Returns the tick count at the moment the line leaves `level`, or
    /// [`PulseError::Timeout`] once the count goes past `bound`. Blocks for at
    /// most `bound` microseconds plus polling overhead.
    fn measure_hold(&mut self, level: PinState, bound: u16) -> Result<u16, PulseError<Self::Error>>;
}

/// Busy-polls `line` once per microsecond while it stays at `level`.
///
/// Every poll that still sees `level` counts one tick, so a line that is
/// already past the level on the first poll measures 0.
pub fn measure_hold<L, D>(
    line: &mut L,
    delay: &mut D,
    level: PinState,
    bound: u16,
) -> Result<u16, PulseError<L::Error>>
where
    L: InputPin,
    D: DelayNs,
{
    let mut ticks: u16 = 0;
    while at_level(line, level)? {
        if ticks >= bound {
            return Err(PulseError::Timeout);
        }
        ticks += 1;
        delay.delay_us(1);
    }
    Ok(ticks)
}

fn at_level<L: InputPin>(line: &mut L, level: PinState) -> Result<bool, L::Error> {
    match level {
        PinState::High => line.is_high(),
        PinState::Low => line.is_low(),
    }
}
