use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, PinState},
};

use crate::line::{self, DataLine, LineDriver};
use crate::pulse::{self, PulseError, PulseTimer};
use crate::timing::Timing;

/// The physical single-wire bus: a [`DataLine`] plus a microsecond delay.
///
/// Drives the start request and busy-polls pulse widths on real hardware.
pub struct SingleWire<L, D> {
    line: L,
    delay: D,
}

impl<L, D> SingleWire<L, D>
where
    L: DataLine,
    D: DelayNs,
{
    /// Creates a bus from the data line and a delay provider.
    pub fn new(line: L, delay: D) -> Self {
        SingleWire { line, delay }
    }

    /// Splits the bus back into its line and delay.
    pub fn release(self) -> (L, D) {
        (self.line, self.delay)
    }
}

impl<L: DataLine, D> ErrorType for SingleWire<L, D> {
    type Error = L::Error;
}

impl<L, D> LineDriver for SingleWire<L, D>
where
    L: DataLine,
    D: DelayNs,
{
    fn request_start(&mut self, timing: &Timing) -> Result<(), Self::Error> {
        line::request_start(&mut self.line, &mut self.delay, timing)
    }
}

impl<L, D> PulseTimer for SingleWire<L, D>
where
    L: DataLine,
    D: DelayNs,
{
    fn measure_hold(&mut self, level: PinState, bound: u16) -> Result<u16, PulseError<Self::Error>> {
        pulse::measure_hold(&mut self.line, &mut self.delay, level, bound)
    }
}
