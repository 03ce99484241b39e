//! Line driver: owns the direction and level of the shared data line.

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};

use crate::timing::Timing;

/// A bidirectional single-wire data line.
///
/// The host drives the line only while requesting a frame; afterwards it must
/// be switched to input so the sensor can drive it.
pub trait DataLine: InputPin {
    /// Drive the line low as an output.
    fn drive_low(&mut self) -> Result<(), Self::Error>;
    /// Drive the line high as an output.
    fn drive_high(&mut self) -> Result<(), Self::Error>;
    /// Stop driving the line and read it as an input.
    fn release(&mut self) -> Result<(), Self::Error>;
}

/// [`DataLine`] over an open-drain pin with an external pull-up.
///
/// Releasing an open-drain output is the same as letting the pull-up win, so
/// `release` writes a high level and the pin is read back through
/// [`InputPin`].
pub struct OpenDrainLine<P> {
    pin: P,
}

impl<P> OpenDrainLine<P> {
    /// Wraps an open-drain pin.
    pub fn new(pin: P) -> Self {
        OpenDrainLine { pin }
    }

    /// Gives back the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: ErrorType> ErrorType for OpenDrainLine<P> {
    type Error = P::Error;
}

impl<P: InputPin> InputPin for OpenDrainLine<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

impl<P: InputPin + OutputPin> DataLine for OpenDrainLine<P> {
    fn drive_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn drive_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }
}

/// Something that can send the start request on the data line.
pub trait LineDriver: ErrorType {
    /// Signals a read request and leaves the line released to the sensor.
    fn request_start(&mut self, timing: &Timing) -> Result<(), Self::Error>;
}

/// Sends the start request and hands the line over to the sensor.
///
/// Holds the line low for `timing.start_low_ms`, drives it high for
/// `timing.start_settle_us`, then switches it to input.
pub fn request_start<L, D>(line: &mut L, delay: &mut D, timing: &Timing) -> Result<(), L::Error>
where
    L: DataLine,
    D: DelayNs,
{
    line.drive_low()?;
    delay.delay_ms(timing.start_low_ms);
    line.drive_high()?;
    delay.delay_us(timing.start_settle_us);
    line.release()
}
