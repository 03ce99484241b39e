use embedded_hal::{delay::DelayNs, digital::PinState};

use crate::bus::SingleWire;
use crate::error::{DhtError, InitError, Stage};
use crate::fmt::{debug, trace, warn};
use crate::frame::{BitTiming, FRAME_BITS, RawFrame};
use crate::gpio::{GpioMask, GpioNum};
use crate::line::{DataLine, LineDriver};
use crate::pulse::{PulseError, PulseTimer};
use crate::reading::{Reading, ReadingStore};
use crate::timing::Timing;

/// Where the decoder is in the read sequence.
///
/// After [`Dht11::read`] returns, the state is either [`State::Done`] or
/// [`State::Failed`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    RequestingStart,
    AwaitingAck1,
    AwaitingAck2,
    /// Sampling payload bit `n` (0..40).
    SamplingBit(u8),
    Assembling,
    Validating,
    Done,
    Failed,
}

/// Decoder for the DHT11 single-wire protocol.
///
/// Owns the bus for its pin and the last successful reading. One decoder per
/// physical pin; reads on the same pin must not overlap.
pub struct Dht11<B> {
    bus: B,
    gpio: GpioNum,
    timing: Timing,
    state: State,
    store: ReadingStore,
}

impl<L, D> Dht11<SingleWire<L, D>>
where
    L: DataLine,
    D: DelayNs,
{
    /// Creates a decoder for the sensor on GPIO number `gpio`.
    ///
    /// # Arguments
    ///
    /// * `gpio` - The GPIO number the data line is wired to.
    /// * `mask` - The GPIO numbers usable on the target platform.
    /// * `line` - The data line. Must be able to drive and read the pin.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::InvalidGpio`] if `gpio` is not in `mask`.
    pub fn init(gpio: u8, mask: GpioMask, line: L, delay: D) -> Result<Self, InitError> {
        let gpio = GpioNum::new(gpio, mask)?;
        Ok(Self::new(gpio, SingleWire::new(line, delay)))
    }
}

impl<B> Dht11<B>
where
    B: LineDriver + PulseTimer,
{
    /// Creates a decoder over an already validated pin and a bus.
    pub fn new(gpio: GpioNum, bus: B) -> Self {
        debug!("DHT11 on GPIO{}", gpio.get());
        Dht11 {
            bus,
            gpio,
            timing: Timing::default(),
            state: State::Idle,
            store: ReadingStore::new(),
        }
    }

    /// Replaces the protocol timing.
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Reads one frame from the sensor.
    ///
    /// Sends the start request, waits for the sensor's acknowledgement,
    /// samples 40 bits and validates the checksum. Blocks for roughly 25 ms.
    /// No retries are made; wait at least
    /// [`MIN_SAMPLING_INTERVAL_MS`](crate::MIN_SAMPLING_INTERVAL_MS) between
    /// reads.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if a full frame arrived and its checksum is valid. The
    ///   reading is also kept for [`temperature`](Self::temperature) and friends.
    /// * `Err(DhtError)` on timeout, checksum mismatch or pin failure. The
    ///   previously stored reading is left as it was.
    pub fn read(&mut self) -> Result<Reading, DhtError<B::Error>> {
        self.state = State::Idle;

        match self.decode() {
            Ok(reading) => {
                debug!(
                    "DHT11 read: {} C, {} %RH",
                    reading.temperature,
                    reading.humidity
                );
                self.store.update(reading);
                self.state = State::Done;
                Ok(reading)
            }
            Err(err) => {
                match &err {
                    DhtError::Timeout(stage) => warn!("DHT11 timed out at {}", stage),
                    DhtError::ChecksumMismatch { expected, computed } => warn!(
                        "DHT11 checksum mismatch: sent {}, computed {}",
                        expected,
                        computed
                    ),
                    DhtError::Pin(_) => warn!("DHT11 pin error"),
                }
                self.state = State::Failed;
                Err(err)
            }
        }
    }

    fn decode(&mut self) -> Result<Reading, DhtError<B::Error>> {
        self.state = State::RequestingStart;
        self.bus.request_start(&self.timing)?;

        self.state = State::AwaitingAck1;
        self.hold(PinState::Low, self.timing.ack_low_bound, Stage::AckLow)?;
        self.state = State::AwaitingAck2;
        self.hold(PinState::High, self.timing.ack_high_bound, Stage::AckHigh)?;

        let mut frame = RawFrame::new();
        for n in 0..FRAME_BITS {
            self.state = State::SamplingBit(n);
            if self.read_bit(n)?.bit(self.timing.one_threshold) {
                frame.set_bit(n);
            }
        }

        // Bits were placed MSB-first, so the bytes are already in order.
        self.state = State::Assembling;
        trace!("DHT11 frame {:?}", frame.bytes());

        self.state = State::Validating;
        if !frame.is_valid() {
            return Err(DhtError::ChecksumMismatch {
                expected: frame.checksum_byte(),
                computed: frame.checksum(),
            });
        }
        Ok(frame.to_reading())
    }

    /// Measures the low separator and the high data pulse of bit `n`.
    fn read_bit(&mut self, n: u8) -> Result<BitTiming, DhtError<B::Error>> {
        let low = self.hold(PinState::Low, self.timing.bit_low_bound, Stage::BitLow(n))?;
        let high = self.hold(PinState::High, self.timing.bit_high_bound, Stage::BitHigh(n))?;
        Ok(BitTiming { low, high })
    }

    fn hold(&mut self, level: PinState, bound: u16, stage: Stage) -> Result<u16, DhtError<B::Error>> {
        self.bus.measure_hold(level, bound).map_err(|err| match err {
            PulseError::Timeout => DhtError::Timeout(stage),
            PulseError::Pin(e) => DhtError::Pin(e),
        })
    }

    /// Temperature of the last successful read in °C, `0.0` if there was none.
    pub fn temperature(&self) -> f32 {
        self.store.temperature()
    }

    /// Humidity of the last successful read in %RH, `0.0` if there was none.
    pub fn humidity(&self) -> f32 {
        self.store.humidity()
    }

    /// Checksum byte of the last successful read, `0` if there was none.
    pub fn last_checksum_byte(&self) -> u8 {
        self.store.last_checksum_byte()
    }

    /// The last successful reading, if any.
    pub fn last_reading(&self) -> Option<Reading> {
        self.store.last()
    }

    /// Where the last read stopped.
    pub fn state(&self) -> State {
        self.state
    }

    /// The GPIO the sensor is on.
    pub fn gpio(&self) -> GpioNum {
        self.gpio
    }

    /// The protocol timing in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Gives back the bus.
    pub fn release(self) -> B {
        self.bus
    }
}
