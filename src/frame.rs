//! Bit classification, frame assembly and checksum validation.

use crate::reading::Reading;

/// Number of bytes in a frame, checksum included.
pub const FRAME_BYTES: usize = 5;
/// Number of payload bits the sensor sends after its acknowledgement.
pub const FRAME_BITS: u8 = 40;
/// Default classification threshold in ticks.
pub const ONE_THRESHOLD: u16 = 40;

/// Low and high pulse widths measured for one bit slot.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitTiming {
    pub low: u16,
    pub high: u16,
}

impl BitTiming {
    /// The bit this slot carries, given a classification threshold.
    pub fn bit(&self, threshold: u16) -> bool {
        self.high > threshold
    }
}

/// Classifies a high pulse with the default threshold: more than 40 ticks is a `1`.
pub fn classify_bit(high_ticks: u16) -> bool {
    BitTiming {
        low: 0,
        high: high_ticks,
    }
    .bit(ONE_THRESHOLD)
}

/// The five raw bytes of one transmission.
///
/// Bytes are, in order: humidity integral, humidity fractional, temperature
/// integral, temperature fractional, checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawFrame([u8; FRAME_BYTES]);

impl RawFrame {
    /// An all-zero frame, ready to receive bits.
    pub const fn new() -> Self {
        RawFrame([0; FRAME_BYTES])
    }

    /// Wraps five bytes as received, checksum last.
    pub const fn from_bytes(bytes: [u8; FRAME_BYTES]) -> Self {
        RawFrame(bytes)
    }

    /// The raw bytes, checksum last.
    pub const fn bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.0
    }

    /// Sets stream bit `n` to `1`.
    ///
    /// Bit 0 of the stream is the most significant bit of byte 0.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not below [`FRAME_BITS`].
    pub fn set_bit(&mut self, n: u8) {
        let n = usize::from(n);
        self.0[n / 8] |= 0x80 >> (n % 8);
    }

    /// Wrapping sum of the four data bytes.
    pub fn checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Checksum byte as sent by the sensor.
    pub fn checksum_byte(&self) -> u8 {
        self.0[4]
    }

    /// Returns true if the checksum byte matches the data bytes.
    pub fn is_valid(&self) -> bool {
        self.checksum() == self.checksum_byte()
    }

    /// Converts the frame into a [`Reading`].
    ///
    /// Each value is `integral + fractional / 10`, both bytes taken as
    /// unsigned. The checksum is not checked here.
    pub fn to_reading(&self) -> Reading {
        let [hum_int, hum_frac, temp_int, temp_frac, checksum] = self.0;
        Reading {
            temperature: parse_value(temp_int, temp_frac),
            humidity: parse_value(hum_int, hum_frac),
            checksum,
        }
    }
}

fn parse_value(integral: u8, fractional: u8) -> f32 {
    f32::from(integral) + f32::from(fractional) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sets bits LSB-first, then reverses every byte.
    fn reversed_assembly(bits: &[bool; 40]) -> [u8; 5] {
        let mut data = [0u8; 5];
        for (n, bit) in bits.iter().enumerate() {
            if *bit {
                data[n / 8] |= 1 << (n % 8);
            }
        }
        data.map(u8::reverse_bits)
    }

    #[test]
    fn test_classify_boundary() {
        assert!(!classify_bit(0));
        assert!(!classify_bit(28));
        assert!(!classify_bit(40));
        assert!(classify_bit(41));
        assert!(classify_bit(70));
    }

    #[test]
    fn test_classify_matches_default_timing() {
        for high in 0..=70 {
            let slot = BitTiming { low: 50, high };
            assert_eq!(classify_bit(high), slot.bit(crate::Timing::DHT11.one_threshold));
        }
    }

    #[test]
    #[should_panic]
    fn test_set_bit_out_of_frame() {
        let mut frame = RawFrame::new();
        frame.set_bit(FRAME_BITS);
    }

    #[test]
    fn test_bit_timing_threshold() {
        let timing = BitTiming { low: 50, high: 41 };
        assert!(timing.bit(40));
        assert!(!timing.bit(41));
    }

    #[test]
    fn test_set_bit_msb_first() {
        let mut frame = RawFrame::new();
        frame.set_bit(0);
        frame.set_bit(7);
        frame.set_bit(9);
        frame.set_bit(39);
        assert_eq!(frame.bytes(), &[0b1000_0001, 0b0100_0000, 0, 0, 0b0000_0001]);
    }

    #[test]
    fn test_msb_first_matches_reversed_assembly() {
        let bytes = [0x32, 0x00, 0x18, 0x05, 0x4F];
        let mut bits = [false; 40];
        for (n, bit) in bits.iter_mut().enumerate() {
            *bit = bytes[n / 8] & (0x80 >> (n % 8)) != 0;
        }

        let mut frame = RawFrame::new();
        for (n, bit) in bits.iter().enumerate() {
            if *bit {
                frame.set_bit(n as u8);
            }
        }

        assert_eq!(frame.bytes(), &bytes);
        assert_eq!(frame.bytes(), &reversed_assembly(&bits));
    }

    #[test]
    fn test_checksum_valid() {
        let frame = RawFrame::from_bytes([0x32, 0x00, 0x18, 0x05, 0x4F]);
        assert_eq!(frame.checksum(), 0x4F);
        assert!(frame.is_valid());

        let reading = frame.to_reading();
        assert_eq!(reading.humidity, 50.0);
        assert_eq!(reading.temperature, 24.5);
        assert_eq!(reading.checksum, 0x4F);
    }

    #[test]
    fn test_checksum_wraps() {
        let frame = RawFrame::from_bytes([0xF0, 0x20, 0x10, 0x01, 0x21]);
        assert_eq!(frame.checksum(), 0x21);
        assert!(frame.is_valid());
    }

    #[test]
    fn test_checksum_off_by_any_amount() {
        for delta in 1..=255u8 {
            let frame = RawFrame::from_bytes([44, 0, 24, 5, 73u8.wrapping_add(delta)]);
            assert!(!frame.is_valid(), "delta {delta}");
        }
    }

    #[test]
    fn test_fractional_not_range_checked() {
        let reading = RawFrame::from_bytes([10, 25, 3, 15, 53]).to_reading();
        assert_eq!(reading.humidity, 12.5);
        assert_eq!(reading.temperature, 4.5);
    }
}
