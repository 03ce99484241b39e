use crate::error::InitError;
use crate::fmt::warn;

/// Set of GPIO numbers a platform exposes, one bit per pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GpioMask(pub u64);

impl GpioMask {
    /// ESP32: GPIO0..=GPIO39 without 20, 24 and 28..=31.
    pub const ESP32: GpioMask = GpioMask(
        0xFF_FFFF_FFFF & !((1 << 20) | (1 << 24) | (1 << 28) | (1 << 29) | (1 << 30) | (1 << 31)),
    );

    /// Returns true if `num` is a usable GPIO on this platform.
    pub const fn contains(&self, num: u8) -> bool {
        num < 64 && self.0 & (1 << num) != 0
    }
}

/// A GPIO number that has been checked against a [`GpioMask`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GpioNum(u8);

impl GpioNum {
    /// Validates `num` against the platform's pin set.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::InvalidGpio`] if the platform has no such pin.
    pub fn new(num: u8, mask: GpioMask) -> Result<Self, InitError> {
        if mask.contains(num) {
            Ok(GpioNum(num))
        } else {
            warn!("GPIO{} rejected", num);
            Err(InitError::InvalidGpio(num))
        }
    }

    /// The raw GPIO number.
    pub fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esp32_mask() {
        for num in [0, 4, 19, 21, 23, 25, 27, 32, 39] {
            assert_eq!(GpioNum::new(num, GpioMask::ESP32).map(GpioNum::get), Ok(num));
        }
        for num in [20, 24, 28, 29, 30, 31, 40, 63, 64, 255] {
            assert_eq!(
                GpioNum::new(num, GpioMask::ESP32),
                Err(InitError::InvalidGpio(num))
            );
        }
    }

    #[test]
    fn test_custom_mask() {
        let mask = GpioMask(0b1010);
        assert!(!mask.contains(0));
        assert!(mask.contains(1));
        assert!(!mask.contains(2));
        assert!(mask.contains(3));
    }
}
