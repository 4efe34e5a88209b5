//! Digit-select masks for dynamically scanned (multiplexed) displays.
//!
//! Each digit of a scanned display is enabled by one select line. The table holds one one-hot
//! mask per digit, in digit order: digit `i` is `1 << i`.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The number of digits of a scanned display, always within `1..=12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCount(u8);

impl DigitCount {
    pub const MIN: usize = 1;
    pub const MAX: usize = 12;

    /// # Errors
    ///
    /// Returns [`Error::DigitCountOutOfRange`] unless `count` is within `1..=12`.
    pub fn new(count: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            u8::try_from(count)
                .map(Self)
                .map_err(|_| Error::DigitCountOutOfRange { count })
        } else {
            Err(Error::DigitCountOutOfRange { count })
        }
    }

    /// Like [`Self::new`] but pulls an out-of-range count to the nearest bound.
    #[must_use]
    pub fn clamped(count: usize) -> Self {
        let count = count.clamp(Self::MIN, Self::MAX);
        // `MAX` fits in a u8.
        Self(u8::try_from(count).unwrap_or(u8::MAX))
    }

    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// The field width used when formatting masks: one bit per digit.
    #[must_use]
    pub fn bits(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for DigitCount {
    fn default() -> Self {
        Self(4)
    }
}

/// The masks for one display, at most [`DigitCount::MAX`] of them.
pub type DigitSelectTable = Vec<u16, { DigitCount::MAX }>;

/// One-hot select mask for each digit, in index order.
///
/// ```
/// use sevenseg_kit::{DigitCount, digit_select_masks};
///
/// let masks = digit_select_masks(DigitCount::new(4)?);
/// assert_eq!(masks.as_slice(), &[0b0001, 0b0010, 0b0100, 0b1000]);
/// # Ok::<(), sevenseg_kit::Error>(())
/// ```
#[must_use]
pub fn digit_select_masks(digit_count: DigitCount) -> DigitSelectTable {
    (0..digit_count.bits())
        .map(|index| 1_u16.wrapping_shl(index))
        .collect()
}
