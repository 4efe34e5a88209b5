//! Render table values as C integer literals.

use alloc::{format, string::String};

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// Literal style for emitted values.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumberFormat {
    /// `0b` followed by exactly `bits` binary digits.
    #[default]
    #[display("bin")]
    Bin,
    /// Plain decimal, no padding.
    #[display("dec")]
    Dec,
    /// `0x` followed by upper-case hex digits, zero-padded to `ceil(bits / 4)`.
    #[display("hex")]
    Hex,
}

impl NumberFormat {
    /// Render `value` as a literal of a `bits`-wide field.
    ///
    /// Padding only ever widens the text; a value wider than `bits` is written in full.
    ///
    /// ```
    /// use sevenseg_kit::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::Bin.format(0xFE, 8), "0b11111110");
    /// assert_eq!(NumberFormat::Hex.format(0x01, 8), "0x01");
    /// assert_eq!(NumberFormat::Hex.format(0x04, 12), "0x004");
    /// assert_eq!(NumberFormat::Dec.format(96, 8), "96");
    /// ```
    #[must_use]
    pub fn format(self, value: u16, bits: u32) -> String {
        match self {
            Self::Dec => format!("{value}"),
            Self::Hex => {
                let width = usize::try_from(bits.div_ceil(4)).unwrap_or_default();
                format!("0x{value:0width$X}")
            }
            Self::Bin => {
                let width = usize::try_from(bits).unwrap_or_default();
                format!("0b{value:0width$b}")
            }
        }
    }
}

/// Read back a literal produced by [`NumberFormat::format`] (any of the three styles).
///
/// ```
/// use sevenseg_kit::parse_literal;
///
/// assert_eq!(parse_literal("0b01100000"), Some(0x60));
/// assert_eq!(parse_literal("0xFE"), Some(254));
/// assert_eq!(parse_literal("17"), Some(17));
/// assert_eq!(parse_literal("0q1"), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<u16> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u16::from_str_radix(digits, 16).ok()
    } else if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        u16::from_str_radix(digits, 2).ok()
    } else {
        text.parse().ok()
    }
}
