//! The configuration value that fully determines one generated table.
//!
//! [`EncodingConfig`] is never edited in place: every `with_*` call returns a new value, so a
//! caller rebuilds it on each user edit and hands the result to [`crate::generate`].

use alloc::vec::Vec;

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    emitter::OutputStyle,
    encoder::{BitOrder, Polarity},
    number_format::NumberFormat,
    segment_order::SegmentOrder,
};

/// Characters `0`-`9`, the fallback charset.
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Characters `A`-`F`.
pub const HEX_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Every character offered for selection: digits, hex letters, then space.
pub const CHARSET_OPTIONS: [char; 17] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', ' ',
];

/// How the digits of a multi-digit display are driven.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanMode {
    /// Every digit has its own segment lines.
    #[default]
    #[display("static")]
    Static,
    /// Digits share segment lines and are time-multiplexed with select masks.
    #[display("dynamic")]
    Dynamic,
}

/// An ordered set of characters: duplicates dropped, first occurrence kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<char>", into = "Vec<char>")]
pub struct Charset(Vec<char>);

impl Charset {
    #[must_use]
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        chars.into_iter().collect()
    }

    /// `0123456789`.
    #[must_use]
    pub fn digits() -> Self {
        Self::new(DIGITS)
    }

    /// `0123456789ABCDEF`.
    #[must_use]
    pub fn hex_digits() -> Self {
        Self::new(DIGITS.into_iter().chain(HEX_LETTERS))
    }

    /// Reject an empty charset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCharset`] if there are no characters.
    pub fn non_empty(self) -> Result<Self> {
        if self.is_empty() {
            Err(Error::EmptyCharset)
        } else {
            Ok(self)
        }
    }

    /// Append `ch` unless it is already present.
    pub fn push(&mut self, ch: char) {
        if !self.contains(ch) {
            self.0.push(ch);
        }
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut charset = Self(Vec::new());
        for ch in iter {
            charset.push(ch);
        }
        charset
    }
}

impl From<&str> for Charset {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<Vec<char>> for Charset {
    fn from(chars: Vec<char>) -> Self {
        chars.into_iter().collect()
    }
}

impl From<Charset> for Vec<char> {
    fn from(charset: Charset) -> Self {
        charset.0
    }
}

/// Everything needed to turn patterns into source text.
///
/// The defaults are forward order, MSB first, common cathode, binary literals, array style,
/// static scan, four digits, and the charset `0`-`9`.
///
/// `digit_count` is stored as given; [`crate::generate`] clamps it to `1..=12` and warns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodingConfig {
    order: SegmentOrder,
    bit_order: BitOrder,
    polarity: Polarity,
    number_format: NumberFormat,
    output_style: OutputStyle,
    scan_mode: ScanMode,
    digit_count: usize,
    charset: Charset,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            order: SegmentOrder::FORWARD,
            bit_order: BitOrder::Msb,
            polarity: Polarity::CommonCathode,
            number_format: NumberFormat::Bin,
            output_style: OutputStyle::Array,
            scan_mode: ScanMode::Static,
            digit_count: 4,
            charset: Charset::digits(),
        }
    }
}

impl EncodingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_order(self, order: SegmentOrder) -> Self {
        Self { order, ..self }
    }

    #[must_use]
    pub fn with_bit_order(self, bit_order: BitOrder) -> Self {
        Self { bit_order, ..self }
    }

    #[must_use]
    pub fn with_polarity(self, polarity: Polarity) -> Self {
        Self { polarity, ..self }
    }

    #[must_use]
    pub fn with_number_format(self, number_format: NumberFormat) -> Self {
        Self {
            number_format,
            ..self
        }
    }

    #[must_use]
    pub fn with_output_style(self, output_style: OutputStyle) -> Self {
        Self {
            output_style,
            ..self
        }
    }

    #[must_use]
    pub fn with_scan_mode(self, scan_mode: ScanMode) -> Self {
        Self { scan_mode, ..self }
    }

    #[must_use]
    pub fn with_digit_count(self, digit_count: usize) -> Self {
        Self {
            digit_count,
            ..self
        }
    }

    #[must_use]
    pub fn with_charset(self, charset: impl Into<Charset>) -> Self {
        Self {
            charset: charset.into(),
            ..self
        }
    }

    #[must_use]
    pub const fn order(&self) -> &SegmentOrder {
        &self.order
    }

    #[must_use]
    pub const fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[must_use]
    pub const fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    #[must_use]
    pub const fn output_style(&self) -> OutputStyle {
        self.output_style
    }

    #[must_use]
    pub const fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }

    /// The digit count as configured, possibly out of range.
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    #[must_use]
    pub const fn charset(&self) -> &Charset {
        &self.charset
    }
}
