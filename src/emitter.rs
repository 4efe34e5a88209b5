//! Turn encoded values into C-like source text in one of three styles.
//!
//! Every output starts with the same four-line header:
//!
//! ```text
//! // order: a, b, c, d, e, f, g, dp
//! // polarity: common_cathode
//! // bit_order: msb
//! // scan: static
//! ```
//!
//! followed by a blank line and the character table. In dynamic scan mode a blank line and the
//! digit-select table follow. Lines are joined with `\n` and there is no trailing newline.

use alloc::{
    collections::BTreeMap,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::{
    config::{EncodingConfig, ScanMode},
    digit_select::{DigitCount, DigitSelectTable},
    encoder::{BitOrder, Polarity, SEGMENT_BITS},
    number_format::NumberFormat,
    segment_order::SegmentOrder,
};

/// Name of the character-string literal in array style.
pub const CHARSET_SYMBOL: &str = "sevenseg_charset";
/// Name of the segment table in array style.
pub const TABLE_SYMBOL: &str = "sevenseg_table";
/// Name of the digit-select table.
pub const DIGITS_SYMBOL: &str = "sevenseg_digits";
/// Prefix of every macro and enum member.
pub const SYMBOL_PREFIX: &str = "SEVENSEG_";
/// Name of the enumeration in enum style.
pub const ENUM_SYMBOL: &str = "SevenSegCode";

/// Shape of the character table.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputStyle {
    /// A charset string literal plus a parallel `uint8_t` table.
    #[default]
    #[display("array")]
    Array,
    /// One `#define` per character.
    #[display("macro")]
    Macro,
    /// One `enum` with a member per character.
    #[display("enum")]
    Enum,
}

/// One character of the table and its encoded byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodedEntry {
    pub ch: char,
    /// Output of [`crate::encode`]: bit set means segment lit.
    pub raw_value: u8,
    /// `raw_value` after the polarity adjustment; this is what gets emitted.
    pub value: u8,
}

impl EncodedEntry {
    /// Values of `entries` keyed by character, for comparing outputs across styles.
    #[must_use]
    pub fn value_map(entries: &[Self]) -> BTreeMap<char, u8> {
        entries.iter().map(|entry| (entry.ch, entry.value)).collect()
    }
}

/// Two characters whose derived symbol names are identical.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("{first:?} and {second:?} both map to SEVENSEG_{name}")]
pub struct NameCollision {
    pub name: String,
    /// The character that keeps the name.
    pub first: char,
    /// The character left out of the macro/enum output.
    pub second: char,
}

/// Identifier fragment for `ch`: ASCII letters and digits stand for themselves, space is
/// `SPACE`, anything else is `U` plus its upper-case hex code point.
///
/// ```
/// use sevenseg_kit::symbol_name;
///
/// assert_eq!(symbol_name('7'), "7");
/// assert_eq!(symbol_name('F'), "F");
/// assert_eq!(symbol_name(' '), "SPACE");
/// assert_eq!(symbol_name('℃'), "U2103");
/// ```
#[must_use]
pub fn symbol_name(ch: char) -> String {
    if ch.is_ascii_alphanumeric() {
        ch.to_string()
    } else if ch == ' ' {
        "SPACE".to_string()
    } else {
        format!("U{:X}", u32::from(ch))
    }
}

/// Pair each character with its symbol name, keeping the first character for a repeated name.
///
/// Returns the kept `(char, name)` pairs in input order plus one [`NameCollision`] for every
/// character that was dropped.
pub fn resolve_symbol_names(
    chars: impl IntoIterator<Item = (char, String)>,
) -> (Vec<(char, String)>, Vec<NameCollision>) {
    let mut owners: BTreeMap<String, char> = BTreeMap::new();
    let mut kept = Vec::new();
    let mut collisions = Vec::new();

    for (ch, name) in chars {
        if let Some(&first) = owners.get(&name) {
            collisions.push(NameCollision {
                name,
                first,
                second: ch,
            });
        } else {
            owners.insert(name.clone(), ch);
            kept.push((ch, name));
        }
    }

    (kept, collisions)
}

/// Renders the header, character table, and optional digit-select table.
#[derive(Clone, Copy, Debug)]
pub struct CodeEmitter<'a> {
    order: &'a SegmentOrder,
    polarity: Polarity,
    bit_order: BitOrder,
    scan_mode: ScanMode,
    number_format: NumberFormat,
    output_style: OutputStyle,
}

impl<'a> CodeEmitter<'a> {
    #[must_use]
    pub const fn new(config: &'a EncodingConfig) -> Self {
        Self {
            order: config.order(),
            polarity: config.polarity(),
            bit_order: config.bit_order(),
            scan_mode: config.scan_mode(),
            number_format: config.number_format(),
            output_style: config.output_style(),
        }
    }

    /// Emit the full text for `entries` (already polarity-adjusted).
    ///
    /// `digit_select` is appended only in dynamic scan mode. Name collisions in macro and enum
    /// style are returned instead of emitting a duplicate symbol.
    #[must_use]
    pub fn emit(
        &self,
        entries: &[EncodedEntry],
        digit_select: Option<(&DigitSelectTable, DigitCount)>,
    ) -> (String, Vec<NameCollision>) {
        let mut lines = self.header();
        lines.push(String::new());

        let collisions = match self.output_style {
            OutputStyle::Array => {
                lines.extend(self.array_body(entries));
                Vec::new()
            }
            OutputStyle::Macro => {
                let (members, collisions) = self.named_members(entries);
                lines.extend(members.into_iter().map(|(name, literal)| {
                    format!("#define {SYMBOL_PREFIX}{name} {literal}")
                }));
                collisions
            }
            OutputStyle::Enum => {
                let (members, collisions) = self.named_members(entries);
                lines.push(format!("enum {ENUM_SYMBOL} {{"));
                lines.extend(members.into_iter().map(|(name, literal)| {
                    format!("  {SYMBOL_PREFIX}{name} = {literal},")
                }));
                lines.push("};".to_string());
                collisions
            }
        };

        if self.scan_mode == ScanMode::Dynamic {
            if let Some((masks, digit_count)) = digit_select {
                lines.push(String::new());
                lines.extend(self.digit_select_body(masks, digit_count));
            }
        }

        (lines.join("\n"), collisions)
    }

    fn header(&self) -> Vec<String> {
        vec![
            format!("// order: {}", self.order),
            format!("// polarity: {}", self.polarity),
            format!("// bit_order: {}", self.bit_order),
            format!("// scan: {}", self.scan_mode),
        ]
    }

    fn literal(&self, value: u8) -> String {
        self.number_format.format(u16::from(value), SEGMENT_BITS)
    }

    fn array_body(&self, entries: &[EncodedEntry]) -> Vec<String> {
        let charset = entries.iter().map(|entry| entry.ch).collect::<String>();

        let mut lines = Vec::with_capacity(entries.len().saturating_add(3));
        lines.push(format!(
            "static const char {CHARSET_SYMBOL}[] = \"{}\";",
            c_string_escape(&charset)
        ));
        lines.push(format!("static const uint8_t {TABLE_SYMBOL}[] = {{"));
        lines.extend(entries.iter().map(|entry| {
            format!(
                "  /* {} */ {},",
                comment_char(entry.ch),
                self.literal(entry.value)
            )
        }));
        lines.push("};".to_string());
        lines
    }

    /// `(symbol name, literal)` for each character that keeps its name, in charset order.
    fn named_members(
        &self,
        entries: &[EncodedEntry],
    ) -> (Vec<(String, String)>, Vec<NameCollision>) {
        let (named, collisions) =
            resolve_symbol_names(entries.iter().map(|entry| (entry.ch, symbol_name(entry.ch))));
        let values = EncodedEntry::value_map(entries);
        let members = named
            .into_iter()
            .filter_map(|(ch, name)| values.get(&ch).map(|value| (name, self.literal(*value))))
            .collect();
        (members, collisions)
    }

    fn digit_select_body(&self, masks: &DigitSelectTable, digit_count: DigitCount) -> Vec<String> {
        let element_type = if digit_count.get() <= 8 {
            "uint8_t"
        } else {
            "uint16_t"
        };

        let mut lines = Vec::with_capacity(masks.len().saturating_add(2));
        lines.push(format!(
            "static const {element_type} {DIGITS_SYMBOL}[] = {{"
        ));
        lines.extend(masks.iter().map(|mask| {
            format!(
                "  {},",
                self.number_format.format(*mask, digit_count.bits())
            )
        }));
        lines.push("};".to_string());
        lines
    }
}

/// Escape a string for use inside a C string literal.
fn c_string_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            // Octal escapes stop after three digits, unlike `\x`.
            ch if ch.is_control() => escaped.push_str(&format!("\\{:03o}", u32::from(ch))),
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// How a character is shown in a `/* ... */` annotation.
fn comment_char(ch: char) -> String {
    if ch.is_control() {
        format!("U+{:04X}", u32::from(ch))
    } else {
        ch.to_string()
    }
}
