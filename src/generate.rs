//! The single entry point: configuration + patterns in, source text + warnings out.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use derive_more::derive::Display;

use crate::{
    Error,
    config::{Charset, DIGITS, EncodingConfig, ScanMode},
    digit_select::{DigitCount, digit_select_masks},
    emitter::{CodeEmitter, EncodedEntry, NameCollision},
    encoder::{BitOrder, Polarity, encode},
    pattern_table::PatternTable,
    segment::ActiveSet,
    segment_order::SegmentOrder,
};

/// A non-fatal problem found while generating. The output is still complete.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Warning {
    /// The custom segment order did not parse; the last valid order was used.
    #[display("{error}; using previous order {order}")]
    OrderFallback { error: Error, order: SegmentOrder },

    /// No characters were selected; `0`-`9` were used.
    #[display("charset is empty; using default digits 0-9")]
    EmptyCharset,

    /// The digit count was pulled into `1..=12`.
    #[display("digit count {requested} is outside 1..=12; using {used}")]
    DigitCountClamped { requested: usize, used: usize },

    /// Two characters derive the same macro/enum name; only the first is emitted.
    #[display("name collision: {_0}")]
    NameCollision(NameCollision),
}

/// One cell of the on-screen preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PreviewCell {
    pub ch: char,
    pub segments: ActiveSet,
}

/// Everything [`generate`] produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// The emitted source text.
    pub code: String,
    pub warnings: Vec<Warning>,
    /// One entry per charset character, in charset order.
    pub entries: Vec<EncodedEntry>,
    /// What the display shows: the charset (static scan) or the padded sample (dynamic scan).
    pub preview: Vec<PreviewCell>,
}

impl Generated {
    /// Warnings rendered as text, for display next to the output.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Generate the lookup tables described by `config`.
///
/// Never fails: an empty charset falls back to `0`-`9` and an out-of-range digit count is
/// clamped, each with a [`Warning`]. `sample_text` only affects the preview in dynamic scan mode.
///
/// ```
/// use sevenseg_kit::{EncodingConfig, PatternTable, Polarity, generate};
///
/// let config = EncodingConfig::new().with_charset("8").with_polarity(Polarity::CommonAnode);
/// let generated = generate(&config, &PatternTable::new(), "");
/// assert_eq!(generated.entries[0].raw_value, 0xFE);
/// assert_eq!(generated.entries[0].value, 0x01);
/// assert!(generated.code.ends_with("  /* 8 */ 0b00000001,\n};"));
/// ```
#[must_use]
pub fn generate(config: &EncodingConfig, patterns: &PatternTable, sample_text: &str) -> Generated {
    let mut warnings = Vec::new();

    let charset = match config.charset().clone().non_empty() {
        Ok(charset) => charset,
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("empty charset; falling back to digits");
            warnings.push(Warning::EmptyCharset);
            Charset::new(DIGITS)
        }
    };

    let digit_count = match DigitCount::new(config.digit_count()) {
        Ok(digit_count) => digit_count,
        Err(_) => {
            let clamped = DigitCount::clamped(config.digit_count());
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "digit count {} clamped to {}",
                config.digit_count(),
                clamped.get()
            );
            warnings.push(Warning::DigitCountClamped {
                requested: config.digit_count(),
                used: clamped.get(),
            });
            clamped
        }
    };

    let entries = encode_charset(
        &charset,
        patterns,
        config.order(),
        config.bit_order(),
        config.polarity(),
    );

    let masks = digit_select_masks(digit_count);
    let (code, collisions) = CodeEmitter::new(config).emit(&entries, Some((&masks, digit_count)));
    warnings.extend(collisions.into_iter().map(Warning::NameCollision));

    let preview = preview_chars(&charset, config.scan_mode(), digit_count, sample_text)
        .into_iter()
        .map(|ch| PreviewCell {
            ch,
            segments: patterns.effective_pattern(ch),
        })
        .collect();

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "generated {} entries ({} bytes of code, {} warnings)",
        entries.len(),
        code.len(),
        warnings.len()
    );

    Generated {
        code,
        warnings,
        entries,
        preview,
    }
}

/// Resolve, encode, and polarity-adjust every character of `charset`, in order.
#[must_use]
pub fn encode_charset(
    charset: &Charset,
    patterns: &PatternTable,
    order: &SegmentOrder,
    bit_order: BitOrder,
    polarity: Polarity,
) -> Vec<EncodedEntry> {
    charset
        .iter()
        .map(|ch| {
            let raw_value = encode(patterns.effective_pattern(ch), order, bit_order);
            EncodedEntry {
                ch,
                raw_value,
                value: polarity.apply_byte(raw_value),
            }
        })
        .collect()
}

/// Characters shown on the display.
///
/// Static scan shows the whole charset. Dynamic scan shows `sample_text` padded with spaces or
/// truncated to `digit_count` cells, with characters outside the charset shown as a space.
#[must_use]
pub fn preview_chars(
    charset: &Charset,
    scan_mode: ScanMode,
    digit_count: DigitCount,
    sample_text: &str,
) -> Vec<char> {
    match scan_mode {
        ScanMode::Static => charset.as_slice().to_vec(),
        ScanMode::Dynamic => sample_text
            .chars()
            .chain(core::iter::repeat(' '))
            .take(digit_count.get())
            .map(|ch| if charset.contains(ch) { ch } else { ' ' })
            .collect(),
    }
}
