//! Lookup-table generator for seven-segment (plus decimal point) displays.
//!
//! Given a charset, a segment bit order, a drive polarity, and an output style, [`generate`]
//! produces the byte tables and C-like source text firmware needs to drive a display.
//!
//! ```
//! use sevenseg_kit::{EncodingConfig, NumberFormat, PatternTable, generate};
//!
//! let config = EncodingConfig::new()
//!     .with_charset("01")
//!     .with_number_format(NumberFormat::Hex);
//! let generated = generate(&config, &PatternTable::new(), "");
//!
//! assert_eq!(
//!     generated.code,
//!     "// order: a, b, c, d, e, f, g, dp\n\
//!      // polarity: common_cathode\n\
//!      // bit_order: msb\n\
//!      // scan: static\n\
//!      \n\
//!      static const char sevenseg_charset[] = \"01\";\n\
//!      static const uint8_t sevenseg_table[] = {\n\
//!      \x20 /* 0 */ 0xFC,\n\
//!      \x20 /* 1 */ 0x60,\n\
//!      };"
//! );
//! ```
#![no_std]

extern crate alloc;

mod cache;
mod config;
mod digit_select;
mod emitter;
mod encoder;
mod error;
mod generate;
mod number_format;
mod pattern_table;
mod segment;
mod segment_order;
mod session;

pub use cache::GenerationCache;
pub use config::{CHARSET_OPTIONS, Charset, DIGITS, EncodingConfig, HEX_LETTERS, ScanMode};
pub use digit_select::{DigitCount, DigitSelectTable, digit_select_masks};
pub use emitter::{
    CHARSET_SYMBOL, CodeEmitter, DIGITS_SYMBOL, ENUM_SYMBOL, EncodedEntry, NameCollision,
    OutputStyle, SYMBOL_PREFIX, TABLE_SYMBOL, resolve_symbol_names, symbol_name,
};
pub use encoder::{BitOrder, Polarity, SEGMENT_BITS, encode};
pub use error::{Error, OrderProblem, Result};
pub use generate::{Generated, PreviewCell, Warning, encode_charset, generate, preview_chars};
pub use number_format::{NumberFormat, parse_literal};
pub use pattern_table::{BASE_PATTERNS, PatternTable, base_pattern};
pub use segment::{ActiveSet, Segment};
pub use segment_order::{OrderPreset, OrderSelector, SegmentOrder};
pub use session::Session;
