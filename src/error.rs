use alloc::string::String;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// None of these are fatal to code generation: [`crate::generate`] substitutes a safe default
/// and reports a [`crate::Warning`] instead. They surface directly only from the validating
/// constructors such as [`crate::SegmentOrder::parse`] and [`crate::DigitCount::new`].
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[display("invalid segment order {text:?}: {problem}")]
    InvalidOrder {
        text: String,
        #[error(not(source))]
        problem: OrderProblem,
    },

    #[display("charset is empty")]
    EmptyCharset,

    #[display("digit count {count} is outside 1..=12")]
    DigitCountOutOfRange { count: usize },
}

/// Why a segment-order text did not describe a permutation of the eight segments.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum OrderProblem {
    /// A token that is not one of `a`..`g`, `dp` (or the alias `p`).
    #[display("unknown segment {_0:?}")]
    UnknownSegment(String),

    /// The number of distinct segments named, when it is not exactly eight.
    #[display("expected 8 distinct segments, found {_0}")]
    SegmentCount(usize),
}
