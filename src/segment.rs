//! The eight segment identifiers of a seven-segment cell and the set of segments lit for one
//! character.
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd  dp
//! ```

use core::fmt;

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// One of the seven bars (`a`..`g`) or the decimal point (`dp`). Closed set.
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    #[display("a")]
    A,
    #[display("b")]
    B,
    #[display("c")]
    C,
    #[display("d")]
    D,
    #[display("e")]
    E,
    #[display("f")]
    F,
    #[display("g")]
    G,
    #[display("dp")]
    Dp,
}

impl Segment {
    /// The number of segments in a cell.
    pub const COUNT: usize = 8;

    /// Bit width of every encoded value: one bit per segment.
    pub const BITS: u32 = 8;

    /// All segments in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::Dp,
    ];

    /// Canonical lower-case name, as used in segment-order text and generated headers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::G => "g",
            Self::Dp => "dp",
        }
    }

    /// Look up a lower-case token. `p` is accepted as an alias for `dp`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "e" => Some(Self::E),
            "f" => Some(Self::F),
            "g" => Some(Self::G),
            "dp" | "p" => Some(Self::Dp),
            _ => None,
        }
    }

    /// Storage bit inside an [`ActiveSet`]. Unrelated to the bit a segment gets when encoded.
    const fn flag(self) -> u8 {
        1_u8.wrapping_shl(self as u32)
    }
}

/// The set of segments that are lit for one character.
///
/// Stored as one flag per segment in canonical order; use [`crate::encode`] to pack it into a
/// hardware byte for a particular wiring.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveSet(u8);

impl ActiveSet {
    /// All segments off.
    pub const EMPTY: Self = Self(0);

    /// Every bar and the decimal point lit.
    pub const FULL: Self = Self(u8::MAX);

    /// Build a set from a list of segments; usable in `const` tables.
    #[must_use]
    pub const fn from_segments(segments: &[Segment]) -> Self {
        let mut flags = 0;
        let mut remaining = segments;
        while let [segment, rest @ ..] = remaining {
            flags |= segment.flag();
            remaining = rest;
        }
        Self(flags)
    }

    #[must_use]
    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & segment.flag() != 0
    }

    /// Return a copy with `segment` lit.
    #[must_use]
    pub const fn with(self, segment: Segment) -> Self {
        Self(self.0 | segment.flag())
    }

    /// Return a copy with `segment` dark.
    #[must_use]
    pub const fn without(self, segment: Segment) -> Self {
        Self(self.0 & !segment.flag())
    }

    /// Return a copy with the membership of `segment` flipped.
    #[must_use]
    pub const fn toggled(self, segment: Segment) -> Self {
        Self(self.0 ^ segment.flag())
    }

    pub const fn insert(&mut self, segment: Segment) {
        *self = self.with(segment);
    }

    pub const fn remove(&mut self, segment: Segment) {
        *self = self.without(segment);
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.iter().count()
    }

    /// Lit segments in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Segment> {
        Segment::ALL
            .into_iter()
            .filter(move |segment| self.contains(*segment))
    }
}

impl FromIterator<Segment> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Debug for ActiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
