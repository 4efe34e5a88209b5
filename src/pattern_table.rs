//! Character → lit-segment patterns: a fixed built-in table plus per-character overrides.

use alloc::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::segment::{
    ActiveSet, Segment,
    Segment::{A, B, C, D, E, F, G},
};

/// Built-in patterns for `0`-`9` and `A`-`F`. The decimal point is never lit.
pub const BASE_PATTERNS: [(char, ActiveSet); 16] = [
    ('0', ActiveSet::from_segments(&[A, B, C, D, E, F])),
    ('1', ActiveSet::from_segments(&[B, C])),
    ('2', ActiveSet::from_segments(&[A, B, G, E, D])),
    ('3', ActiveSet::from_segments(&[A, B, G, C, D])),
    ('4', ActiveSet::from_segments(&[F, G, B, C])),
    ('5', ActiveSet::from_segments(&[A, F, G, C, D])),
    ('6', ActiveSet::from_segments(&[A, F, G, E, C, D])),
    ('7', ActiveSet::from_segments(&[A, B, C])),
    ('8', ActiveSet::from_segments(&[A, B, C, D, E, F, G])),
    ('9', ActiveSet::from_segments(&[A, B, C, D, F, G])),
    ('A', ActiveSet::from_segments(&[A, B, C, E, F, G])),
    ('B', ActiveSet::from_segments(&[C, D, E, F, G])),
    ('C', ActiveSet::from_segments(&[A, D, E, F])),
    ('D', ActiveSet::from_segments(&[B, C, D, E, G])),
    ('E', ActiveSet::from_segments(&[A, D, E, F, G])),
    ('F', ActiveSet::from_segments(&[A, E, F, G])),
];

/// Built-in pattern for `ch`, if the table has one.
#[must_use]
pub fn base_pattern(ch: char) -> Option<ActiveSet> {
    BASE_PATTERNS
        .iter()
        .find(|(base_char, _)| *base_char == ch)
        .map(|(_, pattern)| *pattern)
}

/// The caller-owned override layer on top of [`BASE_PATTERNS`].
///
/// Overrides replace the built-in pattern wholesale; they are never merged with it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    overrides: BTreeMap<char, ActiveSet>,
}

impl PatternTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Override if set, else built-in pattern, else all segments off.
    #[must_use]
    pub fn effective_pattern(&self, ch: char) -> ActiveSet {
        self.overrides
            .get(&ch)
            .copied()
            .or_else(|| base_pattern(ch))
            .unwrap_or(ActiveSet::EMPTY)
    }

    pub fn set_override(&mut self, ch: char, pattern: ActiveSet) {
        self.overrides.insert(ch, pattern);
    }

    /// Flip one segment of the effective pattern and store the result as the override.
    ///
    /// Returns the new pattern.
    pub fn toggle_segment(&mut self, ch: char, segment: Segment) -> ActiveSet {
        let pattern = self.effective_pattern(ch).toggled(segment);
        self.set_override(ch, pattern);

        #[cfg(feature = "defmt")]
        defmt::trace!("toggled {} on {} -> {}", segment, ch, pattern);

        pattern
    }

    /// Drop the override for `ch`, reverting to the built-in pattern (or all off).
    ///
    /// Returns the override that was removed, if any.
    pub fn reset_override(&mut self, ch: char) -> Option<ActiveSet> {
        self.overrides.remove(&ch)
    }

    /// Drop every override.
    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }

    #[must_use]
    pub fn override_for(&self, ch: char) -> Option<ActiveSet> {
        self.overrides.get(&ch).copied()
    }

    /// Overridden characters and their patterns, in character order.
    pub fn overrides(&self) -> impl Iterator<Item = (char, ActiveSet)> + '_ {
        self.overrides.iter().map(|(ch, pattern)| (*ch, *pattern))
    }
}
