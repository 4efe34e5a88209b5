//! Bit-order specification: which segment sits at which position of the encoded byte.
//!
//! Wiring varies between boards, so the order is either one of two presets or parsed from
//! user text such as `"dp g f e d c b a"` or `"A,B,C,D,E,F,G,P"`.

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use derive_more::derive::Display;
use heapless::Vec;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::{Error, OrderProblem},
    segment::Segment,
};

/// A permutation of the eight [`Segment`]s. Position 0 is the first segment named.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentOrder([Segment; Segment::COUNT]);

impl SegmentOrder {
    /// `a b c d e f g dp`.
    pub const FORWARD: Self = Self(Segment::ALL);

    /// `dp g f e d c b a`.
    pub const REVERSE: Self = Self([
        Segment::Dp,
        Segment::G,
        Segment::F,
        Segment::E,
        Segment::D,
        Segment::C,
        Segment::B,
        Segment::A,
    ]);

    /// Parse free-form segment-order text.
    ///
    /// Tokens are separated by whitespace and/or commas and are case-insensitive; `p` is an
    /// alias for `dp`. Repeated tokens are dropped (first occurrence wins). The text is accepted
    /// only if what remains names each of the eight segments exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrder`] for an unknown token or when the distinct tokens are not
    /// exactly the eight segments.
    pub fn parse(text: &str) -> Result<Self> {
        let lowered = text.to_lowercase();
        let invalid = |problem: OrderProblem| Error::InvalidOrder {
            text: text.to_string(),
            problem,
        };

        let mut order: Vec<Segment, { Segment::COUNT }> = Vec::new();
        for token in lowered
            .split(|char: char| char.is_whitespace() || char == ',')
            .filter(|token| !token.is_empty())
        {
            let segment = Segment::from_token(token)
                .ok_or_else(|| invalid(OrderProblem::UnknownSegment(token.to_string())))?;
            if !order.contains(&segment) {
                // Only eight distinct segments exist, so this never overflows.
                order
                    .push(segment)
                    .map_err(|_| invalid(OrderProblem::SegmentCount(Segment::COUNT)))?;
            }
        }

        let segments: [Segment; Segment::COUNT] = order
            .as_slice()
            .try_into()
            .map_err(|_| invalid(OrderProblem::SegmentCount(order.len())))?;

        #[cfg(feature = "defmt")]
        defmt::trace!("parsed segment order {}", segments);

        Ok(Self(segments))
    }

    #[must_use]
    pub const fn segments(&self) -> &[Segment; Segment::COUNT] {
        &self.0
    }

    /// Segments in order, first (position 0) to last.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }
}

impl Default for SegmentOrder {
    fn default() -> Self {
        Self::FORWARD
    }
}

impl FromStr for SegmentOrder {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

/// Comma-separated canonical names, e.g. `a, b, c, d, e, f, g, dp`.
impl fmt::Display for SegmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().format(", "))
    }
}

impl fmt::Debug for SegmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentOrder[{}]", self.iter().format(" "))
    }
}

/// Which source the segment order comes from.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrderPreset {
    #[default]
    #[display("forward")]
    Forward,
    #[display("reverse")]
    Reverse,
    #[display("custom")]
    Custom,
}

/// Tracks the order the user is editing and the last order that was valid.
///
/// While custom text does not parse, [`Self::order`] keeps returning the previous valid order
/// and [`Self::error`] explains why the text was rejected.
///
/// Only the preset, the custom text, and the last valid order are persisted. The error is
/// recomputed on load, so a restored selector reports the same rejection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectorState", into = "SelectorState")]
pub struct OrderSelector {
    preset: OrderPreset,
    custom_text: String,
    order: SegmentOrder,
    error: Option<Error>,
}

#[derive(Serialize, Deserialize)]
struct SelectorState {
    preset: OrderPreset,
    custom_text: String,
    order: SegmentOrder,
}

impl From<SelectorState> for OrderSelector {
    fn from(state: SelectorState) -> Self {
        let mut selector = Self {
            preset: state.preset,
            custom_text: state.custom_text,
            order: state.order,
            error: None,
        };
        if selector.preset == OrderPreset::Custom {
            selector.reparse();
        }
        selector
    }
}

impl From<OrderSelector> for SelectorState {
    fn from(selector: OrderSelector) -> Self {
        Self {
            preset: selector.preset,
            custom_text: selector.custom_text,
            order: selector.order,
        }
    }
}

impl Default for OrderSelector {
    fn default() -> Self {
        Self {
            preset: OrderPreset::Forward,
            custom_text: SegmentOrder::FORWARD
                .iter()
                .map(Segment::name)
                .join(" "),
            order: SegmentOrder::FORWARD,
            error: None,
        }
    }
}

impl OrderSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch preset. Choosing `Custom` re-parses the stored custom text.
    pub fn select_preset(&mut self, preset: OrderPreset) {
        self.preset = preset;
        match preset {
            OrderPreset::Forward => self.adopt(SegmentOrder::FORWARD),
            OrderPreset::Reverse => self.adopt(SegmentOrder::REVERSE),
            OrderPreset::Custom => self.reparse(),
        }
    }

    /// Replace the custom text. It takes effect only while the `Custom` preset is selected.
    pub fn set_custom_text(&mut self, text: &str) {
        self.custom_text = text.to_string();
        if self.preset == OrderPreset::Custom {
            self.reparse();
        }
    }

    /// The order to encode with: the latest valid one.
    #[must_use]
    pub const fn order(&self) -> SegmentOrder {
        self.order
    }

    #[must_use]
    pub const fn preset(&self) -> OrderPreset {
        self.preset
    }

    #[must_use]
    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// Why the current custom text was rejected, if it was.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    fn adopt(&mut self, order: SegmentOrder) {
        self.order = order;
        self.error = None;
    }

    fn reparse(&mut self) {
        match SegmentOrder::parse(&self.custom_text) {
            Ok(order) => self.adopt(order),
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("custom segment order rejected; keeping {}", self.order);
                self.error = Some(err);
            }
        }
    }
}
