//! Pack an [`ActiveSet`] into a hardware byte, then adjust it for the drive polarity.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::{
    segment::{ActiveSet, Segment},
    segment_order::SegmentOrder,
};

/// Bit width of every encoded segment value.
pub const SEGMENT_BITS: u32 = Segment::BITS;

/// Whether the first segment in the order lands on the most- or least-significant bit.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    #[default]
    #[display("msb")]
    Msb,
    #[display("lsb")]
    Lsb,
}

impl BitOrder {
    /// Bit index for the segment at `position` in an order of `len` segments.
    #[must_use]
    pub const fn bit_index(self, position: usize, len: usize) -> usize {
        match self {
            Self::Msb => len.saturating_sub(1).saturating_sub(position),
            Self::Lsb => position,
        }
    }
}

/// Pack `active` into one byte: bit [`BitOrder::bit_index`] of the result is set iff the segment
/// at that position of `order` is lit.
///
/// ```
/// use sevenseg_kit::{ActiveSet, BitOrder, Segment, SegmentOrder, encode};
///
/// let one = ActiveSet::from_segments(&[Segment::B, Segment::C]);
/// assert_eq!(encode(one, &SegmentOrder::FORWARD, BitOrder::Msb), 0x60);
/// assert_eq!(encode(one, &SegmentOrder::FORWARD, BitOrder::Lsb), 0x06);
/// ```
#[must_use]
pub fn encode(active: ActiveSet, order: &SegmentOrder, bit_order: BitOrder) -> u8 {
    order
        .iter()
        .enumerate()
        .filter(|(_, segment)| active.contains(*segment))
        .fold(0, |value, (position, _)| {
            let bit = u32::try_from(bit_order.bit_index(position, Segment::COUNT))
                .unwrap_or(u32::MAX);
            value | 1_u8.checked_shl(bit).unwrap_or(0)
        })
}

/// How a logic-1 output relates to a lit segment.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// A 1 bit lights the segment.
    #[default]
    #[display("common_cathode")]
    CommonCathode,
    /// A 0 bit lights the segment, so values are inverted.
    #[display("common_anode")]
    CommonAnode,
}

impl Polarity {
    /// Adjust a `bits`-wide value for this polarity. Applying it twice restores the value.
    ///
    /// `bits` is clamped to `1..=16`.
    #[must_use]
    pub const fn apply(self, value: u16, bits: u32) -> u16 {
        match self {
            Self::CommonCathode => value,
            Self::CommonAnode => value ^ low_mask(bits),
        }
    }

    /// [`Self::apply`] for an 8-bit segment value.
    #[must_use]
    pub const fn apply_byte(self, value: u8) -> u8 {
        match self {
            Self::CommonCathode => value,
            Self::CommonAnode => !value,
        }
    }
}

/// `(1 << bits) - 1` without overflowing at 16.
const fn low_mask(bits: u32) -> u16 {
    let bits = if bits == 0 { 1 } else if bits > 16 { 16 } else { bits };
    u16::MAX.wrapping_shr(16_u32.saturating_sub(bits))
}
