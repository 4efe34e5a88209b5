//! Bit packing, polarity, literal formatting, and digit-select masks.

use sevenseg_kit::{
    ActiveSet, BASE_PATTERNS, BitOrder, DigitCount, Error, NumberFormat, Polarity, SEGMENT_BITS,
    Segment, SegmentOrder, digit_select_masks, encode, parse_literal,
};

#[test]
fn forward_msb_matches_known_table() {
    let expected = [
        0xFC, 0x60, 0xDA, 0xF2, 0x66, 0xB6, 0xBE, 0xE0, 0xFE, 0xF6, 0xEE, 0x3E, 0x9C, 0x7A, 0x9E,
        0x8E,
    ];
    for ((ch, pattern), expected) in BASE_PATTERNS.iter().zip(expected) {
        assert_eq!(
            encode(*pattern, &SegmentOrder::FORWARD, BitOrder::Msb),
            expected,
            "{ch}"
        );
    }
}

#[test]
fn reverse_msb_matches_forward_lsb() {
    for (ch, pattern) in BASE_PATTERNS {
        assert_eq!(
            encode(pattern, &SegmentOrder::REVERSE, BitOrder::Msb),
            encode(pattern, &SegmentOrder::FORWARD, BitOrder::Lsb),
            "{ch}"
        );
    }
}

#[test]
fn forward_lsb_is_the_common_gfedcba_table() {
    let expected = [
        0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79,
        0x71,
    ];
    for ((ch, pattern), expected) in BASE_PATTERNS.iter().zip(expected) {
        assert_eq!(
            encode(*pattern, &SegmentOrder::FORWARD, BitOrder::Lsb),
            expected,
            "{ch}"
        );
    }
}

#[test]
fn bit_order_reverses_bits() {
    let orders = [
        SegmentOrder::FORWARD,
        SegmentOrder::REVERSE,
        SegmentOrder::parse("g f a b e d c dp").expect("valid order"),
    ];
    for order in orders {
        for flags in 0..=u8::MAX {
            let active = Segment::ALL
                .into_iter()
                .enumerate()
                .filter(|(index, _)| flags & (1 << index) != 0)
                .map(|(_, segment)| segment)
                .collect::<ActiveSet>();
            assert_eq!(
                encode(active, &order, BitOrder::Msb),
                encode(active, &order, BitOrder::Lsb).reverse_bits()
            );
        }
    }
}

#[test]
fn each_segment_lands_on_its_position() {
    let order = SegmentOrder::parse("dp a b c d e f g").expect("valid order");
    for (position, segment) in order.iter().enumerate() {
        let active = ActiveSet::EMPTY.with(segment);
        assert_eq!(encode(active, &order, BitOrder::Lsb), 1 << position);
        assert_eq!(encode(active, &order, BitOrder::Msb), 0x80 >> position);
    }
}

#[test]
fn empty_and_full_sets() {
    for bit_order in [BitOrder::Msb, BitOrder::Lsb] {
        assert_eq!(encode(ActiveSet::EMPTY, &SegmentOrder::FORWARD, bit_order), 0x00);
        assert_eq!(encode(ActiveSet::FULL, &SegmentOrder::REVERSE, bit_order), 0xFF);
    }
}

#[test]
fn common_anode_inverts_eight() {
    let eight = BASE_PATTERNS[8].1;
    let raw = encode(eight, &SegmentOrder::FORWARD, BitOrder::Msb);
    assert_eq!(raw, 0xFE);
    assert_eq!(Polarity::CommonAnode.apply_byte(raw), 0x01);
    assert_eq!(Polarity::CommonCathode.apply_byte(raw), 0xFE);
}

#[test]
fn polarity_is_an_involution() {
    for value in 0..=u8::MAX {
        for polarity in [Polarity::CommonCathode, Polarity::CommonAnode] {
            assert_eq!(polarity.apply_byte(polarity.apply_byte(value)), value);
            assert_eq!(
                polarity.apply(polarity.apply(u16::from(value), 8), 8),
                u16::from(value)
            );
        }
        assert_eq!(
            Polarity::CommonAnode.apply(u16::from(value), 8),
            u16::from(!value)
        );
    }
}

#[test]
fn wide_polarity_only_flips_low_bits() {
    assert_eq!(Polarity::CommonAnode.apply(0b0001, 4), 0b1110);
    assert_eq!(Polarity::CommonAnode.apply(0x001, 12), 0xFFE);
    assert_eq!(Polarity::CommonAnode.apply(0, 16), u16::MAX);
}

#[test]
fn literal_formats() {
    assert_eq!(NumberFormat::Bin.format(0x60, 8), "0b01100000");
    assert_eq!(NumberFormat::Hex.format(0x60, 8), "0x60");
    assert_eq!(NumberFormat::Dec.format(0x60, 8), "96");
    assert_eq!(NumberFormat::Hex.format(0, 8), "0x00");
    assert_eq!(NumberFormat::Bin.format(1, 4), "0b0001");
    assert_eq!(NumberFormat::Hex.format(0x200, 10), "0x200");
    assert_eq!(NumberFormat::Hex.format(0x8, 4), "0x8");
}

#[test]
fn formatted_literals_parse_back() {
    for value in 0..=u8::MAX {
        for format in [NumberFormat::Bin, NumberFormat::Dec, NumberFormat::Hex] {
            let literal = format.format(u16::from(value), 8);
            assert_eq!(parse_literal(&literal), Some(u16::from(value)), "{literal}");
        }
    }
}

#[test]
fn parse_literal_rejects_garbage() {
    assert_eq!(parse_literal(""), None);
    assert_eq!(parse_literal("0x"), None);
    assert_eq!(parse_literal("0b102"), None);
    assert_eq!(parse_literal("ten"), None);
    assert_eq!(parse_literal("0XfF"), Some(0xFF));
}

#[test]
fn digit_masks_are_one_hot() {
    for count in DigitCount::MIN..=DigitCount::MAX {
        let digit_count = DigitCount::new(count).expect("in range");
        let masks = digit_select_masks(digit_count);
        assert_eq!(masks.len(), count);
        for (index, mask) in masks.iter().enumerate() {
            assert_eq!(*mask, 1 << index);
            assert_eq!(mask.count_ones(), 1);
        }
    }
}

#[test]
fn digit_count_bounds() {
    assert_eq!(DigitCount::new(0), Err(Error::DigitCountOutOfRange { count: 0 }));
    assert_eq!(
        DigitCount::new(13),
        Err(Error::DigitCountOutOfRange { count: 13 })
    );
    assert_eq!(DigitCount::clamped(0).get(), 1);
    assert_eq!(DigitCount::clamped(99).get(), 12);
    assert_eq!(DigitCount::default().get(), 4);
}

#[test]
fn segment_bits_match_segment_count() {
    assert_eq!(SEGMENT_BITS, 8);
    assert_eq!(usize::try_from(SEGMENT_BITS), Ok(Segment::COUNT));
    assert_eq!(NumberFormat::Bin.format(0x01, SEGMENT_BITS), "0b00000001");
}
