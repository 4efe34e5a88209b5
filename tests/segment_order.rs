//! Segment-order parsing and the preset/custom selector.

use itertools::Itertools;
use sevenseg_kit::{Error, OrderPreset, OrderProblem, OrderSelector, Segment, SegmentOrder};

#[test]
fn presets_cover_all_segments() {
    assert_eq!(SegmentOrder::FORWARD.segments(), &Segment::ALL);
    let reversed = SegmentOrder::REVERSE.iter().rev().collect::<Vec<_>>();
    assert_eq!(reversed, Segment::ALL.to_vec());
    assert_eq!(SegmentOrder::default(), SegmentOrder::FORWARD);
}

#[test]
fn display_uses_canonical_names() {
    assert_eq!(
        SegmentOrder::FORWARD.to_string(),
        "a, b, c, d, e, f, g, dp"
    );
    assert_eq!(
        SegmentOrder::REVERSE.to_string(),
        "dp, g, f, e, d, c, b, a"
    );
}

#[test]
fn parse_accepts_forward_text() {
    assert_eq!(
        SegmentOrder::parse("a b c d e f g dp"),
        Ok(SegmentOrder::FORWARD)
    );
}

#[test]
fn parse_is_case_insensitive_and_accepts_commas_and_alias() {
    let order = SegmentOrder::parse("DP, G,F e\td\nC,,B  a").expect("valid order");
    assert_eq!(order, SegmentOrder::REVERSE);

    let order = SegmentOrder::parse("a b c d e f g p").expect("p is an alias for dp");
    assert_eq!(order, SegmentOrder::FORWARD);
}

#[test]
fn parse_drops_repeated_tokens() {
    let order = SegmentOrder::parse("a a b c d e f g dp b").expect("duplicates are dropped");
    assert_eq!(order, SegmentOrder::FORWARD);
}

#[test]
fn parse_rejects_unknown_token() {
    let err = SegmentOrder::parse("a b c d e f g x").expect_err("x is not a segment");
    assert_eq!(
        err,
        Error::InvalidOrder {
            text: "a b c d e f g x".to_string(),
            problem: OrderProblem::UnknownSegment("x".to_string()),
        }
    );
    assert!(err.to_string().contains("unknown segment \"x\""));
}

#[test]
fn parse_rejects_missing_segment() {
    let err = SegmentOrder::parse("a b c d e f g").expect_err("dp is missing");
    assert!(matches!(
        err,
        Error::InvalidOrder {
            problem: OrderProblem::SegmentCount(7),
            ..
        }
    ));
}

#[test]
fn parse_rejects_empty_text() {
    let err = SegmentOrder::parse(" ,, ").expect_err("nothing named");
    assert!(matches!(
        err,
        Error::InvalidOrder {
            problem: OrderProblem::SegmentCount(0),
            ..
        }
    ));
}

#[test]
fn every_permutation_parses_back_to_itself() {
    for permutation in Segment::ALL.iter().copied().permutations(Segment::COUNT) {
        let text = permutation.iter().map(|segment| segment.name()).join(" ");
        let order = SegmentOrder::parse(&text).expect("permutation is a valid order");
        assert_eq!(order.segments().as_slice(), permutation.as_slice(), "{text}");
        assert_eq!(text.parse::<SegmentOrder>(), Ok(order));
    }
}

#[test]
fn selector_defaults_to_forward() {
    let selector = OrderSelector::new();
    assert_eq!(selector.preset(), OrderPreset::Forward);
    assert_eq!(selector.order(), SegmentOrder::FORWARD);
    assert_eq!(selector.custom_text(), "a b c d e f g dp");
    assert!(selector.error().is_none());
}

#[test]
fn selector_switches_presets() {
    let mut selector = OrderSelector::new();
    selector.select_preset(OrderPreset::Reverse);
    assert_eq!(selector.order(), SegmentOrder::REVERSE);
    selector.select_preset(OrderPreset::Forward);
    assert_eq!(selector.order(), SegmentOrder::FORWARD);
}

#[test]
fn selector_keeps_last_valid_order_on_bad_custom_text() {
    let mut selector = OrderSelector::new();
    selector.select_preset(OrderPreset::Custom);
    selector.set_custom_text("dp g f e d c b a");
    assert_eq!(selector.order(), SegmentOrder::REVERSE);
    assert!(selector.error().is_none());

    selector.set_custom_text("dp g f e d c b");
    assert_eq!(selector.order(), SegmentOrder::REVERSE);
    assert!(matches!(
        selector.error(),
        Some(Error::InvalidOrder {
            problem: OrderProblem::SegmentCount(7),
            ..
        })
    ));

    selector.set_custom_text("b a c d e f g dp");
    assert!(selector.error().is_none());
    assert_eq!(
        selector.order().segments()[..2],
        [Segment::B, Segment::A]
    );
}

#[test]
fn custom_text_is_ignored_until_custom_is_selected() {
    let mut selector = OrderSelector::new();
    selector.set_custom_text("nonsense");
    assert_eq!(selector.order(), SegmentOrder::FORWARD);
    assert!(selector.error().is_none());

    selector.select_preset(OrderPreset::Custom);
    assert!(selector.error().is_some());
    assert_eq!(selector.order(), SegmentOrder::FORWARD);

    selector.select_preset(OrderPreset::Reverse);
    assert!(selector.error().is_none());
    assert_eq!(selector.custom_text(), "nonsense");
}

#[test]
fn restored_selector_keeps_rejection() {
    let mut selector = OrderSelector::new();
    selector.select_preset(OrderPreset::Reverse);
    selector.select_preset(OrderPreset::Custom);
    selector.set_custom_text("a b c d e f g q");
    assert!(selector.error().is_some());

    let bytes = postcard::to_allocvec(&selector).expect("selector serializes");
    let restored: OrderSelector = postcard::from_bytes(&bytes).expect("selector deserializes");
    assert_eq!(restored, selector);
    assert!(matches!(
        restored.error(),
        Some(Error::InvalidOrder {
            problem: OrderProblem::UnknownSegment(token),
            ..
        }) if token == "q"
    ));
    assert_eq!(restored.order(), SegmentOrder::FORWARD);
}

#[test]
fn restored_selector_with_valid_order_has_no_error() {
    let mut selector = OrderSelector::new();
    selector.select_preset(OrderPreset::Custom);
    selector.set_custom_text("dp a b c d e f g");

    let bytes = postcard::to_allocvec(&selector).expect("selector serializes");
    let restored: OrderSelector = postcard::from_bytes(&bytes).expect("selector deserializes");
    assert_eq!(restored, selector);
    assert!(restored.error().is_none());
    assert_eq!(restored.order().segments()[0], Segment::Dp);
}
