//! Built-in patterns and the override layer.

use sevenseg_kit::{ActiveSet, BASE_PATTERNS, PatternTable, Segment, base_pattern};

#[test]
fn base_table_covers_hex_digits_without_decimal_point() {
    let chars = BASE_PATTERNS.iter().map(|(ch, _)| *ch).collect::<String>();
    assert_eq!(chars, "0123456789ABCDEF");
    assert!(
        BASE_PATTERNS
            .iter()
            .all(|(_, pattern)| !pattern.contains(Segment::Dp))
    );
}

#[test]
fn known_base_patterns() {
    use Segment::{A, B, C, D, E, F, G};

    assert_eq!(base_pattern('1'), Some(ActiveSet::from_segments(&[B, C])));
    assert_eq!(
        base_pattern('8'),
        Some(ActiveSet::from_segments(&[A, B, C, D, E, F, G]))
    );
    assert_eq!(
        base_pattern('b'),
        None,
        "lookups are case-sensitive"
    );
    assert_eq!(base_pattern('G'), None);
}

#[test]
fn unknown_character_is_blank() {
    let table = PatternTable::new();
    assert_eq!(table.effective_pattern('?'), ActiveSet::EMPTY);
    assert_eq!(table.effective_pattern(' '), ActiveSet::EMPTY);
}

#[test]
fn override_replaces_base_pattern() {
    let mut table = PatternTable::new();
    table.set_override('1', ActiveSet::from_segments(&[Segment::Dp]));
    assert_eq!(
        table.effective_pattern('1'),
        ActiveSet::from_segments(&[Segment::Dp])
    );
    assert_eq!(table.effective_pattern('2'), base_pattern('2').unwrap_or_default());
}

#[test]
fn empty_override_is_kept() {
    let mut table = PatternTable::new();
    table.set_override('8', ActiveSet::EMPTY);
    assert_eq!(table.effective_pattern('8'), ActiveSet::EMPTY);
    assert_eq!(table.override_for('8'), Some(ActiveSet::EMPTY));
}

#[test]
fn toggle_starts_from_effective_pattern() {
    let mut table = PatternTable::new();
    let toggled = table.toggle_segment('1', Segment::Dp);
    assert_eq!(
        toggled,
        ActiveSet::from_segments(&[Segment::B, Segment::C, Segment::Dp])
    );
    assert_eq!(table.override_for('1'), Some(toggled));

    let toggled_back = table.toggle_segment('1', Segment::Dp);
    assert_eq!(toggled_back, base_pattern('1').unwrap_or_default());
    // Still an override, even though it matches the base pattern.
    assert_eq!(table.override_for('1'), Some(toggled_back));
}

#[test]
fn toggle_on_unknown_character_creates_override() {
    let mut table = PatternTable::new();
    let pattern = table.toggle_segment('-', Segment::G);
    assert_eq!(pattern, ActiveSet::from_segments(&[Segment::G]));
    assert_eq!(table.effective_pattern('-'), pattern);
}

#[test]
fn reset_restores_base_pattern() {
    let mut table = PatternTable::new();
    table.toggle_segment('3', Segment::A);
    table.toggle_segment('4', Segment::A);

    assert!(table.reset_override('3').is_some());
    assert_eq!(table.effective_pattern('3'), base_pattern('3').unwrap_or_default());
    assert_eq!(table.reset_override('3'), None);
    assert_eq!(table.overrides().count(), 1);

    table.reset_all();
    assert_eq!(table.overrides().count(), 0);
    assert_eq!(table, PatternTable::new());
}

#[test]
fn active_set_operations() {
    let set = ActiveSet::EMPTY.with(Segment::A).with(Segment::Dp);
    assert_eq!(set.len(), 2);
    assert!(set.contains(Segment::Dp));
    assert!(!set.without(Segment::Dp).contains(Segment::Dp));
    assert_eq!(set.iter().collect::<Vec<_>>(), [Segment::A, Segment::Dp]);
    assert_eq!(ActiveSet::FULL.len(), Segment::COUNT);
    assert!(ActiveSet::EMPTY.is_empty());
    assert_eq!(
        [Segment::C, Segment::B].into_iter().collect::<ActiveSet>(),
        ActiveSet::from_segments(&[Segment::B, Segment::C])
    );
}

#[test]
fn active_sets_build_in_const_context() {
    const EMPTY: ActiveSet = ActiveSet::from_segments(&[]);
    const SEVEN: ActiveSet = ActiveSet::from_segments(&[Segment::A, Segment::B, Segment::C]);
    const WITH_POINT: ActiveSet = SEVEN.with(Segment::Dp);

    assert!(EMPTY.is_empty());
    assert_eq!(Some(SEVEN), base_pattern('7'));
    assert_eq!(WITH_POINT.len(), 4);
    assert_eq!(
        ActiveSet::from_segments(&Segment::ALL),
        ActiveSet::FULL
    );
}
