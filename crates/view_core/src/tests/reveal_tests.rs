use super::*;

#[test]
fn starts_hidden_with_entry_pose() {
    let reveal = SectionReveal::new();
    assert_eq!(reveal.state(), RevealState::Hidden);
    assert!(!reveal.is_revealed());
    assert_eq!(reveal.pose(50.0), RevealPose::entry(50.0));
}

#[test]
fn reveals_when_section_top_crosses_margin() {
    let mut reveal = SectionReveal::with_margin(100.0);

    // Section still 200px below the margin line: stays hidden.
    reveal.observe(1100.0, 800.0);
    assert!(!reveal.is_revealed());

    // Exactly at the margin line counts as visible.
    reveal.observe(900.0, 800.0);
    assert!(reveal.is_revealed());
    assert_eq!(reveal.pose(50.0), RevealPose::RESTING);
}

#[test]
fn reveal_is_monotonic_under_any_observation_sequence() {
    let mut reveal = SectionReveal::new();
    reveal.observe(0.0, 800.0);
    assert!(reveal.is_revealed());

    // Scrolling back up (section far below viewport again) must not revert.
    for top in [5000.0, 10_000.0, f32::MAX] {
        reveal.observe(top, 800.0);
        assert!(reveal.is_revealed());
    }
}

#[test]
fn sections_latch_independently() {
    let mut first = SectionReveal::new();
    let mut second = SectionReveal::new();
    first.observe(100.0, 800.0);
    second.observe(4000.0, 800.0);
    assert!(first.is_revealed());
    assert!(!second.is_revealed());
}

#[test]
fn force_reveal_fails_open() {
    let mut reveal = SectionReveal::new();
    reveal.force_reveal();
    assert!(reveal.is_revealed());
    assert_eq!(reveal.pose(120.0), RevealPose::RESTING);
}

#[test]
fn resting_pose_is_opaque_identity() {
    assert_eq!(RevealPose::RESTING.opacity, 1.0);
    assert_eq!(RevealPose::RESTING.offset, 0.0);
    let entry = RevealPose::entry(30.0);
    assert_eq!(entry.opacity, 0.0);
    assert_eq!(entry.offset, 30.0);
}
