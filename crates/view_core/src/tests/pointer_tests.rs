use super::*;

#[test]
fn latest_sample_overwrites_older_ones() {
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.last(), None);
    tracker.sample(10.0, 20.0);
    tracker.sample(30.0, 40.0);
    assert_eq!(tracker.last(), Some(PointerSample { x: 30.0, y: 40.0 }));
}

#[test]
fn clear_drops_sample_and_hover_state() {
    let mut tracker = PointerTracker::new();
    tracker.sample(1.0, 2.0);
    tracker.set_hovering(true);
    tracker.clear();
    assert_eq!(tracker.last(), None);
    assert!(!tracker.hovering_interactive());
}

#[test]
fn cursor_doubles_over_interactive_elements() {
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.cursor_scale(), 1.0);
    tracker.set_hovering(true);
    assert_eq!(tracker.cursor_scale(), 2.0);
    tracker.set_hovering(false);
    assert_eq!(tracker.cursor_scale(), 1.0);
}

#[test]
fn tilt_leans_toward_the_pointer() {
    let mut tracker = PointerTracker::new();
    // Pointer 50px right of and 100px below the card center, divisor 10.
    tracker.sample(250.0, 300.0);
    let tilt = tracker.tilt(200.0, 200.0, 10.0);
    assert_eq!(tilt.x_deg, 10.0);
    assert_eq!(tilt.y_deg, -5.0);
}

#[test]
fn tilt_strength_scales_with_divisor() {
    let mut tracker = PointerTracker::new();
    tracker.sample(300.0, 200.0);
    let strong = tracker.tilt(200.0, 200.0, 10.0);
    let weak = tracker.tilt(200.0, 200.0, 25.0);
    assert!(weak.y_deg.abs() < strong.y_deg.abs());
}

#[test]
fn tilt_is_identity_with_no_sample() {
    let tracker = PointerTracker::new();
    assert_eq!(tracker.tilt(100.0, 100.0, 10.0), Tilt::default());
}
