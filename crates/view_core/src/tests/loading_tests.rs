use super::*;
use std::time::{Duration, Instant};

#[test]
fn phases_follow_the_intro_and_settle_thresholds() {
    let start = Instant::now();
    let sequencer = LoadingSequencer::start(start);

    assert_eq!(sequencer.poll(start), LoadingPhase::Loading);
    assert_eq!(
        sequencer.poll(start + Duration::from_millis(2499)),
        LoadingPhase::Loading
    );
    assert_eq!(
        sequencer.poll(start + Duration::from_millis(2500)),
        LoadingPhase::Transitioning
    );
    assert_eq!(
        sequencer.poll(start + Duration::from_millis(2599)),
        LoadingPhase::Transitioning
    );
    assert_eq!(
        sequencer.poll(start + Duration::from_millis(2600)),
        LoadingPhase::Ready
    );
}

#[test]
fn ready_only_after_loading_has_ended() {
    let start = Instant::now();
    let sequencer =
        LoadingSequencer::with_durations(start, Duration::from_millis(10), Duration::from_millis(5));
    let mut last = LoadingPhase::Loading;
    for ms in 0..30 {
        let phase = sequencer.poll(start + Duration::from_millis(ms));
        // Phases only move forward.
        let rank = |p: LoadingPhase| match p {
            LoadingPhase::Loading => 0,
            LoadingPhase::Transitioning => 1,
            LoadingPhase::Ready => 2,
        };
        assert!(rank(phase) >= rank(last));
        last = phase;
    }
    assert_eq!(last, LoadingPhase::Ready);
}

#[test]
fn polling_is_idempotent() {
    let start = Instant::now();
    let sequencer = LoadingSequencer::start(start);
    let at = start + Duration::from_millis(1000);
    assert_eq!(sequencer.poll(at), sequencer.poll(at));
}

#[test]
fn progress_ramps_from_zero_to_one() {
    let start = Instant::now();
    let sequencer = LoadingSequencer::start(start);
    assert_eq!(sequencer.progress(start), 0.0);
    let half = sequencer.progress(start + Duration::from_millis(1250));
    assert!((half - 0.5).abs() < 0.01, "got {half}");
    assert_eq!(sequencer.progress(start + Duration::from_secs(10)), 1.0);
}

#[test]
fn scroll_lock_pairs_every_acquire_with_one_release() {
    let lock = ScrollLock::new();
    assert!(!lock.is_locked());
    {
        let _guard = lock.acquire();
        assert!(lock.is_locked());
    }
    assert!(!lock.is_locked());
}

#[test]
fn scroll_lock_releases_on_early_teardown() {
    let lock = ScrollLock::new();
    let guard = lock.acquire();
    // Teardown mid-intro: dropping the holder must unlock.
    drop(guard);
    assert!(!lock.is_locked());
}

#[test]
fn scroll_lock_handles_nested_holders() {
    let lock = ScrollLock::new();
    let outer = lock.acquire();
    let inner = lock.acquire();
    drop(inner);
    assert!(lock.is_locked());
    drop(outer);
    assert!(!lock.is_locked());
}
