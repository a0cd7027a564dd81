//! Intro loading sequence and the scroll lock that accompanies it.
//!
//! The sequencer is deliberately poll-based: the current phase is a pure
//! function of elapsed time since start, so there are no stored callbacks to
//! suppress when the view is torn down mid-intro.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// How long the intro screen stays up before content may mount.
pub const INTRO_DURATION: Duration = Duration::from_millis(2500);
/// Small gap between the intro finishing and content mounting.
pub const CONTENT_REVEAL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Intro screen is up; content is not mounted.
    Loading,
    /// Intro finished, content mounts after the settle delay.
    Transitioning,
    /// Content is mounted and scrolling is unlocked.
    Ready,
}

#[derive(Debug, Clone, Copy)]
pub struct LoadingSequencer {
    started_at: Instant,
    intro: Duration,
    settle: Duration,
}

impl LoadingSequencer {
    pub fn start(now: Instant) -> Self {
        Self::with_durations(now, INTRO_DURATION, CONTENT_REVEAL_DELAY)
    }

    pub fn with_durations(now: Instant, intro: Duration, settle: Duration) -> Self {
        Self {
            started_at: now,
            intro,
            settle,
        }
    }

    /// Current phase at `now`. Monotone: later polls never report an earlier
    /// phase, and polling is free of side effects.
    pub fn poll(&self, now: Instant) -> LoadingPhase {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < self.intro {
            LoadingPhase::Loading
        } else if elapsed < self.intro + self.settle {
            LoadingPhase::Transitioning
        } else {
            LoadingPhase::Ready
        }
    }

    /// Intro progress in [0, 1], for the progress bar.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.intro.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Process-wide scroll suppression, shared by reference with the renderer.
/// Only the loading sequence acquires it, and only through the RAII guard so
/// every lock is paired with exactly one release on every exit path.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: AtomicUsize,
}

impl ScrollLock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    pub fn acquire(self: &Arc<Self>) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        tracing::debug!("scroll locked");
        ScrollLockGuard {
            lock: Arc::clone(self),
        }
    }
}

pub struct ScrollLockGuard {
    lock: Arc<ScrollLock>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.holders.fetch_sub(1, Ordering::AcqRel);
        tracing::debug!("scroll unlocked");
    }
}

#[cfg(test)]
#[path = "tests/loading_tests.rs"]
mod tests;
