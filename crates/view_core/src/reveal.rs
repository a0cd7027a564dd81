//! Per-section reveal latch: a two-state machine that fires once when the
//! section first crosses into the viewport (with a leading margin) and never
//! reverts. Modeled as an explicit state enum rather than a raw boolean so
//! the monotonic invariant is obvious.

/// Leading margin in logical pixels: a section counts as visible once its top
/// edge is within this distance below the viewport's bottom edge.
pub const DEFAULT_REVEAL_MARGIN: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Animation parameters derived from the reveal state. `Hidden` maps to the
/// section's entry pose, `Revealed` to the resting pose (opaque, identity
/// offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPose {
    pub opacity: f32,
    pub offset: f32,
}

impl RevealPose {
    pub const RESTING: RevealPose = RevealPose {
        opacity: 1.0,
        offset: 0.0,
    };

    pub fn entry(offset: f32) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionReveal {
    state: RevealState,
    margin: f32,
}

impl SectionReveal {
    pub fn new() -> Self {
        Self::with_margin(DEFAULT_REVEAL_MARGIN)
    }

    pub fn with_margin(margin: f32) -> Self {
        Self {
            state: RevealState::Hidden,
            margin,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one viewport observation. Once the latch flips to `Revealed`
    /// no further observation can flip it back.
    pub fn observe(&mut self, section_top: f32, viewport_bottom: f32) {
        if self.state == RevealState::Revealed {
            return;
        }
        if section_top <= viewport_bottom + self.margin {
            self.state = RevealState::Revealed;
        }
    }

    /// Fail-open path: if viewport observation is unavailable the content
    /// must still show, just without the entry animation.
    pub fn force_reveal(&mut self) {
        self.state = RevealState::Revealed;
    }

    /// Target pose for this section given an entry offset of its choosing.
    pub fn pose(&self, entry_offset: f32) -> RevealPose {
        match self.state {
            RevealState::Hidden => RevealPose::entry(entry_offset),
            RevealState::Revealed => RevealPose::RESTING,
        }
    }
}

impl Default for SectionReveal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
