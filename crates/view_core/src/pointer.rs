//! Pointer tracking for the custom cursor and hover tilt effects. Purely
//! reactive: the latest sample overwrites the previous one, samples between
//! frames may be dropped, and nothing queues or blocks.

/// Viewport-relative pointer coordinates in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Rotation derived from a pointer's offset inside a hovered card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x_deg: f32,
    pub y_deg: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last: Option<PointerSample>,
    hovering_interactive: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, x: f32, y: f32) {
        self.last = Some(PointerSample { x, y });
    }

    /// Pointer left the window (or was never seen).
    pub fn clear(&mut self) {
        self.last = None;
        self.hovering_interactive = false;
    }

    pub fn last(&self) -> Option<PointerSample> {
        self.last
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering_interactive = hovering;
    }

    pub fn hovering_interactive(&self) -> bool {
        self.hovering_interactive
    }

    /// Scale factor for the cursor dot: doubled over interactive elements.
    pub fn cursor_scale(&self) -> f32 {
        if self.hovering_interactive {
            2.0
        } else {
            1.0
        }
    }

    /// Tilt for a hovered card centered at (`center_x`, `center_y`). The
    /// divisor controls the effect strength; larger values tilt less. The
    /// card leans toward the pointer: vertical offset drives rotation about
    /// the x axis, horizontal offset (negated) about the y axis.
    pub fn tilt(&self, center_x: f32, center_y: f32, divisor: f32) -> Tilt {
        match self.last {
            Some(sample) => Tilt {
                x_deg: (sample.y - center_y) / divisor,
                y_deg: -(sample.x - center_x) / divisor,
            },
            None => Tilt::default(),
        }
    }
}

#[cfg(test)]
#[path = "tests/pointer_tests.rs"]
mod tests;
