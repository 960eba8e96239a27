//! Scroll position model for the prompter.
//!
//! Three sources move the text: automatic advancement driven by display
//! frames, wheel input, and drag gestures. The engine keeps them from fighting:
//! a drag suspends advancement without stopping it, wheel input applies
//! immediately, and advancement always measures elapsed time from a freshly
//! sampled frame after any suspension so there is never a catch-up jump.
//!
//! All operations take the current `Instant` from the caller, which keeps the
//! engine deterministic under test.

use std::time::{Duration, Instant};

/// Pixels per second contributed by each unit of scroll speed.
pub const PIXELS_PER_SECOND_PER_SPEED: f32 = 5.0;
/// Length of the eased reset-to-top transition.
pub const RESET_TRANSITION: Duration = Duration::from_millis(300);
/// Pixel distance applied for one line of a line-based wheel delta.
pub const WHEEL_LINE_PX: f32 = 60.0;

/// Automatic advancement rate for a configured speed.
pub fn pixels_per_ms(speed: u32) -> f32 {
    speed as f32 * PIXELS_PER_SECOND_PER_SPEED / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    last_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResetTransition {
    from: f32,
    started_at: Instant,
}

impl ResetTransition {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / RESET_TRANSITION.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= RESET_TRANSITION
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEngine {
    position: f32,
    running: bool,
    drag: Option<DragState>,
    last_frame: Option<Instant>,
    reset: Option<ResetTransition>,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollEngine {
    pub fn new() -> Self {
        ScrollEngine {
            position: 0.0,
            running: false,
            drag: None,
            last_frame: None,
            reset: None,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_resetting(&self) -> bool {
        self.reset.is_some()
    }

    /// Whether advancement may move the text right now.
    pub fn is_advancing(&self) -> bool {
        self.running && self.drag.is_none() && self.reset.is_none()
    }

    /// Whether the caller should keep delivering display frames.
    pub fn wants_frames(&self) -> bool {
        (self.running && self.drag.is_none()) || self.reset.is_some()
    }

    /// Start or stop automatic advancement. Starting always re-samples the
    /// frame clock on the next frame.
    pub fn set_running(&mut self, running: bool) {
        if self.running == running {
            return;
        }
        self.running = running;
        self.last_frame = None;
        tracing::debug!(running, position = self.position, "Scroll engine run state changed");
    }

    /// Apply one display frame. Speed is read on every call so live changes
    /// take effect on the next frame. Returns the distance advanced.
    pub fn advance(&mut self, now: Instant, speed: u32) -> f32 {
        if let Some(reset) = self.reset {
            if reset.is_finished(now) {
                self.reset = None;
                tracing::trace!("Reset transition finished");
            }
            // Advancement holds for the whole transition and restarts cleanly.
            self.last_frame = None;
            return 0.0;
        }
        if !self.is_advancing() {
            self.last_frame = None;
            return 0.0;
        }
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let delta_ms = now.saturating_duration_since(last).as_secs_f32() * 1000.0;
        let step = delta_ms * pixels_per_ms(speed);
        self.position = (self.position + step).max(0.0);
        step
    }

    /// Add a wheel delta (positive moves toward later text).
    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.reset = None;
        self.position = (self.position + delta_y).max(0.0);
    }

    pub fn begin_drag(&mut self, pointer_y: f32) {
        if !pointer_y.is_finite() {
            return;
        }
        self.reset = None;
        self.drag = Some(DragState { last_y: pointer_y });
        self.last_frame = None;
        tracing::debug!(pointer_y, position = self.position, "Drag started");
    }

    /// Move the drag to `pointer_y`. Moving the pointer up reveals later text.
    pub fn drag_to(&mut self, pointer_y: f32) {
        if !pointer_y.is_finite() {
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = pointer_y - drag.last_y;
        drag.last_y = pointer_y;
        self.position = (self.position - delta).max(0.0);
    }

    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.last_frame = None;
            tracing::debug!(position = self.position, "Drag ended");
        }
    }

    /// Jump back to the top, easing the rendered position over
    /// [`RESET_TRANSITION`].
    pub fn reset_to_top(&mut self, now: Instant) {
        let from = self.rendered_position(now);
        self.position = 0.0;
        self.last_frame = None;
        self.reset = (from > 0.0).then_some(ResetTransition {
            from,
            started_at: now,
        });
        tracing::debug!(from, "Reset to top");
    }

    /// Position the view should draw at `now`. Matches [`Self::position`]
    /// whenever no reset transition is in flight.
    pub fn rendered_position(&self, now: Instant) -> f32 {
        match self.reset {
            Some(reset) if !reset.is_finished(now) => {
                let remaining = 1.0 - ease_out_cubic(reset.progress(now));
                (reset.from * remaining + self.position * (1.0 - remaining)).max(0.0)
            }
            _ => self.position,
        }
    }
}
