use crate::scroll_engine::ScrollEngine;
use std::time::Instant;

/// Runtime model of the prompt view. It exists only while the app is in
/// prompt mode; dropping it releases the scroll state and stops frames.
pub struct PrompterState {
    pub(in crate::app) engine: ScrollEngine,
    pub(in crate::app) controls_visible: bool,
    /// Timestamp of the most recent frame or scroll command, used to sample
    /// the rendered position from `view`.
    pub(in crate::app) now: Instant,
}

impl PrompterState {
    pub(in crate::app) fn new(now: Instant) -> Self {
        Self {
            engine: ScrollEngine::new(),
            controls_visible: false,
            now,
        }
    }

    pub(in crate::app) fn rendered_position(&self) -> f32 {
        self.engine.rendered_position(self.now)
    }
}
