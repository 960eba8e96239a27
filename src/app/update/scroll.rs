use super::super::state::App;
use std::time::Instant;
use tracing::trace;

impl App {
    pub(super) fn handle_frame(&mut self, now: Instant) {
        let speed = self.settings.scroll_speed;
        let Some(prompter) = self.prompter.as_mut() else {
            return;
        };
        prompter.now = now;
        let step = prompter.engine.advance(now, speed);
        if step > 0.0 {
            trace!(
                step,
                position = prompter.engine.position(),
                running = prompter.engine.is_running(),
                "Advanced"
            );
        } else if prompter.engine.is_resetting() {
            trace!(rendered = prompter.rendered_position(), "Easing to top");
        }
    }

    pub(super) fn handle_wheel(&mut self, delta: f32) {
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.engine.wheel(delta);
        }
    }

    pub(super) fn handle_drag_started(&mut self, pointer_y: f32) {
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.engine.begin_drag(pointer_y);
        }
    }

    pub(super) fn handle_drag_moved(&mut self, pointer_y: f32) {
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.engine.drag_to(pointer_y);
        }
    }

    pub(super) fn handle_drag_ended(&mut self) {
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.engine.end_drag();
        }
    }

    pub(super) fn handle_reset_to_top(&mut self) {
        let Some(prompter) = self.prompter.as_mut() else {
            return;
        };
        let now = Instant::now();
        prompter.now = now;
        prompter.engine.reset_to_top(now);
    }

    pub(super) fn handle_prompter_hovered(&mut self, hovered: bool) {
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.controls_visible = hovered;
        }
    }
}
