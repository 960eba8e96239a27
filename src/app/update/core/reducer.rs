use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::mode::Trigger;
use tracing::info;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Navigate(mode) => self.handle_navigate(mode),
            Message::TogglePlayPause => self.handle_trigger(Trigger::TogglePlayPause, &mut effects),
            Message::SpeedUp => self.handle_trigger(Trigger::SpeedUp, &mut effects),
            Message::SpeedDown => self.handle_trigger(Trigger::SpeedDown, &mut effects),
            Message::ResetToTop => self.handle_reset_to_top(),
            Message::EditorAction(action) => self.handle_editor_action(action, &mut effects),
            Message::ClearScript => self.handle_clear_script(&mut effects),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size, &mut effects),
            Message::ScrollSpeedChanged(speed) => {
                self.handle_scroll_speed_changed(speed, &mut effects);
            }
            Message::BackgroundOpacityChanged(opacity) => {
                self.handle_background_opacity_changed(opacity, &mut effects);
            }
            Message::TextMarginChanged(margin) => {
                self.handle_text_margin_changed(margin, &mut effects);
            }
            Message::ReadingGuideToggled(enabled) => {
                self.handle_reading_guide_toggled(enabled, &mut effects);
            }
            Message::TextColorChanged(component, value) => {
                self.handle_text_color_changed(component, value, &mut effects);
            }
            Message::BackgroundColorChanged(component, value) => {
                self.handle_background_color_changed(component, value, &mut effects);
            }
            Message::PrompterHovered(hovered) => self.handle_prompter_hovered(hovered),
            Message::Wheel(delta) => self.handle_wheel(delta),
            Message::DragStarted(y) => self.handle_drag_started(y),
            Message::DragMoved(y) => self.handle_drag_moved(y),
            Message::DragEnded => self.handle_drag_ended(),
            Message::Frame(now) => self.handle_frame(now),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::DragWindow => effects.push(Effect::DragWindow),
            Message::MinimizeWindow => effects.push(Effect::MinimizeWindow),
            Message::CloseWindow => effects.push(Effect::QuitSafely),
        }

        self.sync_prompter();

        effects
    }

    pub(in crate::app) fn handle_trigger(&mut self, trigger: Trigger, effects: &mut Vec<Effect>) {
        if self.controller.apply(trigger, &mut self.settings) {
            effects.push(Effect::SaveSettings);
        }
        // Keep the engine in lockstep with the controller even mid-batch.
        self.sync_prompter();
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("Received Ctrl+C; quitting safely");
            effects.push(Effect::QuitSafely);
            return;
        }
        let triggers = self
            .shortcuts
            .as_ref()
            .map(|shortcuts| shortcuts.poll())
            .unwrap_or_default();
        for trigger in triggers {
            info!(?trigger, "Global shortcut");
            self.handle_trigger(trigger, effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::mode::AppMode;
    use crate::script::Script;
    use crate::scroll_engine::pixels_per_ms;
    use crate::settings::PrompterSettings;
    use crate::store::Store;
    use std::time::{Duration, Instant};

    fn build_test_app(name: &str, script: &str, speed: u32) -> App {
        let store = Store::new(std::env::temp_dir().join(format!(
            "teleprompter-reducer-test-{}-{name}",
            std::process::id()
        )));
        let settings = PrompterSettings {
            scroll_speed: speed,
            ..PrompterSettings::default()
        };
        App::from_parts(
            AppConfig::default(),
            store,
            settings,
            Script::new(script),
            None,
        )
    }

    #[test]
    fn toggling_twice_from_edit_leaves_prompt_paused() {
        let mut app = build_test_app("double-toggle", "Hello", 5);
        app.reduce(Message::TogglePlayPause);
        assert_eq!(app.mode(), AppMode::Prompt);
        assert!(app.prompter.as_ref().is_some_and(|p| p.engine.is_running()));

        app.reduce(Message::TogglePlayPause);
        assert_eq!(app.mode(), AppMode::Prompt);
        assert!(app.prompter.as_ref().is_some_and(|p| !p.engine.is_running()));
        assert!(!app.wants_frames());
    }

    #[test]
    fn leaving_prompt_drops_scroll_state_and_frames() {
        let mut app = build_test_app("unmount", "Hello", 5);
        app.reduce(Message::TogglePlayPause);
        app.reduce(Message::Wheel(300.0));
        assert!(app.wants_frames());

        app.reduce(Message::Navigate(AppMode::Edit));
        assert!(app.prompter.is_none());
        assert!(!app.wants_frames());

        app.reduce(Message::Navigate(AppMode::Prompt));
        let prompter = app.prompter.as_ref().expect("prompter mounted");
        assert_eq!(prompter.engine.position(), 0.0);
        assert!(!prompter.engine.is_running());
    }

    #[test]
    fn speed_shortcuts_clamp_and_request_save_only_on_change() {
        let mut app = build_test_app("speed", "Hello", 100);
        assert!(app.reduce(Message::SpeedUp).is_empty());
        assert_eq!(app.settings.scroll_speed, 100);
        assert_eq!(app.reduce(Message::SpeedDown), vec![Effect::SaveSettings]);
        assert_eq!(app.settings.scroll_speed, 99);
        assert_eq!(app.mode(), AppMode::Edit);

        app.settings.scroll_speed = 1;
        assert!(app.reduce(Message::SpeedDown).is_empty());
        assert_eq!(app.settings.scroll_speed, 1);
    }

    #[test]
    fn hello_world_advances_for_two_seconds() {
        let mut app = build_test_app("hello-world", "Hello\nWorld", 5);
        app.reduce(Message::TogglePlayPause);
        let start = Instant::now();
        app.reduce(Message::Frame(start));
        for frame in 1..=125u64 {
            app.reduce(Message::Frame(start + Duration::from_millis(frame * 16)));
        }
        let position = app
            .prompter
            .as_ref()
            .map(|p| p.engine.position())
            .expect("prompter mounted");
        let expected = 2000.0 * pixels_per_ms(5);
        assert!((position - expected).abs() < 1e-2, "{position} vs {expected}");
    }

    #[test]
    fn drag_suspends_frames_until_release() {
        let mut app = build_test_app("drag", "Hello", 20);
        app.reduce(Message::TogglePlayPause);
        app.reduce(Message::DragStarted(200.0));
        assert!(!app.wants_frames());
        app.reduce(Message::DragMoved(150.0));
        app.reduce(Message::DragEnded);
        assert!(app.wants_frames());
        let prompter = app.prompter.as_ref().expect("prompter mounted");
        assert_eq!(prompter.engine.position(), 50.0);
        assert!(prompter.engine.is_running());
    }

    #[test]
    fn scroll_input_outside_prompt_is_ignored() {
        let mut app = build_test_app("no-prompter", "Hello", 5);
        app.reduce(Message::Wheel(120.0));
        app.reduce(Message::ResetToTop);
        app.reduce(Message::Frame(Instant::now()));
        assert!(app.prompter.is_none());
        assert_eq!(app.mode(), AppMode::Edit);
    }
}
