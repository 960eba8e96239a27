//! View mode and playback state machine.
//!
//! The controller is the single owner of `{AppMode, playing}`. Every trigger is
//! synchronous and total; nothing is queued or rejected.

use crate::settings::PrompterSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Edit,
    Settings,
    Prompt,
}

impl std::fmt::Display for AppMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppMode::Edit => "edit",
            AppMode::Settings => "settings",
            AppMode::Prompt => "prompt",
        };
        write!(f, "{}", label)
    }
}

/// External triggers shared by global shortcuts, local keys and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    TogglePlayPause,
    SpeedUp,
    SpeedDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeController {
    mode: AppMode,
    playing: bool,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Playback flag; always false outside prompt mode.
    pub fn is_playing(&self) -> bool {
        self.mode == AppMode::Prompt && self.playing
    }

    /// Enter prompt mode playing, or flip playback if already prompting.
    pub fn toggle_play_pause(&mut self) {
        if self.mode == AppMode::Prompt {
            self.playing = !self.playing;
        } else {
            self.mode = AppMode::Prompt;
            self.playing = true;
        }
        tracing::info!(mode = %self.mode, playing = self.playing, "Toggled playback");
    }

    /// Switch views directly. Navigation always leaves playback paused.
    pub fn navigate(&mut self, mode: AppMode) {
        self.mode = mode;
        self.playing = false;
        tracing::info!(mode = %self.mode, "Navigated");
    }

    /// Apply a trigger. Speed triggers adjust `settings` and never change
    /// mode. Returns true when `settings` was modified.
    pub fn apply(&mut self, trigger: Trigger, settings: &mut PrompterSettings) -> bool {
        match trigger {
            Trigger::TogglePlayPause => {
                self.toggle_play_pause();
                false
            }
            Trigger::SpeedUp | Trigger::SpeedDown => {
                let delta = if trigger == Trigger::SpeedUp { 1 } else { -1 };
                let before = settings.scroll_speed;
                let after = settings.adjust_speed(delta);
                tracing::debug!(before, after, "Adjusted scroll speed");
                before != after
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MAX_SCROLL_SPEED, MIN_SCROLL_SPEED};

    #[test]
    fn double_toggle_from_edit_lands_in_paused_prompt() {
        let mut controller = ModeController::new();
        controller.toggle_play_pause();
        assert_eq!(controller.mode(), AppMode::Prompt);
        assert!(controller.is_playing());
        controller.toggle_play_pause();
        assert_eq!(controller.mode(), AppMode::Prompt);
        assert!(!controller.is_playing());
    }

    #[test]
    fn toggle_from_settings_starts_playing() {
        let mut controller = ModeController::new();
        controller.navigate(AppMode::Settings);
        controller.toggle_play_pause();
        assert_eq!(controller.mode(), AppMode::Prompt);
        assert!(controller.is_playing());
    }

    #[test]
    fn navigation_forces_pause() {
        let mut controller = ModeController::new();
        controller.toggle_play_pause();
        controller.navigate(AppMode::Settings);
        assert!(!controller.is_playing());
        controller.navigate(AppMode::Prompt);
        assert_eq!(controller.mode(), AppMode::Prompt);
        assert!(!controller.is_playing());
    }

    #[test]
    fn speed_triggers_clamp_and_keep_mode() {
        let mut controller = ModeController::new();
        let mut settings = PrompterSettings {
            scroll_speed: MAX_SCROLL_SPEED,
            ..PrompterSettings::default()
        };
        assert!(!controller.apply(Trigger::SpeedUp, &mut settings));
        assert_eq!(settings.scroll_speed, MAX_SCROLL_SPEED);
        assert_eq!(controller.mode(), AppMode::Edit);

        settings.scroll_speed = MIN_SCROLL_SPEED;
        assert!(!controller.apply(Trigger::SpeedDown, &mut settings));
        assert_eq!(settings.scroll_speed, MIN_SCROLL_SPEED);

        assert!(controller.apply(Trigger::SpeedUp, &mut settings));
        assert_eq!(settings.scroll_speed, MIN_SCROLL_SPEED + 1);
    }

    #[test]
    fn rapid_toggles_alternate_cleanly() {
        let mut controller = ModeController::new();
        let mut settings = PrompterSettings::default();
        for round in 0..9 {
            controller.apply(Trigger::TogglePlayPause, &mut settings);
            assert_eq!(controller.is_playing(), round % 2 == 0);
        }
    }
}
