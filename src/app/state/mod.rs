mod constants;
mod prompter;

use crate::config::AppConfig;
use crate::hotkeys::GlobalShortcuts;
use crate::mode::{AppMode, ModeController};
use crate::script::Script;
use crate::settings::{HexColor, PrompterSettings};
use crate::store::Store;
use iced::Task;
use iced::widget::text_editor;
use std::time::Instant;

use super::messages::{Component, Message};

pub(crate) use constants::*;
pub(in crate::app) use prompter::PrompterState;

/// Core application state. Every field is owned here and handed to handlers
/// and views by reference.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) store: Store,
    pub(super) settings: PrompterSettings,
    pub(super) script: Script,
    pub(super) editor: text_editor::Content,
    pub(super) controller: ModeController,
    pub(super) prompter: Option<PrompterState>,
    pub(super) shortcuts: Option<GlobalShortcuts>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig, store: Store) -> (App, Task<Message>) {
        let settings = store.load_settings();
        let script = store.load_script();
        let shortcuts = GlobalShortcuts::register(&config);
        let app = App::from_parts(config, store, settings, script, shortcuts);
        tracing::info!(
            font_size = app.settings.font_size,
            scroll_speed = app.settings.scroll_speed,
            script_lines = app.script.line_count(),
            global_shortcuts = app.shortcuts.is_some(),
            "Initialized app state"
        );
        (app, Task::none())
    }

    pub(super) fn from_parts(
        config: AppConfig,
        store: Store,
        mut settings: PrompterSettings,
        script: Script,
        shortcuts: Option<GlobalShortcuts>,
    ) -> App {
        settings.clamp();
        App {
            editor: text_editor::Content::with_text(script.text()),
            config,
            store,
            settings,
            script,
            controller: ModeController::new(),
            prompter: None,
            shortcuts,
        }
    }

    pub(super) fn mode(&self) -> AppMode {
        self.controller.mode()
    }

    /// Whether the frame subscription should be alive.
    pub(super) fn wants_frames(&self) -> bool {
        self.prompter
            .as_ref()
            .is_some_and(|prompter| prompter.engine.wants_frames())
    }

    /// Mount or unmount the prompter to match the controller, then derive the
    /// engine's run flag from the controller's playback state.
    pub(super) fn sync_prompter(&mut self) {
        let in_prompt = self.controller.mode() == AppMode::Prompt;
        match (in_prompt, self.prompter.is_some()) {
            (true, false) => {
                tracing::debug!("Mounted prompter");
                self.prompter = Some(PrompterState::new(Instant::now()));
            }
            (false, true) => {
                tracing::debug!("Unmounted prompter; scroll state released");
                self.prompter = None;
            }
            _ => {}
        }
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.engine.set_running(self.controller.is_playing());
        }
    }

    pub(super) fn persist_all(&self) {
        self.store.save_settings(&self.settings);
        self.store.save_script(&self.script);
    }
}

pub(crate) fn apply_component(mut color: HexColor, component: Component, value: f32) -> HexColor {
    let channel = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    match component {
        Component::R => color.r = channel,
        Component::G => color.g = channel,
        Component::B => color.b = channel,
    }
    color
}

pub(crate) fn component_value(color: HexColor, component: Component) -> f32 {
    let channel = match component {
        Component::R => color.r,
        Component::G => color.g,
        Component::B => color.b,
    };
    channel as f32 / 255.0
}
