//! System-wide shortcuts that reach the prompter regardless of window focus.
//!
//! Registration happens once at startup. Pressed events are drained by the
//! app's poll tick and mapped to mode-controller triggers.

use crate::config::AppConfig;
use crate::mode::Trigger;
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tracing::{info, warn};

pub struct GlobalShortcuts {
    _manager: GlobalHotKeyManager,
    bindings: Vec<(u32, Trigger)>,
}

impl GlobalShortcuts {
    /// Register the configured global shortcuts. Returns `None` when global
    /// shortcuts are disabled or the platform refuses them; the app keeps
    /// working with local keys only.
    pub fn register(config: &AppConfig) -> Option<Self> {
        if !config.global_shortcuts_enabled {
            info!("Global shortcuts disabled by config");
            return None;
        }
        let manager = match GlobalHotKeyManager::new() {
            Ok(manager) => manager,
            Err(err) => {
                warn!("Failed to create global hotkey manager: {err}");
                return None;
            }
        };

        let requested = [
            (config.global_toggle_play_pause.as_str(), Trigger::TogglePlayPause),
            (config.global_speed_up.as_str(), Trigger::SpeedUp),
            (config.global_speed_down.as_str(), Trigger::SpeedDown),
        ];
        let mut bindings = Vec::with_capacity(requested.len());
        for (raw, trigger) in requested {
            let hotkey: HotKey = match raw.parse() {
                Ok(hotkey) => hotkey,
                Err(err) => {
                    warn!(shortcut = raw, ?trigger, "Ignoring unparsable global shortcut: {err}");
                    continue;
                }
            };
            if let Err(err) = manager.register(hotkey) {
                warn!(shortcut = raw, ?trigger, "Failed to register global shortcut: {err}");
                continue;
            }
            info!(shortcut = raw, ?trigger, id = hotkey.id(), "Registered global shortcut");
            bindings.push((hotkey.id(), trigger));
        }

        Some(GlobalShortcuts {
            _manager: manager,
            bindings,
        })
    }

    /// Drain pending hotkey events into triggers, oldest first.
    pub fn poll(&self) -> Vec<Trigger> {
        GlobalHotKeyEvent::receiver()
            .try_iter()
            .filter(|event| event.state == HotKeyState::Pressed)
            .filter_map(|event| self.trigger_for(event.id))
            .collect()
    }

    fn trigger_for(&self, id: u32) -> Option<Trigger> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == id)
            .map(|(_, trigger)| *trigger)
    }
}
