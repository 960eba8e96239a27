use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    shortcuts: ShortcutsConfig,
    #[serde(default)]
    storage: StorageConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            log_level: tables.logging.log_level,
            window_width: tables.window.width,
            window_height: tables.window.height,
            always_on_top: tables.window.always_on_top,
            transparent: tables.window.transparent,
            data_dir: tables.storage.data_dir,
            key_toggle_play_pause: tables.shortcuts.key_toggle_play_pause,
            key_speed_up: tables.shortcuts.key_speed_up,
            key_speed_down: tables.shortcuts.key_speed_down,
            global_shortcuts_enabled: tables.shortcuts.global_shortcuts_enabled,
            global_toggle_play_pause: tables.shortcuts.global_toggle_play_pause,
            global_speed_up: tables.shortcuts.global_speed_up,
            global_speed_down: tables.shortcuts.global_speed_down,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default = "defaults::default_always_on_top")]
    always_on_top: bool,
    #[serde(default = "defaults::default_transparent")]
    transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            always_on_top: defaults::default_always_on_top(),
            transparent: defaults::default_transparent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ShortcutsConfig {
    #[serde(default = "defaults::default_key_toggle_play_pause")]
    key_toggle_play_pause: String,
    #[serde(default = "defaults::default_key_speed_up")]
    key_speed_up: String,
    #[serde(default = "defaults::default_key_speed_down")]
    key_speed_down: String,
    #[serde(default = "defaults::default_global_shortcuts_enabled")]
    global_shortcuts_enabled: bool,
    #[serde(default = "defaults::default_global_toggle_play_pause")]
    global_toggle_play_pause: String,
    #[serde(default = "defaults::default_global_speed_up")]
    global_speed_up: String,
    #[serde(default = "defaults::default_global_speed_down")]
    global_speed_down: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        ShortcutsConfig {
            key_toggle_play_pause: defaults::default_key_toggle_play_pause(),
            key_speed_up: defaults::default_key_speed_up(),
            key_speed_down: defaults::default_key_speed_down(),
            global_shortcuts_enabled: defaults::default_global_shortcuts_enabled(),
            global_toggle_play_pause: defaults::default_global_toggle_play_pause(),
            global_speed_up: defaults::default_global_speed_up(),
            global_speed_down: defaults::default_global_speed_down(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StorageConfig {
    #[serde(default = "defaults::default_data_dir")]
    data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            data_dir: defaults::default_data_dir(),
        }
    }
}
