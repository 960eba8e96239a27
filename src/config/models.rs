use serde::Deserialize;
use std::path::PathBuf;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MAX_WINDOW_WIDTH: f32 = 7680.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 100.0;
pub(crate) const MAX_WINDOW_HEIGHT: f32 = 4320.0;

/// Flattened process configuration built from the sectioned TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub window_width: f32,
    pub window_height: f32,
    pub always_on_top: bool,
    pub transparent: bool,
    pub data_dir: String,
    pub key_toggle_play_pause: String,
    pub key_speed_up: String,
    pub key_speed_down: String,
    pub global_shortcuts_enabled: bool,
    pub global_toggle_play_pause: String,
    pub global_speed_up: String,
    pub global_speed_down: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: crate::config::defaults::default_log_level(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            always_on_top: crate::config::defaults::default_always_on_top(),
            transparent: crate::config::defaults::default_transparent(),
            data_dir: crate::config::defaults::default_data_dir(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_speed_up: crate::config::defaults::default_key_speed_up(),
            key_speed_down: crate::config::defaults::default_key_speed_down(),
            global_shortcuts_enabled: crate::config::defaults::default_global_shortcuts_enabled(),
            global_toggle_play_pause: crate::config::defaults::default_global_toggle_play_pause(),
            global_speed_up: crate::config::defaults::default_global_speed_up(),
            global_speed_down: crate::config::defaults::default_global_speed_down(),
        }
    }
}

impl AppConfig {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Bring loaded values back into supported ranges and normalize key names.
    pub(crate) fn normalize(&mut self) {
        fn normalize_key_binding(value: &mut String, fallback: String) {
            let normalized = value.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                *value = fallback;
            } else {
                *value = normalized;
            }
        }

        use crate::config::defaults;

        self.window_width = if self.window_width.is_finite() {
            self.window_width.clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH)
        } else {
            defaults::default_window_width()
        };
        self.window_height = if self.window_height.is_finite() {
            self.window_height.clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_HEIGHT)
        } else {
            defaults::default_window_height()
        };
        if self.data_dir.trim().is_empty() {
            self.data_dir = defaults::default_data_dir();
        }
        normalize_key_binding(
            &mut self.key_toggle_play_pause,
            defaults::default_key_toggle_play_pause(),
        );
        normalize_key_binding(&mut self.key_speed_up, defaults::default_key_speed_up());
        normalize_key_binding(&mut self.key_speed_down, defaults::default_key_speed_down());
        normalize_key_binding(
            &mut self.global_toggle_play_pause,
            defaults::default_global_toggle_play_pause(),
        );
        normalize_key_binding(
            &mut self.global_speed_up,
            defaults::default_global_speed_up(),
        );
        normalize_key_binding(
            &mut self.global_speed_down,
            defaults::default_global_speed_down(),
        );
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
