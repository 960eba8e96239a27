pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_window_width() -> f32 {
    600.0
}

pub(crate) fn default_window_height() -> f32 {
    150.0
}

pub(crate) fn default_always_on_top() -> bool {
    true
}

pub(crate) fn default_transparent() -> bool {
    true
}

pub(crate) fn default_data_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_speed_up() -> String {
    "arrowup".to_string()
}

pub(crate) fn default_key_speed_down() -> String {
    "arrowdown".to_string()
}

pub(crate) fn default_global_shortcuts_enabled() -> bool {
    true
}

pub(crate) fn default_global_toggle_play_pause() -> String {
    "alt+space".to_string()
}

pub(crate) fn default_global_speed_up() -> String {
    "alt+up".to_string()
}

pub(crate) fn default_global_speed_down() -> String {
    "alt+down".to_string()
}
