//! Application configuration.
//!
//! Process-level settings (logging, window, shortcuts, storage location) are
//! loaded from `conf/config.toml` if present. Any missing or invalid entries
//! fall back to defaults so the prompter can still launch. Display
//! preferences the user edits at runtime live in `crate::settings` instead.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, LogLevel};
