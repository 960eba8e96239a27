//! Local persistence for the script and the display settings.
//!
//! Two keys live under the data directory (`.cache/` by default):
//! `script.txt` holds the raw script and `settings.toml` holds the
//! `PrompterSettings` record. Reads never fail from the caller's point of
//! view: a missing or corrupt value yields the defaults. Write errors are
//! logged and otherwise ignored to keep the UI responsive.

use crate::script::Script;
use crate::settings::PrompterSettings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SCRIPT_FILE: &str = "script.txt";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn script_path(&self) -> PathBuf {
        self.root.join(SCRIPT_FILE)
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Load the saved script, or the welcome script if nothing was saved.
    pub fn load_script(&self) -> Script {
        let path = self.script_path();
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "Loaded saved script");
                Script::new(text)
            }
            Err(err) => {
                debug!(path = %path.display(), "No saved script: {err}");
                Script::default()
            }
        }
    }

    pub fn save_script(&self, script: &Script) {
        if let Err(err) = self.write(&self.script_path(), script.text()) {
            warn!("Failed to persist script: {err:#}");
        }
    }

    /// Load saved settings merged over the defaults.
    pub fn load_settings(&self) -> PrompterSettings {
        match self.read_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => PrompterSettings::default(),
            Err(err) => {
                warn!("Falling back to default settings: {err:#}");
                PrompterSettings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &PrompterSettings) {
        let result = toml::to_string(settings)
            .context("serializing settings")
            .and_then(|contents| self.write(&self.settings_path(), &contents));
        if let Err(err) = result {
            warn!("Failed to persist settings: {err:#}");
        }
    }

    fn read_settings(&self) -> Result<Option<PrompterSettings>> {
        let path = self.settings_path();
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        let mut settings: PrompterSettings =
            toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
        settings.clamp();
        debug!(path = %path.display(), "Loaded saved settings");
        Ok(Some(settings))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;
        fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::HexColor;

    fn test_store(name: &str) -> Store {
        let root = std::env::temp_dir().join(format!(
            "teleprompter-store-test-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        Store::new(root)
    }

    #[test]
    fn settings_round_trip_across_instances() {
        let store = test_store("round-trip");
        let settings = PrompterSettings {
            font_size: 72,
            text_color: HexColor {
                r: 0x12,
                g: 0xab,
                b: 0xef,
            },
            background_color: HexColor {
                r: 0x20,
                g: 0x20,
                b: 0x20,
            },
            background_opacity: 35,
            scroll_speed: 64,
            text_margin: 45,
            show_reading_guide: false,
        };
        store.save_settings(&settings);

        let reopened = Store::new(store.root().to_path_buf());
        assert_eq!(reopened.load_settings(), settings);
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn older_records_take_defaults_and_ignore_unknown_fields() {
        let store = test_store("older-record");
        fs::create_dir_all(store.root()).expect("create store root");
        fs::write(
            store.root().join(SETTINGS_FILE),
            "font_size = 30\ntext_color = \"#00ff00\"\nbackground_opacity = 10\nscroll_speed = 7\nlegacy_theme = \"night\"\n",
        )
        .expect("write older record");

        let loaded = store.load_settings();
        let defaults = PrompterSettings::default();
        assert_eq!(loaded.font_size, 30);
        assert_eq!(loaded.scroll_speed, 7);
        assert_eq!(loaded.background_opacity, 10);
        assert_eq!(loaded.text_color, HexColor { r: 0, g: 0xff, b: 0 });
        assert_eq!(loaded.background_color, defaults.background_color);
        assert_eq!(loaded.text_margin, defaults.text_margin);
        assert_eq!(loaded.show_reading_guide, defaults.show_reading_guide);
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn corrupt_or_missing_values_fall_back_to_defaults() {
        let store = test_store("corrupt");
        assert_eq!(store.load_settings(), PrompterSettings::default());
        assert_eq!(store.load_script(), Script::default());

        fs::create_dir_all(store.root()).expect("create store root");
        fs::write(store.root().join(SETTINGS_FILE), "font_size = \"huge\"")
            .expect("write corrupt record");
        assert_eq!(store.load_settings(), PrompterSettings::default());
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_load() {
        let store = test_store("clamp");
        fs::create_dir_all(store.root()).expect("create store root");
        fs::write(
            store.root().join(SETTINGS_FILE),
            "scroll_speed = 900\ntext_margin = 5\n",
        )
        .expect("write record");
        let loaded = store.load_settings();
        assert_eq!(loaded.scroll_speed, 100);
        assert_eq!(loaded.text_margin, 30);
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn script_round_trip_keeps_line_breaks() {
        let store = test_store("script");
        store.save_script(&Script::new("Hello\nWorld\n\nLast line"));
        let reopened = Store::new(store.root().to_path_buf());
        assert_eq!(reopened.load_script().text(), "Hello\nWorld\n\nLast line");

        store.save_script(&Script::new(""));
        assert_eq!(reopened.load_script().text(), "");
        let _ = fs::remove_dir_all(store.root());
    }
}
