//! Resolved settings

use std::time::Duration;

use crate::error::Result;

pub const DEFAULT_ROOT: &str = "/sd";
pub const DEFAULT_PROMPT: &str = "Search...";

/// Keyboard session settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardSettings {
    /// Buffer capacity in characters
    pub max_length: usize,
    pub prompt: String,
    /// Pre-fill the search keyboard with the active filter
    pub seed_with_filter: bool,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            max_length: 255,
            prompt: DEFAULT_PROMPT.to_string(),
            seed_with_filter: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub root: String,
    pub show_hidden: bool,
    /// Most entries listed per refresh; the rest are omitted
    pub max_entries: usize,
    pub lock_timeout: Duration,
    pub keyboard: KeyboardSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            show_hidden: true,
            max_entries: 100,
            lock_timeout: Duration::from_millis(100),
            keyboard: KeyboardSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from an embedded TOML document. Unknown keys and
    /// values of the wrong type fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::Table = source.parse()?;
        let mut settings = Self::default();

        if let Some(root) = table.get("root").and_then(|v| v.as_str()) {
            settings.set_root(root);
        }
        if let Some(v) = table.get("show_hidden").and_then(|v| v.as_bool()) {
            settings.show_hidden = v;
        }
        if let Some(v) = table.get("max_entries").and_then(|v| v.as_integer()) {
            settings.set_max_entries(v);
        }
        if let Some(v) = table.get("lock_timeout_ms").and_then(|v| v.as_integer()) {
            settings.set_lock_timeout_ms(v);
        }

        if let Some(keyboard) = table.get("keyboard").and_then(|v| v.as_table()) {
            if let Some(v) = keyboard.get("max_length").and_then(|v| v.as_integer()) {
                settings.set_max_length(v);
            }
            if let Some(v) = keyboard.get("prompt").and_then(|v| v.as_str()) {
                settings.keyboard.prompt = v.to_string();
            }
            if let Some(v) = keyboard.get("seed_with_filter").and_then(|v| v.as_bool()) {
                settings.keyboard.seed_with_filter = v;
            }
        }

        Ok(settings)
    }

    pub(super) fn set_root(&mut self, root: &str) {
        if !root.trim().is_empty() {
            self.root = root.to_string();
        }
    }

    pub(super) fn set_max_entries(&mut self, value: i64) {
        if let Ok(n) = usize::try_from(value)
            && n > 0
        {
            self.max_entries = n;
        }
    }

    pub(super) fn set_lock_timeout_ms(&mut self, value: i64) {
        if let Ok(ms) = u64::try_from(value) {
            self.lock_timeout = Duration::from_millis(ms);
        }
    }

    pub(super) fn set_max_length(&mut self, value: i64) {
        if let Ok(n) = usize::try_from(value)
            && n > 0
        {
            self.keyboard.max_length = n;
        }
    }
}
