//! Configuration module
//!
//! Values are looked up through `prefer` and resolved once into
//! [`Settings`]; hosts without a config directory can embed TOML instead.

mod settings;

pub use settings::{DEFAULT_PROMPT, DEFAULT_ROOT, KeyboardSettings, Settings};

use prefer::Config as PreferConfig;

pub struct Config {
    inner: PreferConfig,
}

impl Config {
    pub async fn load() -> prefer::Result<Self> {
        let inner = prefer::load("pstnav/config").await?;
        Ok(Self { inner })
    }

    async fn get_bool(&self, key: &str) -> Option<bool> {
        self.inner
            .get(key)
            .await
            .ok()
            .and_then(|v: prefer::ConfigValue| v.as_bool())
    }

    async fn get_i64(&self, key: &str) -> Option<i64> {
        self.inner
            .get(key)
            .await
            .ok()
            .and_then(|v: prefer::ConfigValue| v.as_i64())
    }

    async fn get_str(&self, key: &str) -> Option<String> {
        self.inner
            .get(key)
            .await
            .ok()
            .and_then(|v: prefer::ConfigValue| v.as_str().map(|s| s.to_string()))
    }

    pub async fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root) = self.get_str("root").await {
            settings.set_root(&root);
        }
        if let Some(v) = self.get_bool("show_hidden").await {
            settings.show_hidden = v;
        }
        if let Some(v) = self.get_i64("max_entries").await {
            settings.set_max_entries(v);
        }
        if let Some(v) = self.get_i64("lock_timeout_ms").await {
            settings.set_lock_timeout_ms(v);
        }
        self.load_keyboard(&mut settings).await;

        settings
    }

    async fn load_keyboard(&self, settings: &mut Settings) {
        if let Some(v) = self.get_i64("keyboard.max_length").await {
            settings.set_max_length(v);
        }
        if let Some(v) = self.get_str("keyboard.prompt").await {
            settings.keyboard.prompt = v;
        }
        if let Some(v) = self.get_bool("keyboard.seed_with_filter").await {
            settings.keyboard.seed_with_filter = v;
        }
    }
}
