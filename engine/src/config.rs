//! Admin settings store.

use payra_types::{ConfigError, Settings, SettingsPatch};
use tracing::{info, warn};

use crate::store::KeyValue;

/// Key under which the settings blob lives in its namespace.
pub const SETTINGS_KEY: &str = "admin_settings";

/// Fixed panel credential. A cosmetic gate with no real secret behind it;
/// not security-grade and not intended to be.
const ADMIN_PASSWORD: &str = "admin123";

/// Owns the settings namespace. Sole writer of [`Settings`].
#[derive(Debug)]
pub struct ConfigStore<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> ConfigStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Effective settings: hard-coded defaults overlaid with whatever
    /// persisted partial blob exists. Malformed blobs fall back to pure
    /// defaults without failing.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(blob) = self.store.get(SETTINGS_KEY) {
            match serde_json::from_str::<SettingsPatch>(&blob) {
                Ok(patch) => settings.apply(patch),
                Err(err) => {
                    warn!(%err, "malformed persisted settings, falling back to defaults");
                }
            }
        }
        settings
    }

    /// Overlay `patch` on the current effective settings, validate, and
    /// persist the full result. An invalid patch leaves the persisted blob
    /// untouched.
    pub fn update(&mut self, patch: SettingsPatch) -> Result<Settings, ConfigError> {
        let mut updated = self.settings();
        updated.apply(patch);
        updated.validate()?;
        let blob = serde_json::to_string(&updated).expect("settings serialization is infallible");
        self.store.set(SETTINGS_KEY, &blob);
        info!("admin settings updated");
        Ok(updated)
    }

    /// Drop all overrides, restoring hard-coded defaults.
    pub fn reset(&mut self) {
        self.store.remove(SETTINGS_KEY);
    }

    pub fn verify_admin(&self, password: &str) -> bool {
        password == ADMIN_PASSWORD
    }
}
