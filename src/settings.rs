//! Game settings and preferences
//!
//! Persisted separately from the score ledger in the key-value store.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Audio preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Background music on/off; off until the player opts in
    pub music_enabled: bool,
    /// One-shot sound effects on/off
    pub sound_effects_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: false,
            sound_effects_enabled: true,
        }
    }
}

impl Settings {
    /// Storage key in the key-value store
    pub const STORAGE_KEY: &'static str = "settings";

    pub fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
        log::debug!("music {}", if self.music_enabled { "on" } else { "off" });
    }

    pub fn toggle_sound_effects(&mut self) {
        self.sound_effects_enabled = !self.sound_effects_enabled;
        log::debug!(
            "sound effects {}",
            if self.sound_effects_enabled { "on" } else { "off" }
        );
    }

    /// Load from the store; missing or unreadable values fall back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(raw) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&raw) {
                Ok(settings) => {
                    log::info!("loaded settings");
                    return settings;
                }
                Err(err) => log::warn!("stored settings unreadable ({err}), using defaults"),
            }
        }
        Self::default()
    }

    /// Persist the current preferences
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(raw) => {
                store.put(Self::STORAGE_KEY, &raw);
                log::debug!("settings saved");
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn save_load_round_trip() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::default();
        settings.toggle_music();
        settings.save(&mut store);

        let loaded = Settings::load(&store);
        assert!(loaded.music_enabled);
        assert!(loaded.sound_effects_enabled);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.put(Settings::STORAGE_KEY, "{not json");
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
