//! Game tuning and preferences
//!
//! Persisted separately from the score log, under its own key.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;

/// Reaction test timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionSettings {
    /// Shortest wait before the stimulus appears
    pub min_delay_ms: u32,
    /// Random extra wait, drawn uniformly from `[0, delay_spread_ms)`
    pub delay_spread_ms: u32,
}

impl Default for ReactionSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: 900,
            delay_spread_ms: 4000,
        }
    }
}

/// Word memory tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordMemorySettings {
    /// Chance of deliberately re-showing a seen word
    pub reshow_probability: f64,
    pub starting_health: u8,
}

impl Default for WordMemorySettings {
    fn default() -> Self {
        Self {
            reshow_probability: 0.1,
            starting_health: 3,
        }
    }
}

/// Tile memory tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileMemorySettings {
    pub initial_grid_size: u32,
    pub initial_target_count: u32,
    /// How long targets stay highlighted
    pub memorize_ms: u32,
    /// Pause between a cleared level and the next one
    pub level_complete_ms: u32,
    /// Input pause after a wrong tile (0 = none)
    pub feedback_ms: u32,
    pub starting_health: u8,
    pub max_grid_size: u32,
}

impl Default for TileMemorySettings {
    fn default() -> Self {
        Self {
            initial_grid_size: 3,
            initial_target_count: 3,
            memorize_ms: 2000,
            level_complete_ms: 1000,
            feedback_ms: 0,
            starting_health: 3,
            max_grid_size: 12,
        }
    }
}

/// Smallest and largest grid the tile game will draw
pub const MIN_GRID_SIZE: u32 = 3;
pub const MAX_GRID_SIZE: u32 = 12;

/// All tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reaction: ReactionSettings,
    pub word_memory: WordMemorySettings,
    pub tile_memory: TileMemorySettings,
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "mind_games_settings";

    /// Clamp everything into playable ranges
    pub fn sanitized(mut self) -> Self {
        self.reaction.delay_spread_ms = self.reaction.delay_spread_ms.max(1);

        let word = &mut self.word_memory;
        if !word.reshow_probability.is_finite() {
            word.reshow_probability = WordMemorySettings::default().reshow_probability;
        }
        word.reshow_probability = word.reshow_probability.clamp(0.0, 1.0);
        word.starting_health = word.starting_health.max(1);

        let tile = &mut self.tile_memory;
        tile.max_grid_size = tile.max_grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        tile.initial_grid_size = tile.initial_grid_size.clamp(MIN_GRID_SIZE, tile.max_grid_size);
        let cells = tile.initial_grid_size * tile.initial_grid_size;
        tile.initial_target_count = tile.initial_target_count.clamp(1, cells);
        tile.starting_health = tile.starting_health.max(1);

        self
    }

    /// Load settings from `store`, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to `store` (best effort)
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {}", e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
