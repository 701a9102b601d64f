//! Browser facade
//!
//! The JS UI owns rendering and input. It holds one [`Arcade`], forwards
//! clicks/keypresses to it, calls [`Arcade::tick`] from its
//! `requestAnimationFrame` loop and re-renders from the JSON snapshots.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::games::GameKind;
use crate::platform::{BrowserClock, KeyValueStore, LocalStorage, MemoryStore};
use crate::scores::ScoreStore;
use crate::settings::Settings;
use crate::sim::{ReactionTest, Tile, TileMemory, WordMemory};

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("Snapshot serialization failed: {}", e);
        "null".to_string()
    })
}

fn open_storage() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}; scores will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn fresh_seed() -> u64 {
    let time = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    time.wrapping_mul(2654435761) ^ (noise << 32) ^ noise
}

/// All three games plus the shared score log
#[wasm_bindgen]
pub struct Arcade {
    scores: ScoreStore,
    reaction: ReactionTest,
    words: WordMemory,
    tiles: TileMemory,
}

#[wasm_bindgen]
impl Arcade {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Arcade {
        console_error_panic_hook::set_once();
        // Already initialised when a second Arcade is created
        let _ = console_log::init_with_level(log::Level::Info);

        let settings = Settings::load(open_storage().as_ref());
        let seed = fresh_seed();
        log::info!("Mind Games starting with seed: {}", seed);

        Arcade {
            scores: ScoreStore::load(open_storage(), Box::new(BrowserClock)),
            reaction: ReactionTest::new(settings.reaction.clone(), seed, Box::new(BrowserClock)),
            words: WordMemory::with_default_bank(settings.word_memory.clone(), seed.wrapping_add(1)),
            tiles: TileMemory::new(settings.tile_memory.clone(), seed.wrapping_add(2)),
        }
    }

    /// Advance every engine's timers by the frame delta
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let dt = dt_ms.clamp(0.0, 1000.0);
        let reaction = self.reaction.tick(dt);
        let tiles = self.tiles.tick(dt);
        reaction || tiles
    }

    // === Reaction test ===

    pub fn reaction_trigger(&mut self) -> String {
        to_json(&self.reaction.trigger(&mut self.scores))
    }

    pub fn reaction_reset(&mut self) {
        self.reaction.reset();
    }

    pub fn reaction_state(&self) -> String {
        to_json(self.reaction.state())
    }

    // === Word memory ===

    pub fn word_start(&mut self) {
        self.words.start_game();
    }

    pub fn word_answer(&mut self, claims_seen: bool) -> String {
        to_json(&self.words.answer(claims_seen, &mut self.scores))
    }

    pub fn word_reset(&mut self) {
        self.words.reset_game();
    }

    pub fn word_try_again(&mut self) -> bool {
        self.words.try_again()
    }

    pub fn word_state(&self) -> String {
        to_json(&serde_json::json!({
            "state": self.words.state(),
            "word": self.words.current_word(),
        }))
    }

    // === Tile memory ===

    pub fn tile_start(&mut self) {
        self.tiles.start_game();
    }

    pub fn tile_click(&mut self, row: u32, col: u32) -> String {
        to_json(&self.tiles.handle_tile_click(Tile::new(row, col), &mut self.scores))
    }

    pub fn tile_reset(&mut self) {
        self.tiles.reset_game();
    }

    pub fn tile_state(&self) -> String {
        to_json(self.tiles.state())
    }

    // === Stats ===

    pub fn stats(&self) -> String {
        to_json(&self.scores.reports(js_sys::Date::now() as u64))
    }

    /// Stats card for one game id, `null` for an unknown id
    pub fn game_stats(&self, game_id: &str) -> String {
        let now = js_sys::Date::now() as u64;
        to_json(&GameKind::from_id(game_id).map(|game| self.scores.report(game, now)))
    }

    pub fn clear_scores(&mut self) {
        self.scores.clear_scores();
    }
}

impl Default for Arcade {
    fn default() -> Self {
        Self::new()
    }
}
