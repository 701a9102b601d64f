//! Tile memory game
//!
//! A few cells of a square grid light up for a moment; the player then has
//! to pick them out again. Each cleared level adds a target and the grid
//! grows roughly every other level. Wrong picks cost health.

use rand::SeedableRng;
use rand::seq::index;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::timer::OneShot;
use crate::games::GameKind;
use crate::scores::{Metadata, ScoreStore};
use crate::settings::TileMemorySettings;

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub row: u32,
    pub col: u32,
}

impl Tile {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TilePhase {
    Ready,
    /// Targets visible
    Memorize,
    /// Player picking tiles
    Recall,
    /// Short input pause after a wrong pick
    Feedback,
    /// All targets found, next level pending
    LevelComplete,
    GameOver,
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    Hit,
    Miss,
    LevelComplete,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileTimer {
    EndMemorize,
    EndFeedback,
    NextLevel,
}

/// Grid side length for a level, capped at `max_size`
///
/// `floor((sqrt(8 * level + 1) - 1) / 2) + 2`: 3, 3, 4, 4, 4, 5, ...
pub fn grid_size_for_level(level: u32, max_size: u32) -> u32 {
    let root = (8 * u64::from(level) + 1).isqrt();
    let size = ((root - 1) / 2) as u32 + 2;
    size.min(max_size)
}

/// `count` distinct cells of a `size x size` grid, uniformly without replacement
pub fn generate_targets(rng: &mut Pcg32, size: u32, count: u32) -> Vec<Tile> {
    let side = size as usize;
    let cells = side.saturating_mul(side);
    index::sample(rng, cells, (count as usize).min(cells))
        .into_iter()
        .map(|i| Tile::new((i / side) as u32, (i % side) as u32))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMemoryState {
    pub phase: TilePhase,
    pub level: u32,
    pub grid_size: u32,
    pub target_count: u32,
    pub health: u8,
    pub target_tiles: Vec<Tile>,
    /// Picks in click order
    pub selected_tiles: Vec<Tile>,
}

impl TileMemoryState {
    fn fresh(settings: &TileMemorySettings) -> Self {
        Self {
            phase: TilePhase::Ready,
            level: 1,
            grid_size: settings.initial_grid_size,
            target_count: settings.initial_target_count,
            health: settings.starting_health,
            target_tiles: Vec::new(),
            selected_tiles: Vec::new(),
        }
    }

    pub fn is_target(&self, tile: Tile) -> bool {
        self.target_tiles.contains(&tile)
    }

    pub fn is_selected(&self, tile: Tile) -> bool {
        self.selected_tiles.contains(&tile)
    }

    /// Targets the player has already picked
    pub fn found_count(&self) -> usize {
        self.selected_tiles
            .iter()
            .filter(|t| self.target_tiles.contains(*t))
            .count()
    }
}

pub struct TileMemory {
    state: TileMemoryState,
    settings: TileMemorySettings,
    rng: Pcg32,
    timer: OneShot<TileTimer>,
}

impl TileMemory {
    pub fn new(settings: TileMemorySettings, seed: u64) -> Self {
        Self {
            state: TileMemoryState::fresh(&settings),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            timer: OneShot::new(),
        }
    }

    pub fn state(&self) -> &TileMemoryState {
        &self.state
    }

    pub fn phase(&self) -> TilePhase {
        self.state.phase
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn health(&self) -> u8 {
        self.state.health
    }

    /// Time left on whichever phase timer is running
    pub fn pending_timer_ms(&self) -> Option<f64> {
        self.timer.remaining_ms()
    }

    /// Start over from level 1
    pub fn start_game(&mut self) {
        self.timer.cancel();
        self.state = TileMemoryState::fresh(&self.settings);
        log::debug!("Tile memory started");
        self.start_level(self.settings.initial_grid_size, self.settings.initial_target_count);
    }

    /// Lay out fresh targets and show them
    pub fn start_level(&mut self, size: u32, count: u32) {
        let count = count.min(size.saturating_mul(size));
        self.state.grid_size = size;
        self.state.target_count = count;
        self.state.target_tiles = generate_targets(&mut self.rng, size, count);
        self.state.selected_tiles.clear();
        self.set_phase(TilePhase::Memorize);
        self.timer
            .schedule(self.settings.memorize_ms as f64, TileTimer::EndMemorize);
    }

    /// Player picks a tile. `None` means the click was ignored.
    pub fn handle_tile_click(&mut self, tile: Tile, scores: &mut ScoreStore) -> Option<ClickOutcome> {
        if self.state.phase != TilePhase::Recall {
            return None;
        }
        if tile.row >= self.state.grid_size || tile.col >= self.state.grid_size {
            return None;
        }
        if self.state.is_selected(tile) {
            return None;
        }

        self.state.selected_tiles.push(tile);

        if !self.state.is_target(tile) {
            if self.state.health <= 1 {
                self.state.health = 0;
                self.end_game(scores);
                return Some(ClickOutcome::GameOver);
            }
            self.state.health -= 1;
            if self.settings.feedback_ms > 0 {
                self.set_phase(TilePhase::Feedback);
                self.timer
                    .schedule(self.settings.feedback_ms as f64, TileTimer::EndFeedback);
            }
            return Some(ClickOutcome::Miss);
        }

        if self.state.found_count() == self.state.target_tiles.len() {
            log::info!("Tile memory level {} cleared", self.state.level);
            self.set_phase(TilePhase::LevelComplete);
            self.timer
                .schedule(self.settings.level_complete_ms as f64, TileTimer::NextLevel);
            return Some(ClickOutcome::LevelComplete);
        }

        Some(ClickOutcome::Hit)
    }

    /// Advance phase timers. Returns true if the phase changed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let Some(event) = self.timer.advance(dt_ms) else {
            return false;
        };

        match (event, self.state.phase) {
            (TileTimer::EndMemorize, TilePhase::Memorize)
            | (TileTimer::EndFeedback, TilePhase::Feedback) => {
                self.set_phase(TilePhase::Recall);
                true
            }
            (TileTimer::NextLevel, TilePhase::LevelComplete) => {
                self.advance_level();
                true
            }
            (event, phase) => {
                log::warn!("Dropping stale {:?} timer in {:?}", event, phase);
                false
            }
        }
    }

    /// Abandon the game and go back to Ready
    pub fn reset_game(&mut self) {
        self.timer.cancel();
        self.state = TileMemoryState::fresh(&self.settings);
    }

    fn advance_level(&mut self) {
        self.state.level += 1;
        let size = grid_size_for_level(self.state.level, self.settings.max_grid_size)
            .max(self.settings.initial_grid_size);
        let count = self.state.target_count + 1;
        log::debug!("Tile memory level {}: {}x{}, {} targets", self.state.level, size, size, count);
        self.start_level(size, count);
    }

    fn end_game(&mut self, scores: &mut ScoreStore) {
        self.timer.cancel();
        self.set_phase(TilePhase::GameOver);
        let reached = self.state.level - 1;
        log::info!("Tile memory over at level {}", self.state.level);

        let mut metadata = Metadata::new();
        metadata.insert("gridSize".into(), self.state.grid_size.into());
        metadata.insert("targetCount".into(), self.state.target_count.into());
        scores.record(GameKind::TileMemory, reached as f64, Some(metadata));
    }

    fn set_phase(&mut self, phase: TilePhase) {
        log::debug!("Tile memory: {:?} -> {:?}", self.state.phase, phase);
        self.state.phase = phase;
    }
}
