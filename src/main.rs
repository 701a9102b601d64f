//! Mind Games entry point
//!
//! The real UI runs in the browser (see `web.rs`). Natively this plays a
//! short scripted session of each game and prints the resulting stats.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Mind Games (native) starting...");
    log::info!("The playable version is the wasm build - run with `trunk serve`");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);
    demo::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::Arcade, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use mind_games::platform::{Clock, ManualClock, MemoryStore, SystemClock};
    use mind_games::scores::ScoreStore;
    use mind_games::settings::Settings;
    use mind_games::sim::{ReactionPhase, ReactionTest, Tile, TileMemory, TilePhase, WordMemory, WordPhase};

    /// Frame length used to drive engine timers
    const FRAME_MS: f64 = 16.0;

    pub fn run(seed: u64) {
        let settings = Settings::load(&MemoryStore::new());
        let clock = ManualClock::new(0.0).with_epoch(SystemClock::new().epoch_ms());
        let mut scores = ScoreStore::load(Box::new(MemoryStore::new()), Box::new(clock.clone()));

        play_reaction(&settings, seed, &clock, &mut scores);
        play_words(&settings, seed, &mut scores);
        play_tiles(&settings, seed, &mut scores);

        println!("\nResults (seed {}):", seed);
        for report in scores.reports(clock.epoch_ms()) {
            let best = report
                .metrics
                .best_score
                .map(|s| format!("{} {}", s, report.unit))
                .unwrap_or_else(|| "N/A".to_string());
            let avg = report
                .metrics
                .average_score
                .map(|s| format!("{:.1} {}", s, report.unit))
                .unwrap_or_else(|| "N/A".to_string());
            println!("  {} - {}", report.name, report.description);
            println!(
                "    attempts: {:>2}  best: {:<10} average: {}",
                report.metrics.total_attempts, best, avg
            );
        }
    }

    /// Three rounds with a simulated player reacting in 180-300 ms
    fn play_reaction(settings: &Settings, seed: u64, clock: &ManualClock, scores: &mut ScoreStore) {
        let mut game = ReactionTest::new(settings.reaction.clone(), seed, Box::new(clock.clone()));
        for round in 0..3u32 {
            game.trigger(scores);
            while game.phase() == ReactionPhase::Waiting {
                clock.advance(FRAME_MS);
                game.tick(FRAME_MS);
            }
            clock.advance(180.0 + 60.0 * round as f64);
            game.trigger(scores);
            game.trigger(scores);
        }
    }

    /// Perfect recall for a while, then keep answering "new" until out of health
    fn play_words(settings: &Settings, seed: u64, scores: &mut ScoreStore) {
        let mut game = WordMemory::with_default_bank(settings.word_memory.clone(), seed);
        game.start_game();
        let mut answered = 0;
        while game.phase() == WordPhase::Playing {
            let claim = if answered < 25 { game.state().current_seen } else { false };
            game.answer(claim, scores);
            answered += 1;
        }
    }

    /// Clear a few levels, then click every non-target tile
    fn play_tiles(settings: &Settings, seed: u64, scores: &mut ScoreStore) {
        let mut game = TileMemory::new(settings.tile_memory.clone(), seed);
        game.start_game();
        while game.phase() != TilePhase::GameOver {
            match game.phase() {
                TilePhase::Recall if game.level() <= 4 => {
                    let targets = game.state().target_tiles.clone();
                    for tile in targets {
                        game.handle_tile_click(tile, scores);
                    }
                }
                TilePhase::Recall => {
                    let size = game.state().grid_size;
                    let miss = (0..size)
                        .flat_map(|r| (0..size).map(move |c| Tile::new(r, c)))
                        .find(|t| !game.state().is_target(*t) && !game.state().is_selected(*t));
                    match miss {
                        Some(tile) => {
                            game.handle_tile_click(tile, scores);
                        }
                        None => break,
                    }
                }
                _ => {
                    game.tick(FRAME_MS);
                }
            }
        }
    }
}
