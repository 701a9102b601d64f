//! Property-based tests for the game engines and score log.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use mind_games::platform::{ManualClock, MemoryStore};
use mind_games::scores::ScoreStore;
use mind_games::settings::{TileMemorySettings, WordMemorySettings};
use mind_games::sim::{
    RandSet, TileMemory, TilePhase, WordMemory, WordPhase, generate_targets, grid_size_for_level,
    pick_word,
};

fn empty_scores() -> ScoreStore {
    ScoreStore::load(Box::new(MemoryStore::new()), Box::new(ManualClock::new(0.0)))
}

proptest! {
    // 1. RandSet size counts distinct inserts, membership matches, samples are members
    #[test]
    fn rand_set_tracks_distinct(indices in prop::collection::vec(0..50usize, 0..200), seed in any::<u64>()) {
        let mut set = RandSet::new();
        for &i in &indices {
            set.add(i);
        }
        let distinct: HashSet<usize> = indices.iter().copied().collect();
        prop_assert_eq!(set.size(), distinct.len());
        for i in 0..50 {
            prop_assert_eq!(set.has(i), distinct.contains(&i));
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        match set.get_random(&mut rng) {
            Some(v) => prop_assert!(set.has(v)),
            None => prop_assert!(distinct.is_empty()),
        }

        let values: HashSet<usize> = set.values().into_iter().collect();
        prop_assert_eq!(values.len(), set.size());
        prop_assert_eq!(values, distinct);
    }

    // 2. Best and average agree with a direct min/max/mean
    #[test]
    fn score_aggregation(values in prop::collection::vec(0u32..10_000, 1..40)) {
        let mut scores = empty_scores();
        for &v in &values {
            scores.add_score("reaction-test", v as f64, None);
            scores.add_score("other", 1.0, None);
        }
        let min = *values.iter().min().unwrap() as f64;
        let max = *values.iter().max().unwrap() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;

        prop_assert_eq!(scores.best_score("reaction-test", true).unwrap().score, min);
        prop_assert_eq!(scores.best_score("reaction-test", false).unwrap().score, max);
        let avg = scores.average_score("reaction-test").unwrap();
        prop_assert!((avg - mean).abs() < 1e-9);
        prop_assert!(scores.best_score("missing", true).is_none());
        prop_assert!(scores.average_score("missing").is_none());
    }

    // 3. Word memory: health stays in [0, 3], score never decreases
    #[test]
    fn word_memory_health_and_score(seed in any::<u64>(), answers in prop::collection::vec(any::<bool>(), 1..80)) {
        let mut game = WordMemory::with_default_bank(WordMemorySettings::default(), seed);
        let mut scores = empty_scores();
        game.start_game();

        let mut last_score = 0;
        for claim in answers {
            let was_playing = game.phase() == WordPhase::Playing;
            let correct = claim == game.state().current_seen;
            game.answer(claim, &mut scores);

            prop_assert!(game.health() <= 3);
            prop_assert!(game.score() >= last_score);
            if was_playing && correct {
                prop_assert_eq!(game.score(), last_score + 1);
            }
            prop_assert_eq!(game.phase() == WordPhase::GameOver, game.health() == 0);
            last_score = game.score();
        }
    }

    // 4. Picks never repeat the previous word and the seen flag is accurate
    #[test]
    fn word_pick_flags(seed in any::<u64>(), bank_len in 2usize..30, rounds in 1usize..100) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut seen = RandSet::new();
        let mut shown = HashSet::new();
        let mut previous = 0;
        for _ in 0..rounds {
            let pick = pick_word(&mut rng, bank_len, previous, &mut seen, 0.1);
            prop_assert!(pick.index < bank_len);
            prop_assert_ne!(pick.index, previous);
            prop_assert_eq!(pick.seen, shown.contains(&pick.index));
            shown.insert(pick.index);
            previous = pick.index;
        }
    }

    // 5. Grid size is monotone in level and stays within [3, 12]
    #[test]
    fn grid_size_bounded(level in 1u32..500) {
        let size = grid_size_for_level(level, 12);
        prop_assert!((3..=12).contains(&size));
        prop_assert!(grid_size_for_level(level + 1, 12) >= size);
    }

    // 6. Targets are distinct cells inside the grid
    #[test]
    fn targets_distinct(seed in any::<u64>(), size in 3u32..=12, count in 1u32..20) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let count = count.min(size * size);
        let targets = generate_targets(&mut rng, size, count);
        let unique: HashSet<_> = targets.iter().copied().collect();
        prop_assert_eq!(targets.len(), count as usize);
        prop_assert_eq!(unique.len(), targets.len());
        prop_assert!(targets.iter().all(|t| t.row < size && t.col < size));
    }

    // 7. Tile game: health floor at zero, game-over score is level - 1
    #[test]
    fn tile_memory_game_over_score(seed in any::<u64>(), cleared in 0u32..4) {
        let mut game = TileMemory::new(TileMemorySettings::default(), seed);
        let mut scores = empty_scores();
        game.start_game();
        game.tick(2000.0);

        for _ in 0..cleared {
            let targets = game.state().target_tiles.clone();
            for t in targets {
                game.handle_tile_click(t, &mut scores);
            }
            game.tick(1000.0);
            game.tick(2000.0);
        }
        prop_assert_eq!(game.level(), cleared + 1);

        while game.phase() == TilePhase::Recall {
            let state = game.state().clone();
            let miss = (0..state.grid_size)
                .flat_map(|r| (0..state.grid_size).map(move |c| (r, c)))
                .map(|(r, c)| mind_games::sim::Tile::new(r, c))
                .find(|t| !state.is_target(*t) && !state.is_selected(*t))
                .unwrap();
            game.handle_tile_click(miss, &mut scores);
        }

        prop_assert_eq!(game.phase(), TilePhase::GameOver);
        prop_assert_eq!(game.health(), 0);
        let recorded = scores.scores_by_game("tile-memory");
        prop_assert_eq!(recorded.len(), 1);
        prop_assert_eq!(recorded[0].score, cleared as f64);
    }
}
