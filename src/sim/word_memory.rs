//! Word memory game
//!
//! Words are shown one at a time and the player says whether each one has
//! appeared before in this session. Wrong answers cost health; the run ends
//! when health runs out.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rand_set::RandSet;
use crate::error::EngineError;
use crate::games::GameKind;
use crate::scores::{Metadata, ScoreStore};
use crate::settings::WordMemorySettings;
use crate::words;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordPhase {
    Ready,
    Playing,
    GameOver,
}

/// Result of one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// Incorrect, and that was the last point of health
    GameOver,
}

/// A word chosen by [`pick_word`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPick {
    pub index: usize,
    /// Whether the word had already been shown this session
    pub seen: bool,
}

/// Choose the next word index.
///
/// With probability `reshow_probability` a seen word (other than
/// `previous`) is deliberately repeated. Otherwise a uniformly random index
/// other than `previous` is drawn from the bank and, if new, recorded in
/// `seen`.
pub fn pick_word<R: Rng>(
    rng: &mut R,
    bank_len: usize,
    previous: usize,
    seen: &mut RandSet,
    reshow_probability: f64,
) -> WordPick {
    if rng.random::<f64>() < reshow_probability && !seen.is_empty() {
        if let Some(index) = seen.get_random(rng) {
            if index != previous {
                return WordPick { index, seen: true };
            }
        }
    }

    if bank_len <= 1 {
        let seen_before = !seen.add(0);
        return WordPick {
            index: 0,
            seen: seen_before,
        };
    }

    let index = loop {
        let candidate = rng.random_range(0..bank_len);
        if candidate != previous {
            break candidate;
        }
    };

    let seen_before = !seen.add(index);
    WordPick {
        index,
        seen: seen_before,
    }
}

/// Session state. `seen_indices` is engine-internal and not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMemoryState {
    pub phase: WordPhase,
    pub current_index: Option<usize>,
    pub previous_index: usize,
    #[serde(skip)]
    pub seen_indices: RandSet,
    pub score: u32,
    pub health: u8,
    /// Whether the word on screen was shown before
    pub current_seen: bool,
    pub words_shown: u32,
}

impl WordMemoryState {
    fn fresh(health: u8) -> Self {
        Self {
            phase: WordPhase::Ready,
            current_index: None,
            previous_index: 0,
            seen_indices: RandSet::new(),
            score: 0,
            health,
            current_seen: false,
            words_shown: 0,
        }
    }
}

pub struct WordMemory {
    state: WordMemoryState,
    words: Vec<String>,
    settings: WordMemorySettings,
    rng: Pcg32,
}

impl WordMemory {
    pub fn new(words: Vec<String>, settings: WordMemorySettings, seed: u64) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::EmptyWordBank);
        }
        Ok(Self {
            state: WordMemoryState::fresh(settings.starting_health),
            words,
            settings,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Engine over the built-in bank
    pub fn with_default_bank(settings: WordMemorySettings, seed: u64) -> Self {
        Self {
            state: WordMemoryState::fresh(settings.starting_health),
            words: words::default_bank(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &WordMemoryState {
        &self.state
    }

    pub fn phase(&self) -> WordPhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn health(&self) -> u8 {
        self.state.health
    }

    /// Word on screen, if a game is running
    pub fn current_word(&self) -> Option<&str> {
        match self.state.phase {
            WordPhase::Playing => self
                .state
                .current_index
                .and_then(|i| self.words.get(i))
                .map(String::as_str),
            _ => None,
        }
    }

    /// Begin a fresh session
    pub fn start_game(&mut self) {
        self.state = WordMemoryState::fresh(self.settings.starting_health);
        // Index 0 doubles as the "no previous word" sentinel
        self.show_next_word();
        self.state.phase = WordPhase::Playing;
        log::debug!("Word memory started");
    }

    /// Player claims the current word was (`true`) or wasn't seen before
    pub fn answer(&mut self, claims_seen: bool, scores: &mut ScoreStore) -> Option<AnswerOutcome> {
        if self.state.phase != WordPhase::Playing {
            return None;
        }

        let outcome = if claims_seen == self.state.current_seen {
            self.state.score += 1;
            AnswerOutcome::Correct
        } else if self.state.health <= 1 {
            self.state.health = 0;
            self.state.phase = WordPhase::GameOver;
            log::info!("Word memory over: score {}", self.state.score);
            let mut metadata = Metadata::new();
            metadata.insert("wordsShown".into(), self.state.words_shown.into());
            scores.record(GameKind::WordMemory, self.state.score as f64, Some(metadata));
            return Some(AnswerOutcome::GameOver);
        } else {
            self.state.health -= 1;
            AnswerOutcome::Incorrect
        };

        self.show_next_word();
        Some(outcome)
    }

    /// Back to Ready, dropping the session
    pub fn reset_game(&mut self) {
        self.state = WordMemoryState::fresh(self.settings.starting_health);
    }

    /// Restart after a game over. Returns false in any other phase.
    pub fn try_again(&mut self) -> bool {
        if self.state.phase != WordPhase::GameOver {
            return false;
        }
        self.start_game();
        true
    }

    fn show_next_word(&mut self) {
        let pick = pick_word(
            &mut self.rng,
            self.words.len(),
            self.state.previous_index,
            &mut self.state.seen_indices,
            self.settings.reshow_probability,
        );
        self.state.current_index = Some(pick.index);
        self.state.previous_index = pick.index;
        self.state.current_seen = pick.seen;
        self.state.words_shown += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, MemoryStore};

    fn scores() -> ScoreStore {
        ScoreStore::load(Box::new(MemoryStore::new()), Box::new(ManualClock::new(0.0)))
    }

    fn bank(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{}", i)).collect()
    }

    #[test]
    fn test_empty_bank_rejected() {
        let err = WordMemory::new(Vec::new(), WordMemorySettings::default(), 1).err();
        assert_eq!(err, Some(EngineError::EmptyWordBank));
    }

    #[test]
    fn test_start_game() {
        let mut game = WordMemory::with_default_bank(WordMemorySettings::default(), 5);
        assert_eq!(game.phase(), WordPhase::Ready);
        assert_eq!(game.current_word(), None);

        game.start_game();
        assert_eq!(game.phase(), WordPhase::Playing);
        assert_eq!(game.health(), 3);
        assert_eq!(game.score(), 0);
        assert!(!game.state().current_seen);
        assert_ne!(game.state().current_index, Some(0));
        assert_eq!(game.state().seen_indices.size(), 1);
        assert!(game.current_word().is_some());
    }

    #[test]
    fn test_correct_answers_score() {
        let mut game = WordMemory::with_default_bank(WordMemorySettings::default(), 9);
        let mut scores = scores();
        game.start_game();
        for expected in 1..=20 {
            let truth = game.state().current_seen;
            assert_eq!(game.answer(truth, &mut scores), Some(AnswerOutcome::Correct));
            assert_eq!(game.score(), expected);
        }
        assert_eq!(game.health(), 3);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_three_wrong_answers_end_game() {
        let mut game = WordMemory::with_default_bank(WordMemorySettings::default(), 11);
        let mut scores = scores();
        game.start_game();

        let truth = game.state().current_seen;
        game.answer(truth, &mut scores);

        let wrong = !game.state().current_seen;
        assert_eq!(game.answer(wrong, &mut scores), Some(AnswerOutcome::Incorrect));
        let wrong = !game.state().current_seen;
        assert_eq!(game.answer(wrong, &mut scores), Some(AnswerOutcome::Incorrect));
        assert_eq!(game.health(), 1);
        let wrong = !game.state().current_seen;
        assert_eq!(game.answer(wrong, &mut scores), Some(AnswerOutcome::GameOver));

        assert_eq!(game.phase(), WordPhase::GameOver);
        assert_eq!(game.health(), 0);
        let recorded = scores.scores_by_game("word-memory");
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].score, 1.0);

        // Further answers are ignored
        assert_eq!(game.answer(true, &mut scores), None);
        assert_eq!(game.health(), 0);
        assert_eq!(scores.scores().len(), 1);
    }

    #[test]
    fn test_try_again_only_after_game_over() {
        let mut game = WordMemory::with_default_bank(WordMemorySettings::default(), 3);
        let mut scores = scores();
        assert!(!game.try_again());

        game.start_game();
        for _ in 0..3 {
            let wrong = !game.state().current_seen;
            game.answer(wrong, &mut scores);
        }
        assert_eq!(game.phase(), WordPhase::GameOver);
        assert!(game.try_again());
        assert_eq!(game.phase(), WordPhase::Playing);
        assert_eq!(game.health(), 3);
        assert_eq!(game.state().seen_indices.size(), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut game = WordMemory::with_default_bank(WordMemorySettings::default(), 21);
        let mut scores = scores();
        game.start_game();
        game.answer(false, &mut scores);

        game.reset_game();
        let once = game.state().clone();
        game.reset_game();
        assert_eq!(game.state(), &once);
        assert_eq!(once.phase, WordPhase::Ready);
        assert!(once.seen_indices.is_empty());
    }

    #[test]
    fn test_pick_never_repeats_previous() {
        let mut rng = Pcg32::seed_from_u64(77);
        let mut seen = RandSet::new();
        let mut previous = 0;
        for _ in 0..500 {
            let pick = pick_word(&mut rng, 5, previous, &mut seen, 0.5);
            assert_ne!(pick.index, previous);
            assert!(seen.has(pick.index));
            previous = pick.index;
        }
    }

    #[test]
    fn test_pick_flags_seen_words() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut seen = RandSet::new();
        let mut shown = std::collections::HashSet::new();
        let mut previous = 0;
        for _ in 0..300 {
            let pick = pick_word(&mut rng, 12, previous, &mut seen, 0.1);
            assert_eq!(pick.seen, shown.contains(&pick.index));
            shown.insert(pick.index);
            previous = pick.index;
        }
    }

    #[test]
    fn test_always_reshow_uses_seen_pool() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut seen = RandSet::new();
        seen.add(3);
        seen.add(6);
        for _ in 0..50 {
            let pick = pick_word(&mut rng, 100, 3, &mut seen, 1.0);
            if pick.index == 6 {
                assert!(pick.seen);
            }
            assert_ne!(pick.index, 3);
        }
    }

    #[test]
    fn test_single_word_bank() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut seen = RandSet::new();
        let first = pick_word(&mut rng, 1, 0, &mut seen, 0.0);
        assert_eq!(first, WordPick { index: 0, seen: false });
        let second = pick_word(&mut rng, 1, 0, &mut seen, 0.0);
        assert_eq!(second, WordPick { index: 0, seen: true });

        let mut game = WordMemory::new(bank(1), WordMemorySettings::default(), 2).unwrap();
        game.start_game();
        assert_eq!(game.current_word(), Some("w0"));
    }
}
