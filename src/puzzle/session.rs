//! A player's session for one calendar day
//!
//! Ties the pieces together: picks the day's target from the pool, resumes
//! any progress saved earlier the same day, persists after every accepted
//! guess and folds the finished game into the statistics exactly once.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::{info, warn};

use super::clues::{result_message, Clues};
use super::config::PuzzleConfig;
use super::daily::select_target;
use super::game_state::{GameState, GuessOutcome};
use super::persistence::{load_stats, restore_today, save_daily, save_stats};
use super::pool::CandidatePool;
use super::share::share_text_with_threshold;
use super::stats::Statistics;
use super::store::KeyValueStore;
use super::types::Country;

pub struct DailySession<S: KeyValueStore> {
    pool: CandidatePool,
    date: NaiveDate,
    config: PuzzleConfig,
    game: GameState,
    stats: Statistics,
    store: S,
    restored: bool,
}

impl<S: KeyValueStore> DailySession<S> {
    /// Start (or resume) the session for `date`.
    ///
    /// The pool is owned by the session from here on so target selection and
    /// restore always see the same ordering.
    pub fn start(pool: CandidatePool, date: NaiveDate, store: S, config: PuzzleConfig) -> Self {
        let stats = load_stats(&store);
        let mut game = match select_target(date, &pool) {
            Some(target) => GameState::new(target.clone(), &config),
            None => {
                warn!("Candidate pool is empty; no puzzle available for {}", date);
                GameState::pending(&config)
            }
        };

        let restored = game.is_ready() && restore_today(&store, date, &mut game, &pool);
        info!(
            "Session for {} started ({})",
            date,
            if restored { "resumed" } else { "fresh" }
        );

        Self {
            pool,
            date,
            config,
            game,
            stats,
            store,
            restored,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether saved progress from earlier today was applied
    pub fn was_restored(&self) -> bool {
        self.restored
    }

    /// Submit a guess; accepted guesses are persisted immediately
    pub fn submit(&mut self, country: &Country) -> GuessOutcome {
        let outcome = self.game.submit_guess(country);
        match &outcome {
            GuessOutcome::Rejected(_) => {}
            GuessOutcome::Accepted(_) => self.persist(),
            GuessOutcome::Completed { won, .. } => {
                self.stats = self.stats.record_completion(*won);
                self.persist();
                if let Err(e) = save_stats(&mut self.store, &self.stats) {
                    warn!("Failed to save statistics: {}", e);
                }
            }
        }
        outcome
    }

    /// Submit a typed country name; `None` if it matches no candidate
    pub fn submit_name(&mut self, input: &str) -> Option<GuessOutcome> {
        let country = self.pool.resolve_input(input)?.clone();
        Some(self.submit(&country))
    }

    /// Write today's record. Failures are logged, never raised.
    pub fn persist(&mut self) {
        if let Err(e) = save_daily(&mut self.store, self.date, &self.game) {
            warn!("Failed to save progress: {}", e);
        }
    }

    /// Name completions for partial input, skipping countries already guessed
    pub fn suggestions(&self, input: &str) -> Vec<&Country> {
        let guessed: HashSet<&str> = self
            .game
            .guesses()
            .iter()
            .map(|g| g.country.name.as_str())
            .collect();
        self.pool.suggest(input, &guessed)
    }

    pub fn clues(&self) -> Option<Clues> {
        self.game.target().map(Clues::for_target)
    }

    pub fn share_text(&self) -> Option<String> {
        share_text_with_threshold(&self.game, self.date, self.config.close_threshold_km)
    }

    pub fn result_message(&self) -> Option<String> {
        result_message(&self.game)
    }
}
