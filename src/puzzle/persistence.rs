//! Saving and restoring progress through a key-value store
//!
//! Two records are kept. The daily record holds today's guessed names and is
//! only honoured on the day it was written; scoring is recomputed on restore.
//! The statistics record is not tied to a date. Anything unreadable is treated
//! as missing.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::game_state::GameState;
use super::pool::CandidatePool;
use super::stats::Statistics;
use super::store::{KeyValueStore, Result};

/// Store key of today's progress
pub const DAILY_STATE_KEY: &str = "geodle-state";

/// Store key of the cumulative statistics
pub const STATS_KEY: &str = "geodle-stats";

/// Today's progress as written to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: String,
    pub guess_names: Vec<String>,
    pub game_over: bool,
    pub won: bool,
}

impl DailyRecord {
    pub fn from_game(date: NaiveDate, game: &GameState) -> Self {
        Self {
            date: date_stamp(date),
            guess_names: game.guess_names(),
            game_over: game.is_over(),
            won: game.is_won(),
        }
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == date_stamp(date)
    }
}

/// Text form of a date used to scope the daily record, e.g. `Sat Oct 17 2026`
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Write today's progress
pub fn save_daily(store: &mut impl KeyValueStore, date: NaiveDate, game: &GameState) -> Result<()> {
    let record = DailyRecord::from_game(date, game);
    let json = serde_json::to_string(&record)?;
    store.set(DAILY_STATE_KEY, &json)
}

/// Read today's progress; stale, missing or malformed records yield `None`
pub fn load_daily(store: &impl KeyValueStore, date: NaiveDate) -> Option<DailyRecord> {
    let raw = match store.get(DAILY_STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read saved progress, starting fresh: {}", e);
            return None;
        }
    };
    let record: DailyRecord = match serde_json::from_str(&raw) {
        Ok(record) => record,
        Err(e) => {
            warn!("Ignoring malformed saved progress: {}", e);
            return None;
        }
    };
    if !record.is_for(date) {
        debug!("Saved progress is from {}, starting a new day", record.date);
        return None;
    }
    Some(record)
}

/// Load today's saved guesses into `game`. Returns whether a record was applied.
pub fn restore_today(
    store: &impl KeyValueStore,
    date: NaiveDate,
    game: &mut GameState,
    pool: &CandidatePool,
) -> bool {
    match load_daily(store, date) {
        Some(record) => {
            game.restore(&record.guess_names, pool, record.game_over, record.won);
            true
        }
        None => false,
    }
}

/// Read statistics; missing or malformed records yield zeroed counters
pub fn load_stats(store: &impl KeyValueStore) -> Statistics {
    match store.get(STATS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed statistics: {}", e);
            Statistics::default()
        }),
        Ok(None) => Statistics::default(),
        Err(e) => {
            warn!("Could not read statistics: {}", e);
            Statistics::default()
        }
    }
}

pub fn save_stats(store: &mut impl KeyValueStore, stats: &Statistics) -> Result<()> {
    let json = serde_json::to_string(stats)?;
    store.set(STATS_KEY, &json)
}
