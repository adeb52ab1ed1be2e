//! Daily geography puzzle core
//!
//! Everything needed to run the puzzle without a user interface: picking the
//! day's country, scoring guesses, tracking progress and statistics, and
//! producing share text. It can be driven from tests or the console.

mod clues;
mod config;
mod daily;
mod evaluate;
mod game_state;
mod geo;
mod persistence;
mod pool;
mod session;
mod share;
mod stats;
mod store;
mod types;

pub use clues::{format_population, result_message, Clues};
pub use config::{
    PuzzleConfig, ATTEMPT_BUDGET, CLOSE_THRESHOLD_KM, EARTH_RADIUS_KM, FOUND_THRESHOLD_KM,
    MIN_POPULATION, SUGGESTION_LIMIT,
};
pub use daily::{day_key, seeded_unit, select_target, target_index};
pub use evaluate::{evaluate_guess, evaluate_guess_with_threshold, GuessResult};
pub use game_state::{GameState, GameStatus, GuessOutcome, RejectReason};
pub use geo::{bearing_degrees, bearing_octant, distance_km, octant_for_bearing};
pub use persistence::{
    date_stamp, load_daily, load_stats, restore_today, save_daily, save_stats, DailyRecord,
    DAILY_STATE_KEY, STATS_KEY,
};
pub use pool::{CandidatePool, RawCountry, RawName};
pub use session::DailySession;
pub use share::{share_text, share_text_with_threshold, ShareGlyph, SHARE_FOOTER};
pub use stats::Statistics;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{Coordinates, Country, Direction};
