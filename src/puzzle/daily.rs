//! Deterministic daily target selection
//!
//! A calendar date is folded into a day-key, the day-key seeds a `StdRng`,
//! and the first draw from that generator picks an index into the pool.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::pool::CandidatePool;
use super::types::Country;

/// Integer key unique to a calendar day, increasing with the date
pub fn day_key(date: NaiveDate) -> u64 {
    // Years before 1 CE never show up in practice; clamp so the key stays unsigned
    let year = date.year().max(0) as u64;
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Reproducible value in [0, 1) for a seed
pub fn seeded_unit(seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    rng.random::<f64>()
}

/// Index of the day's target in a pool of `pool_size` entries
pub fn target_index(date: NaiveDate, pool_size: usize) -> Option<usize> {
    if pool_size == 0 {
        return None;
    }
    let value = seeded_unit(day_key(date));
    let index = ((value * pool_size as f64).floor() as usize).min(pool_size - 1);
    Some(index)
}

/// The day's target country, or `None` while the pool is empty
pub fn select_target(date: NaiveDate, pool: &CandidatePool) -> Option<&Country> {
    let index = target_index(date, pool.len())?;
    debug!(
        "Day-key {} selects index {} of {}",
        day_key(date),
        index,
        pool.len()
    );
    pool.get(index)
}
