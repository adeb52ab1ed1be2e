//! Shared helpers for the integration tests

#![allow(dead_code)]

use geodle::puzzle::{CandidatePool, Coordinates, Country, MIN_POPULATION};

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countries.json");

/// The fixture dataset filtered into a pool (14 eligible countries)
pub fn fixture_pool() -> CandidatePool {
    CandidatePool::load_file(FIXTURE).expect("fixture dataset should load")
}

pub fn pool_country(pool: &CandidatePool, name: &str) -> Country {
    pool.find_by_name(name)
        .unwrap_or_else(|| panic!("{} missing from fixture pool", name))
        .clone()
}

/// A minimal country for tests that need exact coordinates
pub fn country(name: &str, lat: f64, lng: f64, region: &str, continent: &str) -> Country {
    Country {
        name: name.to_string(),
        code: name.chars().take(2).collect::<String>().to_ascii_uppercase(),
        region: region.to_string(),
        subregion: String::new(),
        continents: vec![continent.to_string()],
        population: MIN_POPULATION + 1,
        area: 1000.0,
        coordinates: Coordinates::new(lat, lng),
        capital: Vec::new(),
    }
}
