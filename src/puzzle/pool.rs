//! Candidate pool of playable countries
//!
//! The pool is built once from the reference dataset and keeps the dataset's
//! order. Target selection indexes into it and restore looks names up in it,
//! so the same pool instance must serve both for a given day.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Deserializer};

use super::config::{MIN_POPULATION, SUGGESTION_LIMIT};
use super::types::{Coordinates, Country};

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A country record as served by the REST Countries v3.1 API
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub name: RawName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cca2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subregion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latlng: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continents: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub common: String,
}

impl RawCountry {
    /// Convert into a playable country, or `None` if it fails the eligibility rules
    fn into_candidate(self, min_population: u64) -> Option<Country> {
        if self.population <= min_population {
            return None;
        }
        let (lat, lng) = match self.latlng.as_slice() {
            [lat, lng] => (*lat, *lng),
            _ => return None,
        };
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }

        Some(Country {
            name: self.name.common,
            code: self.cca2,
            region: self.region,
            subregion: self.subregion,
            continents: self.continents,
            population: self.population,
            area: self.area,
            coordinates: Coordinates::new(lat, lng),
            capital: self.capital.unwrap_or_default(),
        })
    }
}

/// Ordered, index-addressable set of eligible countries
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    countries: Vec<Country>,
}

impl CandidatePool {
    /// Build a pool from countries that are already known to be eligible
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Filter raw dataset records into a pool, preserving their order
    pub fn from_raw(raw: Vec<RawCountry>, min_population: u64) -> Self {
        let total = raw.len();
        let countries: Vec<Country> = raw
            .into_iter()
            .filter_map(|c| c.into_candidate(min_population))
            .collect();
        info!(
            "Candidate pool: {} of {} countries eligible",
            countries.len(),
            total
        );
        Self { countries }
    }

    /// Decode a REST Countries JSON array
    pub fn from_json(json: &str, min_population: u64) -> Result<Self> {
        let raw: Vec<RawCountry> =
            serde_json::from_str(json).context("Failed to decode country dataset")?;
        Ok(Self::from_raw(raw, min_population))
    }

    /// Read and decode a dataset file using the default population threshold
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_file_with_threshold(path, MIN_POPULATION)
    }

    pub fn load_file_with_threshold(path: impl AsRef<Path>, min_population: u64) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading country dataset from {}", path.display());
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read country dataset: {}", path.display()))?;
        Self::from_json(&json, min_population)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    /// Exact, case-sensitive lookup by common name
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Case-insensitive lookup, used for typed input.
    ///
    /// An exact match wins; otherwise the match must be unique.
    pub fn resolve_input(&self, input: &str) -> Option<&Country> {
        let input = input.trim();
        if let Some(country) = self.find_by_name(input) {
            return Some(country);
        }
        let lower = input.to_lowercase();
        let mut matches = self
            .countries
            .iter()
            .filter(|c| c.name.to_lowercase() == lower);
        match (matches.next(), matches.next()) {
            (Some(country), None) => Some(country),
            _ => None,
        }
    }

    /// Countries whose name contains `input`, skipping names in `exclude`
    pub fn suggest<'a>(&'a self, input: &str, exclude: &HashSet<&str>) -> Vec<&'a Country> {
        self.suggest_with_limit(input, exclude, SUGGESTION_LIMIT)
    }

    pub fn suggest_with_limit<'a>(
        &'a self,
        input: &str,
        exclude: &HashSet<&str>,
        limit: usize,
    ) -> Vec<&'a Country> {
        if input.chars().count() < 2 {
            return Vec::new();
        }
        let lower = input.to_lowercase();
        self.countries
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&lower))
            .filter(|c| !exclude.contains(c.name.as_str()))
            .take(limit)
            .collect()
    }
}
