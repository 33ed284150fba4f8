//! Core data types shared by the API client, the local store, and rendering.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, SrfError};

/// A recipe record as returned by the matching service.
///
/// Immutable from the client's perspective; the same shape is persisted
/// verbatim into the saved-recipes collection. The service may send numeric
/// ids, so the id is normalized to a string on deserialization (ratings key
/// by string id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub time: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub nutrition: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub matched_ingredients: Vec<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Text(String),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Text(s) => s,
    })
}

/// A validated recipe rating.
///
/// Any finite real number in `[1.0, 5.0]` is accepted, not just integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

impl Rating {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(SrfError::validation(format!(
                "invalid rating: {} (must be between {} and {})",
                value, MIN_RATING, MAX_RATING
            )));
        }
        Ok(Rating(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
