//! Local persistence for saved recipes and ratings.
//!
//! The storage surface is a minimal key-value capability so the same
//! workflow runs against an in-memory map in tests and a JSON file on disk
//! in the CLI. Two named entries exist: `savedRecipes` (a list of recipes,
//! at most one per id) and `ratings` (recipe id to rating, last write wins).
//! Absent keys read as empty collections.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{Rating, Recipe};

pub const SAVED_RECIPES_KEY: &str = "savedRecipes";
pub const RATINGS_KEY: &str = "ratings";

/// Durable key-value storage with JSON-encoded values.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON object per file, one member per key.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        entries
            .get(key)
            .map(|value| serde_json::to_string(value).map_err(Into::into))
            .transpose()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), serde_json::from_str(value)?);
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Outcome of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// The saved-recipes collection and ratings map over a [`KvStore`].
#[derive(Debug)]
pub struct RecipeStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> RecipeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn saved_recipes(&self) -> Result<Vec<Recipe>> {
        match self.store.get(SAVED_RECIPES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append the recipe unless one with the same id is already present.
    pub fn save(&mut self, recipe: &Recipe) -> Result<SaveOutcome> {
        let mut saved = self.saved_recipes()?;
        if saved.iter().any(|r| r.id == recipe.id) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        saved.push(recipe.clone());
        self.store
            .set(SAVED_RECIPES_KEY, &serde_json::to_string(&saved)?)?;
        Ok(SaveOutcome::Saved)
    }

    pub fn ratings(&self) -> Result<BTreeMap<String, f64>> {
        match self.store.get(RATINGS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Record a rating for the recipe id, overwriting any previous one.
    pub fn rate(&mut self, id: &str, rating: Rating) -> Result<()> {
        let mut ratings = self.ratings()?;
        ratings.insert(id.to_string(), rating.value());
        self.store
            .set(RATINGS_KEY, &serde_json::to_string(&ratings)?)?;
        Ok(())
    }

    pub fn rating_of(&self, id: &str) -> Result<Option<f64>> {
        Ok(self.ratings()?.get(id).copied())
    }
}
