//! Smart Recipe Finder (SRF) Library
//!
//! Client-side workflow for a recipe-matching service: parse ingredient
//! queries, call the remote detection/matching/substitution endpoints, render
//! results as display cards, and keep saved recipes and ratings in a local
//! key-value store.
//!
//! # Module Overview
//!
//! - [`api`] - HTTP client for the recipe service
//! - [`ingredients`] - Comma-separated ingredient-list parsing
//! - [`render`] - Card and substitution rendering
//! - [`store`] - Saved-recipes and ratings persistence
//! - [`control`] - Idle/Pending state for user-triggered actions
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use srf_lib::{parse_ingredient_list, RecipeApiClient, render_recipe_cards};
//!
//! # async fn example() -> srf_lib::Result<()> {
//! let client = RecipeApiClient::new().map_err(srf_lib::map_api_error)?;
//! let query = parse_ingredient_list("egg, milk");
//! let recipes = client
//!     .match_recipes(&query, "any", 5)
//!     .await
//!     .map_err(srf_lib::map_api_error)?;
//! println!("{}", render_recipe_cards(&recipes));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod control;
pub mod error;
pub mod ingredients;
pub mod output;
pub mod render;
pub mod store;
pub mod types;

pub use api::{map_api_error, ApiError, RecipeApiClient, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
pub use config::Config;
pub use control::{Control, ControlState};
pub use error::{ErrorCategory, ErrorPayload, Result, SrfError};
pub use ingredients::{join_ingredients, parse_ingredient_list};
pub use output::{
    DetectOutput, ErrorOutput, MatchOutput, RateOutput, SamplesOutput, SaveOutput, SaveStatus,
    SavedOutput, SrfOutput, SubstitutionEntry, SubstitutionsOutput, SRF_OUTPUT_VERSION,
};
pub use render::{
    render_recipe_cards, render_saved, render_substitutions, NO_MATCH_PLACEHOLDER, NO_SUGGESTIONS,
};
pub use store::{
    FileStore, KvStore, MemoryStore, RecipeStore, SaveOutcome, RATINGS_KEY, SAVED_RECIPES_KEY,
};
pub use types::{Rating, Recipe, MAX_RATING, MIN_RATING};
