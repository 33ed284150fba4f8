//! Text rendering of recipe cards and substitution suggestions.
//!
//! Rendering is pure string building: calling it again with the same input
//! produces the same output, and each call fully replaces prior content.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as FmtWrite;

use crate::types::Recipe;

pub const NO_MATCH_PLACEHOLDER: &str = "No recipes matched.";
pub const NO_SUGGESTIONS: &str = "No suggestions found";

/// Render a list of recipes as display cards.
///
/// An empty list renders exactly one placeholder line and zero cards.
pub fn render_recipe_cards(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return format!("{NO_MATCH_PLACEHOLDER}\n");
    }

    let mut buf = String::new();
    for recipe in recipes {
        render_card(&mut buf, recipe, None);
    }
    buf
}

/// Render the saved collection, including the stored rating where one exists.
pub fn render_saved(recipes: &[Recipe], ratings: &BTreeMap<String, f64>) -> String {
    if recipes.is_empty() {
        return "No saved recipes yet.\n".to_string();
    }

    let mut buf = String::new();
    for recipe in recipes {
        render_card(&mut buf, recipe, ratings.get(&recipe.id).copied());
    }
    buf
}

fn render_card(buf: &mut String, recipe: &Recipe, rating: Option<f64>) {
    write!(buf, "{}", recipe.name).ok();
    for tag in &recipe.tags {
        write!(buf, "  [{tag}]").ok();
    }
    writeln!(buf).ok();

    writeln!(
        buf,
        "  Time: {} mins   Difficulty: {}",
        recipe.time, recipe.difficulty
    )
    .ok();

    let matched = if recipe.matched_ingredients.is_empty() {
        "none".to_string()
    } else {
        recipe.matched_ingredients.join(", ")
    };
    writeln!(buf, "  Matched ingredients: {matched}").ok();

    writeln!(buf, "  Ingredients: {}", recipe.ingredients.join(", ")).ok();

    if !recipe.steps.is_empty() {
        writeln!(buf, "  Steps:").ok();
        for (i, step) in recipe.steps.iter().enumerate() {
            writeln!(buf, "    {}. {}", i + 1, step).ok();
        }
    }

    if !recipe.nutrition.is_empty() {
        let pairs: Vec<String> = recipe
            .nutrition
            .iter()
            .map(|(k, v)| format!("{}: {}", k, nutrition_value(v)))
            .collect();
        writeln!(buf, "  Nutrition: {}", pairs.join(", ")).ok();
    }

    if let Some(stars) = rating {
        writeln!(buf, "  Your rating: {stars}").ok();
    }
    writeln!(buf).ok();
}

fn nutrition_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render substitution suggestions, one line per requested ingredient, in
/// the order they were requested. A missing or empty suggestion list renders
/// the explicit no-suggestions message.
pub fn render_substitutions(
    requested: &[String],
    suggestions: &HashMap<String, Vec<String>>,
) -> String {
    let mut buf = String::new();
    for ingredient in requested {
        let line = match suggestions.get(ingredient) {
            Some(subs) if !subs.is_empty() => subs.join(", "),
            _ => NO_SUGGESTIONS.to_string(),
        };
        writeln!(buf, "{ingredient}: {line}").ok();
    }
    buf
}
