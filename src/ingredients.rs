//! Parsing of comma-separated ingredient lists.

/// Split free text on commas into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept; deduplication is left to the
/// matching service.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-join a detected ingredient list back into free-text form.
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}
