#[cfg(test)]
#[path = "recipe_test.rs"]
mod tests;

use std::fmt;

pub const FALLBACK_RECIPE: &str = "No recipe could be generated with those ingredients.";

/// Latest recipe shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeResult {
    Generated(String),
    /// The model answered, but with nothing usable.
    Fallback,
}

impl RecipeResult {
    pub fn from_generated(cleaned: String) -> RecipeResult {
        if cleaned.is_empty() {
            return RecipeResult::Fallback;
        }

        return RecipeResult::Generated(cleaned);
    }

    pub fn text(&self) -> &str {
        match self {
            RecipeResult::Generated(text) => return text,
            RecipeResult::Fallback => return FALLBACK_RECIPE,
        }
    }
}

impl fmt::Display for RecipeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.text());
    }
}
