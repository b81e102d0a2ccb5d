#[cfg(test)]
#[path = "ingredient_test.rs"]
mod tests;

use std::fmt;
use std::slice;

/// A single food item entered by the user. Always trimmed and never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingredient(String);

impl Ingredient {
    /// Trims surrounding whitespace, returning `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Ingredient> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        return Some(Ingredient(trimmed.to_string()));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// Ordered ingredient list. Entries are addressed by position and duplicates
/// are kept, as the order ends up in the prompt text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ingredients {
    items: Vec<Ingredient>,
}

impl Ingredients {
    pub fn push(&mut self, ingredient: Ingredient) {
        self.items.push(ingredient);
    }

    /// Removes the entry at `index`. Out of range indexes leave the list as is.
    pub fn remove(&mut self, index: usize) -> Option<Ingredient> {
        if index >= self.items.len() {
            return None;
        }

        return Some(self.items.remove(index));
    }

    pub fn last(&self) -> Option<&Ingredient> {
        return self.items.last();
    }

    pub fn len(&self) -> usize {
        return self.items.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    pub fn iter(&self) -> slice::Iter<'_, Ingredient> {
        return self.items.iter();
    }
}

impl<'a> IntoIterator for &'a Ingredients {
    type Item = &'a Ingredient;
    type IntoIter = slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        return self.items.iter();
    }
}

/// Comma joined without spaces, e.g. `eggs,tomatoes`.
impl fmt::Display for Ingredients {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = self
            .items
            .iter()
            .map(|ingredient| {
                return ingredient.as_str();
            })
            .collect::<Vec<&str>>()
            .join(",");

        return write!(f, "{joined}");
    }
}
