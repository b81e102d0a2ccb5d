use super::RecipeResult;
use super::FALLBACK_RECIPE;

#[test]
fn it_keeps_generated_text() {
    let result = RecipeResult::from_generated("Omelette recipe...".to_string());
    assert_eq!(result, RecipeResult::Generated("Omelette recipe...".to_string()));
    assert_eq!(result.text(), "Omelette recipe...");
}

#[test]
fn it_falls_back_on_empty_text() {
    let result = RecipeResult::from_generated("".to_string());
    assert_eq!(result, RecipeResult::Fallback);
    assert_eq!(result.to_string(), FALLBACK_RECIPE);
    insta::assert_snapshot!(result.text(), @"No recipe could be generated with those ingredients.");
}
