use super::RecipePrompt;

pub enum Action {
    BackendHealthCheck(),
    RequestRecipe(RecipePrompt),
}
