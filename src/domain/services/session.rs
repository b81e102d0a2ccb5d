#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::domain::models::BackendBox;
use crate::domain::models::Ingredient;
use crate::domain::models::Ingredients;
use crate::domain::models::NetworkError;
use crate::domain::models::Notification;
use crate::domain::models::RecipeError;
use crate::domain::models::RecipePrompt;
use crate::domain::models::RecipeResult;
use crate::domain::models::RequestOutcome;
use crate::domain::models::RequestState;
use crate::domain::models::ValidationError;

/// Ingredients collected so far plus the state of the recipe request made
/// from them.
///
/// Only one request may be in flight. Requests either run end to end through
/// [`IngredientRecipeSession::request_recipe`], or are split into
/// [`IngredientRecipeSession::begin_request`] and
/// [`IngredientRecipeSession::complete_request`] when the caller needs to keep
/// rendering while the backend works. Failures never escape as faults: they
/// are returned as [`RecipeError`] and also left behind as a pending
/// [`Notification`] for the user.
pub struct IngredientRecipeSession {
    backend: BackendBox,
    ingredients: Ingredients,
    pending_input: String,
    recipe: Option<RecipeResult>,
    request_state: RequestState,
    in_flight: Option<RecipePrompt>,
    notification: Option<Notification>,
}

impl IngredientRecipeSession {
    pub fn new(backend: BackendBox) -> IngredientRecipeSession {
        return IngredientRecipeSession {
            backend,
            ingredients: Ingredients::default(),
            pending_input: "".to_string(),
            recipe: None,
            request_state: RequestState::Idle,
            in_flight: None,
            notification: None,
        };
    }

    pub fn ingredients(&self) -> &Ingredients {
        return &self.ingredients;
    }

    pub fn pending_input(&self) -> &str {
        return &self.pending_input;
    }

    pub fn recipe(&self) -> Option<&RecipeResult> {
        return self.recipe.as_ref();
    }

    pub fn request_state(&self) -> RequestState {
        return self.request_state;
    }

    pub fn is_loading(&self) -> bool {
        return self.request_state.is_in_flight();
    }

    pub fn notification(&self) -> Option<&Notification> {
        return self.notification.as_ref();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn set_pending_input(&mut self, text: &str) {
        self.pending_input = text.to_string();
    }

    /// Appends the trimmed text and clears the pending input. Blank text is
    /// ignored and leaves the pending input untouched.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        let ingredient = match Ingredient::parse(raw) {
            Some(ingredient) => ingredient,
            None => return false,
        };

        tracing::debug!(ingredient = ingredient.as_str(), "Adding ingredient");
        self.ingredients.push(ingredient);
        self.pending_input = "".to_string();

        return true;
    }

    pub fn submit_pending_input(&mut self) -> bool {
        let raw = self.pending_input.clone();
        return self.add_ingredient(&raw);
    }

    pub fn remove_ingredient(&mut self, index: usize) {
        if let Some(removed) = self.ingredients.remove(index) {
            tracing::debug!(ingredient = removed.as_str(), index, "Removed ingredient");
        }
    }

    /// Validates the session can ask for a recipe, marks the request in flight
    /// and returns the prompt to send.
    pub fn begin_request(&mut self) -> Result<RecipePrompt, RecipeError> {
        if self.in_flight.is_some() {
            return Err(ValidationError::RequestInFlight.into());
        }

        if self.ingredients.is_empty() {
            self.notification = Some(Notification::missing_ingredients());
            return Err(ValidationError::NoIngredients.into());
        }

        let prompt = RecipePrompt::new(&self.ingredients);
        self.in_flight = Some(prompt.clone());
        self.request_state = RequestState::InFlight;

        return Ok(prompt);
    }

    /// Applies the backend outcome for the request started by
    /// [`IngredientRecipeSession::begin_request`].
    pub fn complete_request(
        &mut self,
        outcome: Result<String, NetworkError>,
    ) -> Result<RecipeResult, RecipeError> {
        let prompt = match self.in_flight.take() {
            Some(prompt) => prompt,
            None => {
                tracing::warn!("Discarding recipe response with no request in flight");
                return Err(ValidationError::NoRequestInFlight.into());
            }
        };

        match outcome {
            Ok(generated) => {
                let result = RecipeResult::from_generated(prompt.strip_echo(&generated));
                self.recipe = Some(result.clone());
                self.request_state = RequestState::Completed(RequestOutcome::Success);

                return Ok(result);
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch recipe");
                self.notification = Some(Notification::fetch_failed());
                self.request_state = RequestState::Completed(RequestOutcome::Failure);

                return Err(err.into());
            }
        }
    }

    pub async fn request_recipe(&mut self) -> Result<RecipeResult, RecipeError> {
        let prompt = self.begin_request()?;
        let outcome = self.backend.generate(&prompt).await;

        return self.complete_request(outcome);
    }
}
