use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::NetworkError;
use super::RecipePrompt;

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the endpoint and credentials are usable
    /// before the user asks for a recipe.
    async fn health_check(&self) -> Result<()>;

    /// Sends the prompt to the model in a single attempt and returns the raw
    /// generated text. An answer without usable text comes back as an empty
    /// string rather than an error.
    async fn generate(&self, prompt: &RecipePrompt) -> Result<String, NetworkError>;
}

pub type BackendBox = Arc<dyn Backend + Send + Sync>;
