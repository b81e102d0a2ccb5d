#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;
use crate::domain::models::RecipePrompt;

fn health_check(backend: BackendBox, tx: mpsc::UnboundedSender<Event>) {
    tokio::spawn(async move {
        if let Err(err) = backend.health_check().await {
            tracing::warn!(error = %err, "Backend health check failed");
            tx.send(Event::BackendHealthCheckFailed(err.to_string()))?;
        }

        return Ok::<(), anyhow::Error>(());
    });
}

fn request_recipe(
    backend: BackendBox,
    tx: mpsc::UnboundedSender<Event>,
    prompt: RecipePrompt,
) {
    tokio::spawn(async move {
        let res = backend.generate(&prompt).await;
        tx.send(Event::RecipeResponse(res))?;

        return Ok::<(), anyhow::Error>(());
    });
}

/// Runs backend calls off the UI loop. Each action gets its own task and
/// reports back through the event channel, so a slow endpoint never blocks
/// rendering.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::BackendHealthCheck() => {
                    health_check(backend.clone(), tx.clone());
                }
                Action::RequestRecipe(prompt) => {
                    tracing::debug!(prompt = %prompt.text, "Requesting recipe");
                    request_recipe(backend.clone(), tx.clone(), prompt);
                }
            }
        }

        return Ok(());
    }
}
