#[cfg(test)]
#[path = "huggingface_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::GenerationParameters;
use crate::domain::models::NetworkError;
use crate::domain::models::RecipePrompt;

pub const DEFAULT_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3";

fn convert_err(err: reqwest::Error) -> NetworkError {
    return NetworkError::Transport(err.to_string());
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Many(Vec<serde_json::Value>),
    One(Generation),
    Other(serde_json::Value),
}

impl GenerationResponse {
    fn into_text(self) -> String {
        match self {
            // Only the first generation counts, whatever follows it.
            GenerationResponse::Many(generations) => {
                return generations
                    .first()
                    .and_then(|generation| return generation.get("generated_text"))
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string();
            }
            GenerationResponse::One(generation) => return generation.generated_text,
            GenerationResponse::Other(_) => return "".to_string(),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Hugging Face hosted inference API for a single text generation model.
pub struct HuggingFace {
    url: String,
    token: String,
    timeout: u64,
}

impl HuggingFace {
    pub fn new(url: &str, token: &str, timeout: u64) -> HuggingFace {
        return HuggingFace {
            url: url.to_string(),
            token: token.to_string(),
            timeout,
        };
    }

    pub fn from_config() -> Result<HuggingFace> {
        let timeout = Config::get(ConfigKey::BackendHealthCheckTimeout);
        let timeout = match timeout.parse::<u64>() {
            Ok(timeout) => timeout,
            Err(_) => bail!(format!(
                "'{}' must be a number of milliseconds, got '{timeout}'",
                ConfigKey::BackendHealthCheckTimeout
            )),
        };

        return Ok(HuggingFace::new(
            &Config::get(ConfigKey::ModelURL),
            &Config::get(ConfigKey::HfToken),
            timeout,
        ));
    }
}

#[async_trait]
impl Backend for HuggingFace {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Hugging Face model URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Hugging Face token is not defined");
        }

        let res = reqwest::Client::new()
            .get(&self.url)
            .header("Authorization", format!("Bearer {}", self.token))
            .timeout(Duration::from_millis(self.timeout))
            .send()
            .await;

        let result = match res {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = ?err, "Hugging Face is not reachable");
                bail!("Hugging Face is not reachable");
            }
        };

        let status = result.status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Hugging Face health check failed");
            bail!("Hugging Face health check failed with status {status}");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn generate(&self, prompt: &RecipePrompt) -> Result<String, NetworkError> {
        let req = GenerationRequest {
            inputs: &prompt.text,
            parameters: &prompt.parameters,
        };
        tracing::debug!(url = %self.url, body = ?req, "Generation request");

        let res = reqwest::Client::new()
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&req)
            .send()
            .await
            .map_err(convert_err)?;

        let status = res.status();
        let body = res.text().await.map_err(convert_err)?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err_res) => err_res.error,
                Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
            };

            tracing::error!(
                status = status.as_u16(),
                message = %message,
                "Failed to make generation request to Hugging Face"
            );
            return Err(NetworkError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let generation = serde_json::from_str::<GenerationResponse>(&body).map_err(|err| {
            tracing::error!(error = ?err, "Hugging Face returned malformed JSON");
            return NetworkError::Decode(err.to_string());
        })?;
        tracing::debug!(body = ?generation, "Generation response");

        return Ok(generation.into_text());
    }
}
