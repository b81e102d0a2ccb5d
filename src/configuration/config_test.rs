use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_names_keys_in_kebab_case() {
    assert_eq!(
        ConfigKey::BackendHealthCheckTimeout.to_string(),
        "backend-health-check-timeout"
    );
    assert_eq!(ConfigKey::ConfigFile.to_string(), "config-file");
    assert_eq!(ConfigKey::HfToken.to_string(), "hf-token");
    assert_eq!(ConfigKey::ModelURL.to_string(), "model-url");
}

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Time to wait in milliseconds before timing out when doing a healthcheck for the backend.
    backend-health-check-timeout = 1000

    # Hugging Face access token used as the bearer token for inference requests.
    # hf-token = ""

    # Hugging Face inference API URL of the text generation model. Can be swapped to a compatible proxy.
    model-url = "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3"
    "###);
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "cookeat",
        "-c",
        "./config.example.toml",
        "--hf-token",
        "hf_from_cli",
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ConfigFile), "./config.example.toml");
    assert_eq!(Config::get(ConfigKey::BackendHealthCheckTimeout), "2500");
    assert_eq!(Config::get(ConfigKey::ModelURL), "http://localhost:8080/generate");
    assert_eq!(Config::get(ConfigKey::HfToken), "hf_from_cli");
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["cookeat", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_rejects_unsupported_value_types() -> Result<()> {
    let matches = cli::build()
        .try_get_matches_from(vec!["cookeat", "-c", "./test/bad-type-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;

    assert!(res
        .unwrap_err()
        .to_string()
        .contains("invalid value for key 'model-url'"));
    return Ok(());
}
