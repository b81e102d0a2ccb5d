#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::infrastructure::backends::huggingface;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BackendHealthCheckTimeout,
    ConfigFile,
    HfToken,
    ModelURL,
}

pub fn config_dir() -> path::PathBuf {
    #[cfg(not(target_os = "macos"))]
    let base = dirs::cache_dir().unwrap_or_else(env::temp_dir);
    #[cfg(target_os = "macos")]
    let base = env::var("HOME")
        .map(|home| return path::PathBuf::from(home).join(".config"))
        .unwrap_or_else(|_| return env::temp_dir());

    return base.join("cookeat");
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = config_dir().join("config.toml");

        let res = match key {
            ConfigKey::BackendHealthCheckTimeout => "1000",
            ConfigKey::HfToken => "",
            ConfigKey::ModelURL => huggingface::DEFAULT_URL,

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
        };

        return res.to_string();
    }

    fn config_file(clap_arg_matches: &[&ArgMatches]) -> path::PathBuf {
        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        return path::PathBuf::from(config_file);
    }

    /// Reads the config file, validating each known key against the matching
    /// CLI argument. Nothing is stored until the whole file is accepted.
    async fn read_file(cmd: &Command, config_path: path::PathBuf) -> Result<Vec<(ConfigKey, String)>> {
        let mut values = vec![];
        if !config_path.exists() {
            return Ok(values);
        }

        let toml_str = fs::read_to_string(&config_path).await?;
        let doc = toml_str.parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            if let Some(val) = doc.get(&key.to_string()) {
                // Use clap value parsers to do validation.
                let mut possible_values = vec![];
                if let Some(arg) = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                {
                    if !arg.get_possible_values().is_empty() {
                        possible_values = arg
                            .get_possible_values()
                            .iter()
                            .map(|e| return e.get_name().to_string())
                            .collect::<Vec<String>>();
                    }
                }

                if let Some(val_int) = val.as_integer() {
                    values.push((key, val_int.to_string()));
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    values.push((key, val_str.to_string()));
                } else {
                    bail!(format!(
                        "config.toml has an invalid value for key '{key}': expected a string or an integer"
                    ));
                }
            }
        }

        return Ok(values);
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        let config_path = Config::config_file(&clap_arg_matches);
        let file_values = Config::read_file(&cmd, config_path.clone()).await?;

        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }
        Config::set(ConfigKey::ConfigFile, &config_path.to_string_lossy());

        for (key, val) in file_values {
            Config::set(key, &val);
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = Config::get(ConfigKey::ConfigFile),
            model_url = Config::get(ConfigKey::ModelURL),
            has_token = !Config::get(ConfigKey::HfToken).is_empty(),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
