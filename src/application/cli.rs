use std::io;
use std::path;
use std::process;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::application::ui::help_text;
use crate::configuration::config_dir;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::IngredientRecipeSession;
use crate::infrastructure::backends::huggingface::HuggingFace;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

/// Runs a single recipe request outside of the terminal UI. Failures are
/// reported the same way the UI would, then exit non-zero.
async fn print_recipe(ingredients: Vec<String>) -> Result<()> {
    let backend = HuggingFace::from_config()?;
    let mut session = IngredientRecipeSession::new(Arc::new(backend));
    for ingredient in ingredients {
        session.add_ingredient(&ingredient);
    }

    if session.request_recipe().await.is_err() {
        if let Some(notification) = session.notification() {
            eprintln!(
                "{}",
                Paint::red(format!("{}: {}", notification.title, notification.body))
            );
        }
        process::exit(1);
    }

    if let Some(recipe) = session.recipe() {
        println!("{recipe}");
    }

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Cookeat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Cookeat with environment variable RUST_LOG=cookeat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_recipe() -> Command {
    return Command::new("recipe")
        .about("Requests a single recipe for the given ingredients and prints it to stdout.")
        .arg(
            Arg::new("ingredient")
                .short('i')
                .long("ingredient")
                .help("An ingredient you have at hand. Repeat for each ingredient, order is kept.")
                .action(ArgAction::Append)
                .num_args(1)
                .required(true),
        );
}

pub fn build() -> Command {
    let hotkeys_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(line.to_string())
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("cookeat")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_recipe())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("COOKEAT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
                .long(ConfigKey::BackendHealthCheckTimeout.to_string())
                .env("COOKEAT_BACKEND_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out when doing a healthcheck for the backend. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HfToken.to_string())
                .long(ConfigKey::HfToken.to_string())
                .env("COOKEAT_HF_TOKEN")
                .hide_env_values(true)
                .num_args(1)
                .help("Hugging Face access token used as the bearer token for inference requests.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ModelURL.to_string())
                .long(ConfigKey::ModelURL.to_string())
                .env("COOKEAT_MODEL_URL")
                .num_args(1)
                .help(format!("Hugging Face inference API URL of the text generation model. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::ModelURL)))
                .global(true),
        );
}

fn ingredients_from_matches(matches: &ArgMatches) -> Vec<String> {
    return matches
        .get_many::<String>("ingredient")
        .map(|values| {
            return values
                .map(|value| return value.to_string())
                .collect::<Vec<String>>();
        })
        .unwrap_or_default();
}

/// Parses arguments and runs any one-off subcommand. Returns `true` when the
/// terminal UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = config_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("recipe", recipe_matches)) => {
            Config::load(build(), vec![&matches, recipe_matches]).await?;
            print_recipe(ingredients_from_matches(recipe_matches)).await?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
