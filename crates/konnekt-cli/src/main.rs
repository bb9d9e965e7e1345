use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::Result;
use serde::Serialize;

use konnekt_cli::commands;
use konnekt_cli::config::{self, KonnektConfig};
use konnekt_cli::logging::{self, LogFormat};
use konnekt_core::models::AnswerMap;
use konnekt_storage::snapshot::{load_snapshot, Snapshot};
use konnekt_storage::store::KeyValueStore;

#[derive(Debug, Parser)]
#[command(name = "konnekt", version, about = "Assessment scoring and compatibility reports")]
struct Cli {
    /// Snapshot directory (one JSON file per storage key).
    #[arg(long, global = true, env = "KONNEKT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file. Defaults to the platform config directory.
    #[arg(long, global = true, env = "KONNEKT_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a config file pointing at a snapshot directory.
    Init {
        #[arg(long)]
        data_dir: PathBuf,
    },
    /// Rank every other user by compatibility with USER_ID.
    Report { user_id: String },
    /// Compare two stored results question by question.
    Match { first: String, second: String },
    /// Re-score a stored result.
    Score { result_id: String },
    /// Score an answers file and append the result to the snapshot.
    Submit {
        user_id: String,
        category: String,
        /// JSON object of `{"<index>": {"answer": ...}}`.
        answers: PathBuf,
        /// Seconds spent on the attempt.
        #[arg(long, default_value_t = 0)]
        time_spent: u64,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };
    let mut cfg = config::load_config(&config_path)?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }

    logging::init(cfg.log_format);

    run(cli.command, &config_path, cfg)
}

fn run(command: Command, config_path: &Path, cfg: KonnektConfig) -> Result<()> {
    match command {
        Command::Init { data_dir } => {
            let cfg = KonnektConfig { data_dir, ..cfg };
            KeyValueStore::open(&cfg.data_dir)?;
            config::save_config(config_path, &cfg)
        }
        Command::Report { user_id } => {
            let snapshot = open_snapshot(&cfg)?;
            print_json(&commands::report(&snapshot, &user_id)?)
        }
        Command::Match { first, second } => {
            let snapshot = open_snapshot(&cfg)?;
            print_json(&commands::pair_match(&snapshot, &first, &second)?)
        }
        Command::Score { result_id } => {
            let snapshot = open_snapshot(&cfg)?;
            print_json(&commands::score(&snapshot, &result_id)?)
        }
        Command::Submit {
            user_id,
            category,
            answers,
            time_spent,
        } => {
            let contents = std::fs::read_to_string(&answers)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", answers.display()))?;
            let answers: AnswerMap = serde_json::from_str(&contents)?;
            let store = KeyValueStore::open(&cfg.data_dir)?;
            let result = commands::submit(&store, &user_id, &category, answers, time_spent)?;
            print_json(&result)
        }
    }
}

fn open_snapshot(cfg: &KonnektConfig) -> Result<Snapshot> {
    let store = KeyValueStore::open(&cfg.data_dir)?;
    Ok(load_snapshot(&store)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
