/*
[INPUT]:  CLI arguments, YAML configuration file, TUGAS_* environment variables
[OUTPUT]: Task form session (TUI, guided prompts, or one-shot submission)
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;
mod tui;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use tugas_adapter::TugasClient;
use tugas_form::AppConfig;

use crate::cli::add::AddArgs;

const LOG_FILE_PREFIX: &str = "tugas-form.log";

#[derive(Parser, Debug)]
#[command(name = "tugas-form", version, about = "Create deadline tasks on a tugas web app")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Override the API base URL from the configuration
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full-screen task form (default)
    Tui,
    /// Guided prompts for each field
    Prompt,
    /// Submit a single task from flags
    Add(AddArgs),
    /// Write the default configuration file
    InitConfig {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let command = args.command.unwrap_or(Command::Tui);

    if let Command::InitConfig { output, force } = command {
        init_tracing(&args.log_level)?;
        return cli::init::run_init_config(output, force);
    }

    let mut config = AppConfig::load(args.config_path.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    // The TUI owns the terminal, so its logs go to a file
    let _log_guard = match command {
        Command::Tui => Some(init_file_tracing(&args.log_level, &config.log_directory())?),
        _ => {
            init_tracing(&args.log_level)?;
            None
        }
    };

    info!(base_url = %config.api.base_url, "starting tugas-form");
    let client = Arc::new(
        TugasClient::with_config(config.client_config()).context("build API client")?,
    );

    match command {
        Command::Tui => tui::run_tui(client).await,
        Command::Prompt => cli::prompt::run_prompt(&*client).await,
        Command::Add(add_args) => cli::add::run_add(add_args, &*client).await,
        Command::InitConfig { .. } => Ok(()),
    }
}

fn env_filter(log_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).context("invalid log level"),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_file_tracing(log_level: &str, directory: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
