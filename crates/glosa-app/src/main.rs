use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use glosa_config::Config;
use glosa_config::profile::ProfileStore;
use glosa_core::WordBook;
use glosa_store::SqliteStore;
use glosa_types::{AppEvent, Command, LookupOutcome};
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod state;
mod ui;


use self::cli::{Cli, CliCommand, ProfileCommand};
use self::controller::AppController;
use self::events::Shell;
use self::state::{AppState, OutputFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dotenv = glosa_config::load_dotenv();
    let env_config = Config::from_env();
    init_tracing(cli.json_logs || env_config.log_json);
    match dotenv {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to read .env file: {}", e),
    }

    let profiles = ProfileStore::new();
    if let Some(CliCommand::Profile(ProfileCommand::Init)) = &cli.command {
        let path = profiles.init().context("failed to write main profile")?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match &cli.profile {
        Some(name) => profiles
            .load(name)
            .with_context(|| format!("failed to load profile '{name}'"))?,
        None => env_config,
    };
    config.check();

    let output = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let state = Arc::new(AppState::new(config, output));
    let shell = open_shell(&state.config)?;

    match cli.command {
        None => run_shell(state, shell, None).await,
        Some(CliCommand::Practice) => run_shell(state, shell, Some(Command::Practice)).await,
        Some(command) => run_once(shell, command, output).await,
    }
}

/// Logs go to stderr so stdout only carries results
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn open_shell(config: &Config) -> anyhow::Result<Shell> {
    let orchestrator =
        glosa_lang_english::build_orchestrator(config).context("failed to build HTTP client")?;

    let db_path = &config.storage.db_path;
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open word database at {}", db_path.display()))?;
    let book = WordBook::open(orchestrator, Box::new(store)).context("failed to load saved words")?;

    Ok(Shell::new(book))
}

/// Interactive mode: stdin commands in, rendered results out, until `quit`, EOF or Ctrl+C
async fn run_shell(state: Arc<AppState>, shell: Shell, initial: Option<Command>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    if let Some(command) = initial {
        controller.input().send(AppEvent::Command(command)).await?;
    }

    let mut tasks = controller.spawn_tasks(shell);

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
                tasks.abort_all();
                // A pending stdin read blocks runtime teardown
                std::process::exit(0);
            }
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task failed: {e:#}");
                    controller.shutdown();
                    tasks.abort_all();
                }
                Some(Err(e)) if e.is_cancelled() => {}
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                    tasks.abort_all();
                }
            }
        }
    }

    Ok(())
}

/// One-shot subcommands: run, print, exit
async fn run_once(mut shell: Shell, command: CliCommand, output: OutputFormat) -> anyhow::Result<()> {
    let event = match command {
        CliCommand::Lookup { word } => shell.handle(Command::Lookup(word)).await,
        CliCommand::Add { word } => {
            // Saving needs a displayed entry, so resolve first
            match shell.handle(Command::Lookup(word.clone())).await {
                AppEvent::ShowOutcome(LookupOutcome::Found(_)) => {
                    shell.handle(Command::Add(Some(word))).await
                }
                other => other,
            }
        }
        CliCommand::Delete { word } => shell.handle(Command::Delete(Some(word))).await,
        CliCommand::List => shell.handle(Command::List).await,
        CliCommand::Practice | CliCommand::Profile(_) => {
            anyhow::bail!("not a one-shot command")
        }
    };

    if let Some(text) = ui::render(&event, output) {
        println!("{text}");
    }
    Ok(())
}
