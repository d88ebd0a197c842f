use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use nmt_config::Config;
use nmt_lang_igala::CorpusLoader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Igala -> English demo translator
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Load the corpus from a JSON file instead of the embedded demo data
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Override the artificial result delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr, the TUI owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(delay_ms) = cli.delay_ms {
        config.result_delay_ms = delay_ms;
    }

    let table = match &cli.corpus {
        Some(path) => CorpusLoader::load_from_file(path)?,
        None => CorpusLoader::load_embedded()?,
    };
    let table = Arc::new(table);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(table);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;

    Ok(())
}
