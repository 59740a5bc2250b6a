use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use hoverdict_config::Config;
use hoverdict_core::hover::HoverProvider;
use hoverdict_core::store::DictStore;
use hoverdict_fetch::DatasetFetcher;

mod document;
mod events;
mod io;
mod state;
mod status;

use self::state::AppState;
use self::status::LogStatus;

#[derive(Parser)]
#[command(name = "hoverdict", about = "English-Chinese hover dictionary over stdio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Download the dictionary dataset if it is not cached yet
    Fetch,
    /// Resolve a single span and print the hover body
    Lookup {
        text: String,
        /// Cursor offset inside the span, in characters
        #[arg(long, default_value_t = 0)]
        cursor: u32,
    },
    /// Serve hover requests over stdio (default)
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::new();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Fetch => {
            let fetcher = DatasetFetcher::new();
            let path = fetcher.ensure_dataset(&config.dataset, &LogStatus).await?;
            tracing::info!("Dataset ready at {}", path.display());
        }
        Command::Lookup { text, cursor } => {
            let store = activate(&config).await?;
            let provider = HoverProvider::new(store);
            match provider.hover_for_span(&text, cursor as usize) {
                Some(hover) => println!("{}", hover.contents.value),
                None => tracing::info!("No dictionary entry under '{text}'"),
            }
        }
        Command::Serve => {
            let store = activate(&config).await?;
            let state = Arc::new(AppState::new(config, store));
            run(state).await?;
        }
    }

    Ok(())
}

/// Activation: cache the dataset, then build the store before any lookup is
/// served. A download or load failure aborts the session loudly.
async fn activate(config: &Config) -> anyhow::Result<Arc<DictStore>> {
    let fetcher = DatasetFetcher::new();
    let path = fetcher.ensure_dataset(&config.dataset, &LogStatus).await?;

    let store = DictStore::load_from_file(&path).await?;
    tracing::info!("Loaded {} dictionary entries", store.len());
    Ok(Arc::new(store))
}

async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let (request_tx, request_rx) = kanal::bounded_async::<events::AppEvent>(64);
    let cancel = CancellationToken::new();

    let watch_cancel = cancel.child_token();
    tokio::spawn(async move {
        if let Err(e) = io::watch_stdin(watch_cancel, request_tx).await {
            tracing::error!("stdin watcher exited: {e}");
        }
    });

    let server_state = Arc::clone(&state);
    let mut server = tokio::spawn(events::event_loop(server_state, request_rx));

    let finished = tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            cancel.cancel();
            false
        }
        result = &mut server => {
            report_server_exit(result);
            true
        }
    };

    if !finished {
        // cancelled: the event loop drains queued requests before finishing
        report_server_exit(server.await);
    }

    Ok(())
}

fn report_server_exit(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => tracing::info!("Event loop finished"),
        Ok(Err(e)) => tracing::error!("Event loop exited: {e}"),
        Err(e) => tracing::error!("Event loop panicked: {e}"),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // responses go to stdout, logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
