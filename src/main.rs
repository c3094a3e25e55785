//! hash-router: replay locations against a route table.
//!
//! Loads a TOML route table, starts a router over an in-memory history and
//! reads locations from stdin, one per line:
//!
//! ```text
//! https://app/#/pages/5/   visit a URL
//! #/pages/                 visit a fragment
//! /pages/7/                visit a bare token
//! back | forward           move through history
//! quit                     stop
//! ```
//!
//! Every dispatch is printed to stdout as a JSON line.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use hash_router::config::load_config;
use hash_router::observability::{logging::init_logging, metrics};
use hash_router::{HandlerError, HistoryHandle, MemoryHistory, RouteInfo, Router, RouterConfig};

#[derive(Parser)]
#[command(name = "hash-router")]
#[command(about = "Dispatch location fragments against a route table", long_about = None)]
struct Cli {
    /// Route table (TOML). Without it every token is unmatched.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the initial token from the route table.
    #[arg(short, long)]
    initial: Option<String>,

    /// Navigate to this token right after start.
    #[arg(short, long)]
    navigate: Option<String>,

    /// Validate the route table and exit.
    #[arg(long)]
    check: bool,
}

/// Handler target: prints dispatches.
#[derive(Default)]
struct Console {
    dispatched: u64,
}

#[derive(Serialize)]
struct DispatchLine<'a> {
    #[serde(flatten)]
    info: &'a RouteInfo,
    args: &'a [String],
}

impl Console {
    fn print(&mut self, info: &RouteInfo, args: &[String]) -> Result<(), HandlerError> {
        self.dispatched += 1;
        println!("{}", serde_json::to_string(&DispatchLine { info, args })?);
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    init_logging(&config.observability)?;
    metrics::describe_metrics();

    if cli.check {
        tracing::info!(routes = config.routes.len(), "Route table is valid");
        return Ok(());
    }

    let initial = cli
        .initial
        .clone()
        .unwrap_or_else(|| config.history.initial_token.clone());
    let (history, handle) = MemoryHistory::new(initial);

    let mut router: Router<Console, MemoryHistory> = Router::new(history);
    router.add_routes(&config.routes)?;
    for action in config.actions() {
        router.on(action, Console::print);
    }
    router.on_not_found(|console: &mut Console, info| console.print(info, &[]));

    let mut console = Console::default();
    router.start(&mut console).await?;

    if let Some(token) = &cli.navigate {
        router.navigate(token)?;
    }

    tokio::spawn(read_locations(handle));
    router.run(&mut console).await?;

    tracing::info!(dispatched = console.dispatched, "Shutdown complete");
    Ok(())
}

/// Feed stdin lines into the history until EOF or `quit`.
async fn read_locations(handle: HistoryHandle) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stdin");
                break;
            }
        };

        let sent = match line.trim() {
            "back" => handle.back(),
            "forward" => handle.forward(),
            "quit" | "exit" => break,
            location => handle.visit(location),
        };
        if sent.is_err() {
            return;
        }
    }

    if let Err(e) = handle.close() {
        tracing::debug!(error = %e, "History already closed");
    }
}
