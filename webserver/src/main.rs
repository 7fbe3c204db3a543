//! Tweet arena webserver entry point

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use arena::{Arena, ArenaConfig, FileLedger, HttpLedger, HttpLedgerConfig, ItemStore, VoteStore};
use clap::{Parser, ValueEnum};
use shared::logging;
use tracing::info;

use webserver::{WebServer, WebServerError, WebServerResult};

/// Where items and votes are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Local JSON-lines files
    File,
    /// Remote spreadsheet ledger
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Pairwise tweet comparison server")]
struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, value_enum, default_value_t = Backend::File)]
    backend: Backend,

    #[arg(long, default_value = "./data/items.jsonl")]
    items_file: PathBuf,

    #[arg(long, default_value = "./data/votes.jsonl")]
    votes_file: PathBuf,

    /// Base URL of the remote ledger API
    #[arg(long, default_value = "http://127.0.0.1:8787")]
    ledger_url: String,

    #[arg(long, default_value = "HotOrNotTweets")]
    workbook: String,

    #[arg(long, default_value = "Tweets")]
    items_sheet: String,

    #[arg(long, default_value = "Votes")]
    votes_sheet: String,

    /// How long a fetched item set is served before refetching
    #[arg(long, default_value = "300")]
    cache_ttl_secs: u64,

    /// Upper bound on any single ledger call
    #[arg(long, default_value = "10")]
    store_timeout_secs: u64,
}

fn build_ledgers(args: &Args) -> WebServerResult<(Arc<dyn ItemStore>, Arc<dyn VoteStore>)> {
    match args.backend {
        Backend::File => {
            let ledger = Arc::new(FileLedger::new(&args.items_file, &args.votes_file));
            info!(
                "Using file ledger: items={}, votes={}",
                args.items_file.display(),
                args.votes_file.display()
            );
            Ok((ledger.clone(), ledger))
        }
        Backend::Http => {
            let config = HttpLedgerConfig {
                base_url: args.ledger_url.clone(),
                workbook: args.workbook.clone(),
                items_sheet: args.items_sheet.clone(),
                votes_sheet: args.votes_sheet.clone(),
                api_token: std::env::var("LEDGER_API_TOKEN").ok().filter(|t| !t.is_empty()),
                timeout: Duration::from_secs(args.store_timeout_secs),
            };
            let ledger = Arc::new(HttpLedger::new(config)?);
            info!("Using remote ledger at {} ({})", args.ledger_url, args.workbook);
            Ok((ledger.clone(), ledger))
        }
    }
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {}", e)))?;

    let (items, votes) = build_ledgers(&args)?;
    let config = ArenaConfig::from_secs(args.cache_ttl_secs, args.store_timeout_secs);
    let arena = Arena::new(items, votes, config)?;

    let server = WebServer::new(arena, bind_address);
    if let Err(e) = server.run().await {
        logging::log_error("webserver", "server exited", &e);
        return Err(e);
    }

    Ok(())
}
