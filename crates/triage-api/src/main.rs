use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use triage_api::server;

#[derive(Parser, Debug)]
#[command(
    name = "triage-api",
    version,
    about = "Read-only query API over the build-failure store"
)]
struct Args {
    #[arg(long, default_value = "triage.db", env = "TRIAGE_DB")]
    db: PathBuf,

    #[arg(long, default_value = "0.0.0.0:5050", env = "TRIAGE_API_ADDR")]
    addr: SocketAddr,
}

use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = std::env::var("TRIAGE_LOG").unwrap_or_else(|_| "info".to_string());
    init_logging(&log_level);

    tracing::info!(event = "api_start", db = ?args.db, addr = %args.addr);

    server::serve(&args.db, args.addr).await
}
