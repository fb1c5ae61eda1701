//! shopnote-server entry point.

use clap::Parser;
use shopnote_core::{default_log_level, init_logging, Store};
use shopnote_server::build_router;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "shopnote-server",
    about = "HTTP record-keeper for notes and shopping lists"
)]
struct Args {
    /// Address to bind the HTTP listener on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Path to the SQLite database file.
    #[arg(long, default_value = "shopnote.sqlite3")]
    database: PathBuf,

    /// Log level: trace|debug|info|warn|error. Defaults per build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rolling log files. Logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let log_dir = if log_dir.is_absolute() {
            log_dir.clone()
        } else {
            std::env::current_dir()?.join(log_dir)
        };
        let level = args
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level());
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let store = Store::open(&args.database)?;
    log::info!(
        "event=server_start module=server status=ok bind={} database={}",
        args.bind,
        store.path().display()
    );
    let app = build_router(store);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    println!("shopnote-server listening on http://{}", args.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
