// main.rs — process bootstrap: flags, logging, listener wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;

use taskd::rest;
use taskd::service::TaskService;
use taskd::store::MemoryTaskStore;
use taskd::AppContext;

#[derive(Parser)]
#[command(name = "taskd", about = "In-memory task-tracking REST backend", version)]
struct Args {
    /// HTTP listen port
    #[arg(long, env = "TASKD_PORT", default_value_t = 8080)]
    port: u16,

    /// Bind address (use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKD_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log.as_str())
        .compact()
        .init();

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;

    // Store → service → router, leaves first.
    let store = Arc::new(MemoryTaskStore::new());
    let service = TaskService::new(store);
    let ctx = Arc::new(AppContext::new(service));

    rest::start_rest_server(ctx, addr).await
}
