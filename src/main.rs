//! Numeric API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::listener ──▶ http::server ──▶ routing::router
//!                                                            │
//!                                           RouteKind + token│
//!                                                            ▼
//!                                                    http::argument
//!                                                            │
//!                                                  i64 (or 400)
//!                                                            ▼
//!                                   resilience::timeouts ──▶ compute::Compute
//!                                                            │
//!     Client Response                                        ▼
//!     ◀────────────────────────────────────────────── http::response
//! ```

use clap::Parser;
use std::path::PathBuf;

use numeric_api::config::{load_config, ServiceConfig};
use numeric_api::http::HttpServer;
use numeric_api::lifecycle::{trigger_on_signal, Shutdown};
use numeric_api::{net, observability};

#[derive(Parser)]
#[command(name = "numeric-api")]
#[command(about = "Parity, primality and factorial over HTTP", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address (e.g. 127.0.0.1:8000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    observability::logging::init(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "numeric-api starting");
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    trigger_on_signal(shutdown);

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
