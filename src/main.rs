//! Point Service binary
//!
//! Serves the point wallet HTTP API backed by in-memory stores.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --listen 0.0.0.0:8080
//! ```
//!
//! # Endpoints
//!
//! - `GET  /point/{id}` - current balance (404 for unknown users)
//! - `GET  /point/histories/{id}` - point history, oldest first
//! - `PATCH /point/charge/{id}` - charge points (body: JSON integer)
//! - `PATCH /point/use/{id}` - use points (body: JSON integer)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (address already in use, invalid arguments, etc.)

use point_service::cli;
use point_service::core::InMemoryPointService;
use point_service::http::{create_router, AppState};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,point_service=info")),
        )
        .init();

    let args = cli::parse_args();

    let state = AppState::new(InMemoryPointService::in_memory());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(args.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %args.listen, error = %e, "failed to bind");
            process::exit(1);
        }
    };

    info!(addr = %args.listen, "point service listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        process::exit(1);
    }
}
