use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_admin::{create_router, AdminState};
use session_cell::FileSessionStorage;
use shared_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic admin dashboard");

    // Load configuration
    let config = AppConfig::from_env();
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid ADMIN_LISTEN_ADDR: {}", config.listen_addr))?;

    // Restore the persisted session and, if logged in, the directory
    let storage = Arc::new(FileSessionStorage::new(&config.session_file));
    let state = Arc::new(AdminState::new(config, storage));
    state.bootstrap().await;

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
