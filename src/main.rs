use axum::http::{HeaderValue, Method};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{fmt, EnvFilter};

mod controllers;
mod db;
mod models;
mod routes;
mod state;
mod templates;
mod utils;

use db::mongo_store::MongoPollStore;
use utils::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let database = match db::connection::init_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = state::AppState::new(Arc::new(MongoPollStore::new(&database)));

    let mut app = routes::build_router(app_state);

    if let Some(cors_origin) = &config.cors_origin {
        let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
            tracing::error!("Failed to parse CORS origin: {}", cors_origin);
            std::process::exit(1);
        });

        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT]);

        app = app.layer(cors);
        tracing::info!(origin = %cors_origin, "CORS enabled");
    }

    let listener = match tokio::net::TcpListener::bind(config.server_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", config.server_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.server_addr, "Server running");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
