use std::sync::Arc;

use axum::{http::HeaderValue, Server};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use todo_api::{
    config::{Config, StoreKind},
    route::create_router,
    store::{MemoryStore, SqliteStore, TodoStore},
    AppState,
};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

// Entry point of the application
#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn TodoStore> = match config.store {
        StoreKind::Memory => {
            tracing::info!("using in-memory todo store");
            Arc::new(MemoryStore::new())
        }
        StoreKind::Sqlite => match SqliteStore::connect(&config.database_url).await {
            Ok(store) => {
                tracing::info!(url = %config.database_url, "connected to sqlite todo store");
                Arc::new(store)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to connect to the database");
                std::process::exit(1);
            }
        },
    };

    let cors_origin = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(err) => {
            tracing::error!(error = %err, origin = %config.cors_origin, "invalid CORS origin");
            std::process::exit(1);
        }
    };

    let app = create_router(Arc::new(AppState { store }), cors_origin);

    let addr = config.addr();
    let server = match Server::try_bind(&addr) {
        Ok(server) => server,
        Err(err) => {
            tracing::error!(error = %err, %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "server started");

    if let Err(err) = server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}
