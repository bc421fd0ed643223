//! Items server: read config → connect → verify liveness → serve.
//!
//! Run from repo root: `cargo run -p items-server`

use items_api::{app, with_deadline, AppConfig, AppState, ItemStore, PgItemStore};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("items_api=info,items_server=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        database = %config.db.target(),
        user = %config.db.user,
        addr = %config.listen_addr,
        "configuration loaded"
    );

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db.max_connections)
        .acquire_timeout(config.query_timeout)
        .connect_lazy_with(config.db.connect_options());
    let store = PgItemStore::new(pool);

    with_deadline(config.query_timeout, store.ping())
        .await
        .map_err(|e| format!("db ping: {}", e))?;
    if let Err(e) = with_deadline(config.query_timeout, store.ensure_schema()).await {
        tracing::warn!(error = %e, "could not ensure items table; assuming it is managed externally");
    }

    let state = AppState::from_config(Arc::new(store.clone()), &config);
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| format!("listen on {}: {}", config.listen_addr, e))?;
    tracing::info!(
        "server running on {} (connected to {})",
        listener.local_addr()?,
        config.db.target()
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.pool().close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
