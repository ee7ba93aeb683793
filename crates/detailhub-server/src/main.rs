//! detailhub server
//!
//! - JSON API under /v1 (calls, clients, tasks, users, organization settings)
//! - Bearer-token identity from config
//! - Seeded in-memory document store

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use detailhub_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "detailhub-server failed");
        std::process::exit(1);
    }
}

async fn run() -> detailhub_core::Result<()> {
    let path = std::env::var("DETAILHUB_CONFIG").unwrap_or_else(|_| "detailhub.yaml".into());
    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg.server.listen.parse().map_err(|e| {
        detailhub_core::DashError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
    })?;

    let state = app_state::AppState::new(&cfg).await?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "detailhub-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| detailhub_core::DashError::Internal(format!("bind failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| detailhub_core::DashError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
