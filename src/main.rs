//! Token issuance service for ZEGO client SDKs.
//!
//! Requires `ZEGO_APP_ID` and `ZEGO_SERVER_SECRET`; see [`ServerConfig`].

use anyhow::Context;
use tokio::net::TcpListener;
use zego_token::{init_tracing, router, AppState, ServerConfig, Token04Issuer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("zego_token=info,zego_token_server=info,warn");

    let config = ServerConfig::from_env().context("failed to load configuration")?;
    let addr = config.socket_addr();
    let app_id = config.app_id;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, app_id, "token server listening");
    tracing::info!("token endpoint: http://{addr}/api/zego/token");

    axum::serve(listener, router(AppState::new(config, Token04Issuer)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("token server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
