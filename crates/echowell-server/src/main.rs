mod config;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing::info;

use echowell_api::state::AppStateInner;
use echowell_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "echowell_server=debug,echowell_api=debug,echowell_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    // The database must be open before any route can be built
    let db = Database::open(&config.db_path)
        .with_context(|| format!("Could not open database at {}", config.db_path.display()))?;
    let state = AppStateInner::new(db);

    let app = echowell_api::router(state, &config.public_dir).layer(TraceLayer::new_for_http());

    info!("Serving pages from {}", config.public_dir.display());
    info!("Echowell server listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                tracing::warn!("Could not install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
