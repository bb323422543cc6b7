use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use devops_data_api::{
    config::{AppConfig, API_VERSION},
    infrastructure::logger::Logger,
    router::{create_router, ROUTES},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env before anything else, including the log filter.
    let config = AppConfig::load().context("invalid configuration")?;
    Logger::init(config.rust_log.as_deref());

    let addr = config.bind_addr();

    info!(
        version = API_VERSION,
        environment = %config.env,
        "starting DevOps data API"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on http://{}", addr);
    for (method, path) in ROUTES {
        info!("   {:<4} {}", method, path);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl-C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl-C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
