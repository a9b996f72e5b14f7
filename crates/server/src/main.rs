use std::sync::Arc;

use clap::Parser;
use tracing::info;

use docsum_server::cli::{self, Cli, Command};
use docsum_server::{app_config, build_router, AppState};

async fn serve(mut config: docsum_core::Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.log_summary();

    if !config.server.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found, frontend will not be served",
            config.server.static_dir.display()
        );
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app_config::init_tracing();

    let args = Cli::parse();
    let config = app_config::load_config();

    match args.command {
        Some(Command::Summarize { path, length }) => {
            let json = cli::summarize_file(&config, &path, length.as_deref())?;
            println!("{json}");
        }
        Some(Command::Serve { host, port }) => serve(config, host, port).await?,
        None => serve(config, None, None).await?,
    }

    Ok(())
}
