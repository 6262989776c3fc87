use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use crate::app::create_app;
use crate::configs::Settings;
use crate::services::{HttpFetcher, PollService};

pub mod app;
pub mod configs;
pub mod errors;
pub mod handles;
pub mod services;

pub async fn run(settings: &Arc<Settings>) -> anyhow::Result<()> {
    let fetcher = Arc::new(HttpFetcher::new(settings.upstream.clone()));
    let (poll_service, board) = PollService::new(fetcher, settings.poll.period());
    let poller = poll_service.start();

    let app = create_app(settings, board);

    let address = settings.server.address()?;

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("listening on {:?}", address);

    // Stopping the poller closes every open event stream, which lets the
    // server drain.
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            poller.stop().await;
        })
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
