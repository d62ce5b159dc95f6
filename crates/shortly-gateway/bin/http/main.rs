mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use shortly_core::LinkStore;
use shortly_gateway::{App, AppState};
use shortly_hasher::{HasherSettings, SaltedHasher};
use shortly_redirector::RedirectorService;
use shortly_shortener::ShortenerService;
use shortly_storage::{InMemoryLinkStore, StorageBackend};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    shortly_telemetry::init(config.log_format)?;

    let selection = StorageBackend::select(&config.storage);
    if let Some(requested) = &selection.fallback_from {
        warn!(
            requested = %requested,
            storage_backend = %selection.backend,
            "unknown storage backend, falling back"
        );
    }

    let generator = SaltedHasher::new(
        HasherSettings::builder()
            .min_length(config.min_length)
            .build(),
    )?;
    let default_host = format!("localhost:{}", config.port);

    let state = match selection.backend {
        StorageBackend::InMemory => build_state(InMemoryLinkStore::new(), generator, default_host),
    };

    let listen_addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    info!(
        listen_addr = %listener.local_addr()?,
        storage_backend = %selection.backend,
        "starting shortly server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn build_state<S: LinkStore + Clone>(
    store: S,
    generator: SaltedHasher,
    default_host: String,
) -> AppState {
    let shortener = ShortenerService::new(store.clone(), generator);
    let redirector = RedirectorService::new(store);
    AppState::new(Arc::new(shortener), Arc::new(redirector), default_host)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
