mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tinylink_core::Repository;
use tinylink_gateway::{App, AppState};
use tinylink_generator::{ContentHashGenerator, GeneratorSettings};
use tinylink_redirector::RedirectorService;
use tinylink_shortener::{ShortenerService, ShortenerSettings};
use tinylink_storage::{InMemoryRepository, MySqlRepository};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    tinylink_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        code_length = config.code_length,
        max_random_attempts = config.max_random_attempts,
        "starting gateway server"
    );

    let generator = ContentHashGenerator::new(
        GeneratorSettings::builder()
            .length(config.code_length)
            .digest(config.digest)
            .build(),
    )?;
    let settings = ShortenerSettings::builder()
        .max_random_attempts(config.max_random_attempts)
        .build();

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                config.base_url,
                InMemoryRepository::new(),
                generator,
                settings,
            )
            .await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect_with_max_connections(
                &mysql_dsn,
                config.mysql_max_connections,
            )
            .await?;
            if config.mysql_migrate {
                repository.migrate().await?;
            }
            run_server(
                config.listen_addr,
                config.base_url,
                repository,
                generator,
                settings,
            )
            .await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    base_url: String,
    repository: R,
    generator: ContentHashGenerator,
    settings: ShortenerSettings,
) -> anyhow::Result<()> {
    // One store handle shared by both sides, so redirects see fresh inserts.
    let repository = Arc::new(repository);
    let shortener = ShortenerService::with_settings(Arc::clone(&repository), generator, settings);
    let redirector = RedirectorService::new(repository);
    let state = AppState::new(Arc::new(shortener), Arc::new(redirector), base_url);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
