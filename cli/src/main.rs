//! Entrypoint for the interview orchestrator
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP surface.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use interview_application::{ConductInterviewUseCase, GenerationClient};
use interview_infrastructure::config::FileLoggingConfig;
use interview_infrastructure::{
    ConfigLoader, FileConfig, JsonlAttemptLogger, UuidSessionIdGenerator, build_gateway,
};
use interview_presentation::{Cli, InterviewState, router};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags override every config source
    if !cli.model.is_empty() {
        config.models.candidates = cli.model.clone();
    }
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }

    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    info!("Starting interview-orchestrator v{}", env!("CARGO_PKG_VERSION"));

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration; see errors above");
    }
    if !config.server.route.starts_with('/') {
        bail!("server.route must start with '/': {}", config.server.route);
    }

    let (models, _) = config.models.parse_candidates();
    let policy = config.retry.to_policy();
    info!(
        "Models: {} ({} round(s), base delay {:?}, call timeout {:?})",
        models
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        policy.max_attempts,
        policy.base_delay,
        policy.call_timeout
    );

    // === Dependency Injection ===
    let gateway = Arc::new(build_gateway(&config.provider)?);

    let mut client = GenerationClient::new(gateway, models).with_policy(policy);
    if let Some(path) = &config.logging.attempt_log
        && let Some(logger) = JsonlAttemptLogger::new(path)
    {
        info!("Writing generation attempts to {}", logger.path().display());
        client = client.with_notifier(Arc::new(logger));
    }

    let use_case = ConductInterviewUseCase::new(client, Arc::new(UuidSessionIdGenerator));
    let app = router(Arc::new(InterviewState::new(use_case)), &config.server.route);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!(
        "Listening on http://{}{}",
        listener.local_addr()?,
        config.server.route
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins, then `-v`, then `[logging] level`. The returned guard
/// must live as long as the process so the file writer flushes.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match (EnvFilter::try_from_default_env(), verbose) {
        (Ok(filter), _) => filter,
        (Err(_), 0) => EnvFilter::new(logging.level.as_deref().unwrap_or("warn")),
        (Err(_), 1) => EnvFilter::new("info"),
        (Err(_), 2) => EnvFilter::new("debug"),
        (Err(_), _) => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("logging.file has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
