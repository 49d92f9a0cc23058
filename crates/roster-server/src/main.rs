//! # Roster Server
//!
//! Main entry point for the Roster user-account service. Loads layered
//! configuration, selects the entity store backend, and serves the REST API
//! until interrupted.

use roster_config::{AppConfig, ConfigLoader, ObservabilityConfig, StoreBackend, StoreConfig};
use roster_core::{RosterError, RosterResult};
use roster_rest::{create_router, AppState};
use roster_service::{UserService, UserServiceImpl};
use roster_store::{InMemoryUserRepository, RedisUserRepository};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    startup::print_banner();
    info!("Starting {} v{}...", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> RosterResult<()> {
    let user_service = build_user_service(&config.store)?;

    let app_state = AppState::new(user_service);
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    startup::print_startup_info(&addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RosterError::internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the user service over the configured store backend.
fn build_user_service(store: &StoreConfig) -> RosterResult<Arc<dyn UserService>> {
    match store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory entity store");
            Ok(Arc::new(UserServiceImpl::new(Arc::new(
                InMemoryUserRepository::new(),
            ))))
        }
        StoreBackend::Redis => {
            info!("Using Redis entity store at {}", store.redis_url);
            let mut cfg = deadpool_redis::Config::from_url(&store.redis_url);
            cfg.pool = Some(deadpool_redis::PoolConfig::new(store.pool_size));
            let pool = cfg
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .map_err(|e| {
                    RosterError::configuration(format!("Failed to create Redis pool: {}", e))
                })?;
            Ok(Arc::new(UserServiceImpl::new(Arc::new(
                RedisUserRepository::new(pool),
            ))))
        }
    }
}

fn init_logging(observability: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},roster=debug,tower_http=debug",
            observability.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if observability.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
