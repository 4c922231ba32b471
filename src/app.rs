/*
 * Responsibility
 * - Load Config -> build the fortune store -> assemble the Router
 * - Apply HTTP middleware
 * - Start axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, StoreBackend};
use crate::repos::fortune::{FortuneStore, MemoryFortuneStore, PgFortuneStore};
use crate::{api, middleware, state::AppState};

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,fortune_service=debug,tower_http=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so the panic is noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting fortune service in {:?} mode on {} (store: {})",
        config.app_env,
        config.addr,
        config.store.name()
    );

    let store = build_store(&config.store).await?;
    let app = build_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_store(backend: &StoreBackend) -> Result<Arc<dyn FortuneStore>> {
    let store: Arc<dyn FortuneStore> = match backend {
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => Arc::new(
            PgFortuneStore::connect(database_url, *max_connections)
                .await
                .context("failed to connect to the fortune database")?,
        ),
        StoreBackend::Memory => Arc::new(MemoryFortuneStore::seeded()),
    };

    tracing::debug!(backend = store.backend_name(), "fortune store ready");
    Ok(store)
}

pub fn build_router(state: AppState) -> Router {
    middleware::http::apply(api::routes().with_state(state))
}
