/*
 * Responsibility
 * - Load Config -> build the fortune client -> assemble the Router
 * - Apply HTTP middleware (deadline derived from the fortune timeout)
 * - Start axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::fortunes::{FortuneClient, client::build_http_client};
use crate::{api, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set, e.g. RUST_LOG=info,fortune_ui=debug
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
        // Surface panics via tracing; stderr may be hidden depending on the launcher.
        tracing::error!(?info, "panic");

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
        "starting UI in {:?} mode on {} (fortune service: {}, timeout: {:?}, request deadline: {:?})",
        config.app_env,
        config.addr,
        config.fortune_service_name,
        config.fortune_timeout,
        config.request_deadline()
    );

    let state = build_state(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    let http = build_http_client(config.fortune_timeout).context("failed to build HTTP client")?;

    let fortunes = FortuneClient::new(
        http,
        Arc::new(config.registry.clone()),
        config.fortune_service_name.clone(),
        config.fortune_timeout,
    );

    Ok(AppState::new(fortunes, config.greeting.as_str()))
}

pub fn build_router(state: AppState) -> Router {
    let deadline = middleware::http::request_deadline(state.fortunes.timeout());
    middleware::http::apply(api::routes().with_state(state), deadline)
}
