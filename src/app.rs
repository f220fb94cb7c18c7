/*
 * Responsibility
 * - Config読み込み → Router 組み立て → axum::serve() で起動
 * - Middleware の適用 (RequestId/Trace/CORS/セキュリティヘッダ)
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,stack_demo_backend=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost
        // (stderr can be hidden depending on how the process is launched).
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }));
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    // Development: fail fast on panic. Production: keep serving.
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting backend in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new();
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new().merge(api::routes()).with_state(state);

    let router = middleware::http::apply(router, config);
    let router = middleware::cors::apply(router, config);
    middleware::security_headers::apply(router)
}
