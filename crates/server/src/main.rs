//! Loan advisor server entry point.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use loan_advisor_agent::ConversationEngine;
use loan_advisor_config::{load_settings, CatalogConfig, Settings};
use loan_advisor_core::ProductCatalog;
use loan_advisor_llm::{OpenAiBackend, OpenAiConfig};
use loan_advisor_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("LOAN_ADVISOR_ENV").ok();
    // Logging is not up yet, early failures go to stderr
    let settings = load_settings(env.as_deref()).unwrap_or_else(|e| {
        eprintln!("warning: could not load configuration ({e}), continuing with defaults");
        Settings::default()
    });

    init_tracing(&settings);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = env.as_deref().unwrap_or("default"),
        "Starting loan advisor server"
    );

    let catalog = Arc::new(CatalogConfig::default().build());
    tracing::info!(products = catalog.len(), "Loaded loan product catalog");

    let engine = build_engine(&settings, Arc::clone(&catalog));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let state = AppState::new(settings, engine, catalog);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Build the conversation engine, attaching the hosted model if configured.
fn build_engine(settings: &Settings, catalog: Arc<ProductCatalog>) -> ConversationEngine {
    if !settings.llm.enabled || settings.llm.api_key.is_empty() {
        tracing::info!("No language model configured, replies will be rule-based");
        return ConversationEngine::new(catalog);
    }

    let config = OpenAiConfig::new(settings.llm.api_key.clone())
        .with_model(settings.llm.model.clone())
        .with_base_url(settings.llm.base_url.clone())
        .with_timeout(Duration::from_secs(settings.llm.timeout_seconds));

    match OpenAiBackend::new(config) {
        Ok(backend) => {
            tracing::info!(model = %settings.llm.model, "Language model attached");
            ConversationEngine::with_llm(catalog, Arc::new(backend))
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Could not initialize language model, replies will be rule-based"
            );
            ConversationEngine::new(catalog)
        }
    }
}

/// Wire up the tracing subscriber from the observability settings.
fn init_tracing(settings: &Settings) {
    let default_filter = format!(
        "loan_advisor={},tower_http=debug",
        settings.observability.log_level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Resolve once Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("ctrl-c handler failed to install");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler failed to install")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
