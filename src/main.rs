//! Satya HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use satya::cache::CachedScorer;
use satya::config::{Config, ScorerBackend};
use satya::gateway::{HandlerState, create_router_with_state};
use satya::registry::SourceRegistry;
use satya::scoring::{ContentScorer, HeuristicScorer, LlmScorer};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
███████╗ █████╗ ████████╗██╗   ██╗ █████╗
██╔════╝██╔══██╗╚══██╔══╝╚██╗ ██╔╝██╔══██╗
███████╗███████║   ██║    ╚████╔╝ ███████║
╚════██║██╔══██║   ██║     ╚██╔╝  ██╔══██║
███████║██║  ██║   ██║      ██║   ██║  ██║
╚══════╝╚═╝  ╚═╝   ╚═╝      ╚═╝   ╚═╝  ╚═╝

        CHECK THE SOURCE. READ THE TEXT.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        scorer = %config.scorer,
        "Satya starting"
    );

    let registry = match &config.registry_path {
        Some(path) => SourceRegistry::from_json_file(path)?,
        None => SourceRegistry::builtin()?,
    };
    tracing::info!(sources = registry.len(), "Source registry loaded");

    let scorer = build_scorer(&config);

    let state = HandlerState::new(Arc::new(registry), scorer, config.policy)
        .with_max_content_chars(config.max_content_chars);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Satya shutdown complete");
    Ok(())
}

fn build_scorer(config: &Config) -> Arc<dyn ContentScorer> {
    match config.scorer {
        ScorerBackend::Llm => {
            tracing::info!(
                model = %config.model,
                timeout_secs = config.scorer_timeout_secs,
                cache_capacity = config.cache_capacity,
                "Using model-backed content scorer"
            );
            let scorer = LlmScorer::new(config.model.clone(), config.scorer_timeout());
            Arc::new(CachedScorer::new(scorer, config.cache_capacity))
        }
        ScorerBackend::Heuristic => {
            tracing::warn!("Running content scorer in heuristic mode, no model will be called");
            Arc::new(HeuristicScorer::new())
        }
    }
}

async fn run_health_check() -> i32 {
    let port = std::env::var("SATYA_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
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
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
