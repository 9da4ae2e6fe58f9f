use clap::Parser;
use searchlab_core::config;
use searchlab_core::engine::SearchEngine;
use searchlab_core::store::StrategyEngine;
use searchlab_core::strategy::{Jitter, Strategy};
use searchlab_server::api::create_router;
use searchlab_server::api::handlers::AppState;
use searchlab_server::api::metrics;
use searchlab_server::catalog;
use searchlab_server::media::MediaMocks;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "search-lab", about = "Multi-strategy search comparison service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Strategy used when no explicit one is requested
    #[arg(long, default_value = "keyword")]
    default_strategy: Strategy,

    /// Fix the semantic jitter seed for reproducible scores
    #[arg(long)]
    jitter_seed: Option<u64>,

    /// Disable semantic jitter entirely
    #[arg(long, default_value_t = false)]
    no_jitter: bool,

    /// Skip seeding the demo product catalog
    #[arg(long, default_value_t = false)]
    no_demo_data: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "searchlab_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "searchlab_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    let jitter = if args.no_jitter {
        Jitter::Disabled
    } else if let Some(seed) = args.jitter_seed {
        Jitter::Seeded(seed)
    } else {
        Jitter::Entropy
    };

    let engine = StrategyEngine::new(args.default_strategy, jitter.clone());
    if !args.no_demo_data {
        let products = catalog::demo_products();
        tracing::info!(count = products.len(), "Seeding demo catalog");
        engine.index(products);
    }

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let state = AppState {
        engine: engine.clone(),
        media: MediaMocks::new(jitter),
        prometheus_handle,
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", args.port);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        default_strategy = %args.default_strategy,
        documents = engine.document_count(),
        "search-lab ready"
    );

    // Spawn engine metrics background task
    let metrics_engine = engine.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(15));
        loop {
            interval.tick().await;
            metrics::update_engine_metrics(&metrics_engine);
        }
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
