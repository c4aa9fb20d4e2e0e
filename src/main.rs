use tradelens::api::router::create_router;
use tradelens::config::AppConfig;
use tradelens::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = tradelens::metrics::init_metrics()?;

    if config.auth_enabled() {
        tracing::info!("API token configured, /api routes require a bearer token");
    } else {
        tracing::warn!("API_TOKEN not set, /api routes are unauthenticated");
    }
    tracing::info!(
        language = %config.default_language,
        currency = %config.currency_symbol,
        "Display defaults loaded"
    );

    let state = AppState {
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
