use relay_api::ApiContext;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Starting contact relay API");

    // Configuration is read once here and injected into the handlers.
    let ctx = ApiContext::from_env()?;

    let app = relay_api::router(ctx);

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
