use anyhow::Context;

use pricepreview_api::{app, config::ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pricepreview_observability::init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let catalog = app::services::load_catalog(&config).context("failed to load product catalog")?;

    let app = app::build_app(catalog, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
