// main.rs - Game of Life HTTP service startup

use anyhow::Context;

// Compile-time service configuration
const BIND_ADDR: &str = "127.0.0.1:8080"; // Listen address for the HTTP server

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .with_context(|| format!("failed to bind {BIND_ADDR}"))?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, life_api::app())
        .await
        .context("server error")?;

    Ok(())
}
