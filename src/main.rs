use anyhow::Context;
use bargain::api::create_router;
use bargain::config::CONFIG;
use bargain::search::SearchEngine;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(version, about = "Price comparison search demo service")]
struct Args {
    /// Address to bind (defaults to HOST or 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (defaults to PORT or 8000)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let host = args.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = args.port.unwrap_or(CONFIG.port);

    let search_engine = Arc::new(SearchEngine::from_config());
    let app = create_router(search_engine, &CONFIG.cors_origins);

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("price aggregator listening on http://{addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
