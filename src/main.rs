// src/main.rs

use std::sync::Arc;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sage::api::http::http_router;
use sage::config::CONFIG;
use sage::llm::OpenAiClient;
use sage::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "sage", about = "Personalized AI tutoring backend", version)]
struct Args {
    /// Bind host (overrides SAGE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides SAGE_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Sage learning coach");
    info!("Model: {}", CONFIG.model);

    let provider = Arc::new(OpenAiClient::from_env()?);
    let app_state = Arc::new(AppState::new(provider));
    let app = http_router(app_state);

    let host = args.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = args.port.unwrap_or(CONFIG.port);
    let bind_address = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{bind_address}");
    axum::serve(listener, app).await?;

    Ok(())
}
