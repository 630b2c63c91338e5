mod app_state;
mod config;
mod models;
mod routes;
mod skill;
pub mod external;
pub use app_state::AppState;
pub use config::Config;

use crate::routes::make_app;
use crate::skill::SkillHandler;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Ticker endpoint: {}", config.ticker_base_url);
    let handler = SkillHandler::from_config(&config)?;
    let app = make_app(Arc::new(AppState { handler }));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("🚀 Server started successfully on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
