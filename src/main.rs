use decor_ai::config::Config;
use decor_ai::error::Result;
use decor_ai::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // 起動時診断
    info!("dist path: {}", config.dist_dir.display());
    info!("index path: {}", config.index_path().display());
    if !config.index_path().exists() {
        warn!("index.html not found; build the web bundle into dist/ first");
    }

    server::serve(config).await
}
