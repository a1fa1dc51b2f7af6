//! 静的アセット配信
//!
//! dist/のビルド済みバンドルを配信し、未マッチのパスは
//! index.htmlへフォールバックする（クライアントサイドルーティング対応）。
//! 静的配信以外のHTTPサーフェスは持たない。

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// ルーター構築
pub fn build_router(config: &Config) -> Router {
    let serve_dir =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(config.index_path()));

    Router::new()
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}

/// サーバ起動
pub async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    let router = build_router(&config);
    axum::serve(listener, router).await?;
    Ok(())
}
