//! サーバ設定
//!
//! 設定面はPORT環境変数のみ。それ以外の設定ファイルは持たない。

use std::env;
use std::path::PathBuf;

use crate::error::{DecorAiError, Result};

/// デフォルトの待受ポート
pub const DEFAULT_PORT: u16 = 3000;

/// 配信対象のビルド済みバンドルディレクトリ
pub const DIST_DIR: &str = "dist";

/// サーバ設定
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl Config {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            dist_dir: PathBuf::from(DIST_DIR),
        })
    }

    /// クライアントサイドルーティングのフォールバック先
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| DecorAiError::Config(format!("PORTが不正です: {}", value)))
}
