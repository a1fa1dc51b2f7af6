//! Decor AI 静的配信サーバ
//!
//! ビルド済みのWebバンドルを配信するだけのサーバ。
//! アプリ本体のロジックはweb-wasm側にある。

pub mod config;
pub mod error;
pub mod server;
