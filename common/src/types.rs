//! 共有型定義
//!
//! サーバとWeb(WASM)で共有される型:
//! - ShoppingListItem: 商品リンク検索の結果（品名 + 購入URL）
//! - Source: 検索グラウンディングの出典

use serde::{Deserialize, Serialize};

/// 商品リンク検索の結果1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShoppingListItem {
    pub item: String,
    pub url: String,
}

/// グラウンディングの出典
///
/// Web出典が無いチャンクも返ってくるため `web` はOption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    pub web: Option<WebSource>,
}

/// Web出典（URIとページタイトル）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSource {
    pub uri: String,
    pub title: String,
}

impl Source {
    /// 表示可能な出典か（URIを持つWeb出典のみ表示対象）
    pub fn has_web_uri(&self) -> bool {
        self.web.as_ref().is_some_and(|w| !w.uri.is_empty())
    }
}
