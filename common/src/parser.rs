//! APIレスポンスパーサー
//!
//! Gemini APIのレスポンスからJSONを抽出し、
//! 買い物リスト・商品リンクの結果をパースする

use crate::error::{Error, Result};
use crate::types::ShoppingListItem;

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の [...] 配列
/// 3. 生の {...} オブジェクト
/// 4. エラー
///
/// # Arguments
/// * `response` - APIレスポンス文字列
///
/// # Returns
/// * `Ok(&str)` - 抽出されたJSON文字列
/// * `Err` - JSONが見つからない場合
///
/// # Examples
/// ```
/// use decor_ai_common::extract_json;
///
/// let response = "[{\"item\": \"Candles\", \"url\": \"https://example.com\"}]";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("Candles"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の [...] を探す
    if let Some(start) = response.find('[') {
        if let Some(end) = response.rfind(']') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 買い物リストのテキストを行単位のアイテムに分解
///
/// 行の扱い:
/// - `- ` / `* ` で始まる行はマーカー2文字を除いてアイテム
/// - それ以外の空でない行もそのままアイテム
/// - 空行は無視
pub fn shopping_list_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
                Some(rest.trim().to_string())
            } else if !trimmed.is_empty() {
                Some(trimmed.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// 商品リンク検索のレスポンスをパース
///
/// レスポンステキストからJSON配列を抽出し、ShoppingListItemの配列に変換する。
/// `item` が空の要素は除外する。
pub fn parse_product_links(response: &str) -> Result<Vec<ShoppingListItem>> {
    let json_str = extract_json(response)?;
    let links: Vec<ShoppingListItem> = serde_json::from_str(json_str)?;
    Ok(links.into_iter().filter(|l| !l.item.is_empty()).collect())
}
