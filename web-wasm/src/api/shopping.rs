//! Gemini API連携（買い物リスト生成・商品リンク検索）

use wasm_bindgen::prelude::*;

use crate::api::gemini::{
    call_gemini, image_part, response_text, Content, GeminiRequest, GenerationConfig, GoogleSearch,
    Part, Tool, TEXT_MODEL,
};
use decor_ai_common::{
    build_product_links_prompt, build_shopping_list_prompt, parse_product_links, ShoppingListItem,
    Source,
};

/// 買い物リスト生成
///
/// 元画像とデコレーション後画像の2枚を比較させ、追加された装飾の
/// リストをプレーンテキストで返す
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `original_data_url` - 元画像のData URL
/// * `generated_data_url` - デコレーション後画像のData URL
pub async fn generate_shopping_list(
    api_key: &str,
    original_data_url: &str,
    generated_data_url: &str,
) -> Result<String, JsValue> {
    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                image_part(original_data_url)?,
                image_part(generated_data_url)?,
                Part::Text {
                    text: build_shopping_list_prompt(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.4,
            response_modalities: None,
        },
        tools: None,
    };

    let response = call_gemini(api_key, TEXT_MODEL, &request).await?;
    response_text(&response)
}

/// 商品リンク検索
///
/// 買い物リストの各アイテムを検索グラウンディング付きで購入可能な
/// リンクに解決し、{item, url} の配列と出典を返す
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `shopping_list` - 生成済みの買い物リストテキスト
/// * `theme_prompt` - 元のデコレーション指示
pub async fn find_product_links(
    api_key: &str,
    shopping_list: &str,
    theme_prompt: &str,
) -> Result<(Vec<ShoppingListItem>, Vec<Source>), JsValue> {
    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![Part::Text {
                text: build_product_links_prompt(shopping_list, theme_prompt),
            }],
        }],
        // 検索ツール併用時はresponseMimeTypeを指定できないため、
        // レスポンステキストからJSONを抽出してパースする
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_modalities: None,
        },
        tools: Some(vec![Tool {
            google_search: GoogleSearch {},
        }]),
    };

    let response = call_gemini(api_key, TEXT_MODEL, &request).await?;

    let text = response_text(&response)?;
    let links = parse_product_links(&text)
        .map_err(|e| JsValue::from_str(&format!("Link parse error: {}", e)))?;

    let sources = response
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|m| m.grounding_chunks.clone())
        .unwrap_or_default();

    Ok((links, sources))
}
