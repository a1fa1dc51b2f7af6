//! Gemini API連携（画像編集）
//!
//! リクエスト/レスポンス型と共通のfetch処理、Data URLユーティリティ。
//! 買い物リスト生成・商品リンク検索はshopping.rs側。

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use decor_ai_common::{build_decorate_prompt, Source};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// 画像編集に使うモデル
pub const IMAGE_EDIT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// テキスト生成（リスト生成・リンク検索）に使うモデル
pub const TEXT_MODEL: &str = "gemini-2.5-flash";

/// Gemini APIリクエスト
#[derive(Serialize)]
pub(crate) struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

#[derive(Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub(crate) enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    /// 画像編集では ["IMAGE", "TEXT"] を指定する
    #[serde(rename = "responseModalities", skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

/// 検索グラウンディング用ツール指定
#[derive(Serialize)]
pub(crate) struct Tool {
    #[serde(rename = "googleSearch")]
    pub google_search: GoogleSearch,
}

#[derive(Serialize)]
pub(crate) struct GoogleSearch {}

/// Gemini APIレスポンス
#[derive(Deserialize)]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
pub(crate) struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
    pub inline_data: Option<ResponseInlineData>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ResponseInlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GroundingMetadata {
    pub grounding_chunks: Vec<Source>,
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Data URLを画像パートに変換
pub(crate) fn image_part(data_url: &str) -> Result<Part, JsValue> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;
    let mime_type = extract_mime_type_from_data_url(data_url);
    Ok(Part::InlineData {
        inline_data: InlineData {
            mime_type: mime_type.to_string(),
            data: base64_data.to_string(),
        },
    })
}

/// Gemini API呼び出し（共通処理）
pub(crate) async fn call_gemini(
    api_key: &str,
    model: &str,
    request: &GeminiRequest,
) -> Result<GeminiResponse, JsValue> {
    let url = format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, model, api_key);
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response)
}

/// レスポンスの全テキストパートを連結して返す
pub(crate) fn response_text(response: &GeminiResponse) -> Result<String, JsValue> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(JsValue::from_str("Empty response"));
    }
    Ok(text)
}

/// 画像編集実行
///
/// 編集対象の画像と指示テキストを送信し、編集後の画像をData URLで返す
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `image_data_url` - 編集対象画像（元画像または前回の生成画像）のData URL
/// * `prompt` - ユーザーのテーマ・指示
///
/// # Returns
/// 編集後画像のData URL
pub async fn edit_image(
    api_key: &str,
    image_data_url: &str,
    prompt: &str,
) -> Result<String, JsValue> {
    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                image_part(image_data_url)?,
                Part::Text {
                    text: build_decorate_prompt(prompt),
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.4,
            response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
        },
        tools: None,
    };

    let response = call_gemini(api_key, IMAGE_EDIT_MODEL, &request).await?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.iter().find_map(|p| p.inline_data.as_ref()))
        .map(|inline| format!("data:{};base64,{}", inline.mime_type, inline.data))
        .ok_or_else(|| JsValue::from_str("No image in response"))
}
