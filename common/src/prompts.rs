//! プロンプト生成モジュール
//!
//! 3つのリモート操作で使うプロンプト:
//! - build_decorate_prompt: 画像編集（デコレーション生成）用
//! - build_shopping_list_prompt: 買い物リスト生成用
//! - build_product_links_prompt: 商品リンク検索用

/// クイック選択できるパーティーテーマ
pub const DECOR_THEMES: &[&str] = &[
    "Christmas",
    "Thanksgiving",
    "Birthday Party",
    "Baby Shower",
    "Engagement Party",
    "Halloween",
    "New Year's Eve",
    "Rustic Wedding",
];

/// 画像編集プロンプト生成
///
/// # Arguments
/// * `user_prompt` - ユーザーが入力したテーマ・指示
pub fn build_decorate_prompt(user_prompt: &str) -> String {
    format!(
        r#"You are an expert party decorator. Redecorate the room in this photo according to the following request:

{user_prompt}

Keep the room itself unchanged: same walls, windows, floor, furniture and camera angle. Only add or change decorations. Return the edited image."#
    )
}

/// 買い物リスト生成プロンプト
///
/// 元画像とデコレーション後画像の2枚を添えて送る前提
pub fn build_shopping_list_prompt() -> String {
    r#"The first image is the original room. The second image is the same room after it was decorated for a party.

List every decoration item that was added to the room. Output a plain-text shopping list, one item per line, each line starting with "- ". Do not include furniture or anything already present in the original photo. Output only the list."#
        .to_string()
}

/// 商品リンク検索プロンプト生成
///
/// # Arguments
/// * `shopping_list` - 生成済みの買い物リストテキスト
/// * `theme_prompt` - 元のデコレーション指示（テーマの文脈として渡す）
pub fn build_product_links_prompt(shopping_list: &str, theme_prompt: &str) -> String {
    format!(
        r#"Find a purchasable product link for each item on this party decoration shopping list. Prefer Amazon product pages. The party theme is: "{theme_prompt}".

Shopping list:
{shopping_list}

Respond with ONLY a JSON array in exactly this format:
[
  {{"item": "item name", "url": "https://..."}}
]"#
    )
}
