//! セッション状態ストア
//!
//! 1ページ分のUI状態と、それを遷移させるActionの定義。
//! 状態遷移はすべてreduce()を通す。フィールドを直接書き換えるsetterは持たない。

use decor_ai_common::{ShoppingListItem, Source};

/// アップロード失敗時のメッセージ
pub const UPLOAD_ERROR: &str = "Failed to load image. Please try another file.";

/// デコレーション（画像編集→リスト生成）失敗時のメッセージ
pub const DECORATE_ERROR: &str =
    "Could not generate the design and shopping list. Please refine your prompt and try again.";

/// 商品リンク検索失敗時のメッセージ
pub const LINKS_ERROR: &str = "Could not find product links. Please try again.";

/// アップロード済みの元画像
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginalImage {
    pub file_name: String,
    /// FileReaderで読み込んだData URL（そのままAPI送信・表示に使う）
    pub data_url: String,
}

/// 1ページセッション分のUI状態
///
/// ページロードで生成され、リロードで失われる。永続化はしない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub original_image: Option<OriginalImage>,
    pub generated_image: Option<String>,
    pub prompt: String,
    pub shopping_list: Option<String>,
    pub shopping_links: Vec<ShoppingListItem>,
    pub sources: Vec<Source>,
    pub is_loading: bool,
    pub is_finding_links: bool,
    pub loading_message: String,
    pub error: Option<String>,
}

impl SessionState {
    /// デコレーション実行の入力になる画像（生成済みがあればそちら）
    pub fn base_image(&self) -> Option<&str> {
        self.generated_image
            .as_deref()
            .or(self.original_image.as_ref().map(|img| img.data_url.as_str()))
    }

    /// デコレーション実行可能か
    pub fn can_decorate(&self) -> bool {
        self.original_image.is_some() && !self.prompt.trim().is_empty() && !self.is_loading
    }
}

/// 状態遷移アクション
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 画像アップロード完了（派生状態をすべてリセットする）
    ImageUploaded { file_name: String, data_url: String },
    /// 画像ファイルの読み込み失敗
    UploadFailed,
    /// プロンプト入力
    PromptEdited(String),
    /// デコレーション開始（画像編集→リスト生成の2段階）
    DecorateStarted,
    /// 画像編集成功（ステップ1の出力を確定）
    DesignGenerated(String),
    /// 買い物リスト生成成功（ステップ2の出力を確定）
    ShoppingListGenerated(String),
    /// デコレーションのいずれかの段階が失敗
    DecorateFailed,
    /// 商品リンク検索開始（リスト未生成ならno-op）
    FindLinksStarted,
    /// 商品リンク検索成功
    ProductLinksFound {
        links: Vec<ShoppingListItem>,
        sources: Vec<Source>,
    },
    /// 商品リンク検索失敗
    FindLinksFailed,
}

/// 状態遷移関数
pub fn reduce(state: &mut SessionState, action: Action) {
    match action {
        Action::ImageUploaded { file_name, data_url } => {
            state.original_image = Some(OriginalImage { file_name, data_url });
            state.generated_image = None;
            state.shopping_list = None;
            state.shopping_links.clear();
            state.sources.clear();
            state.prompt.clear();
            state.error = None;
        }
        Action::UploadFailed => {
            state.error = Some(UPLOAD_ERROR.to_string());
        }
        Action::PromptEdited(text) => {
            state.prompt = text;
        }
        Action::DecorateStarted => {
            state.is_loading = true;
            state.loading_message = if state.generated_image.is_some() {
                "Refining your design..."
            } else {
                "Decorating your room..."
            }
            .to_string();
            // 新しいデザインを作るので前回のリストは破棄
            state.shopping_list = None;
            state.shopping_links.clear();
            state.sources.clear();
            state.error = None;
        }
        Action::DesignGenerated(data_url) => {
            state.generated_image = Some(data_url);
            state.loading_message = "Creating your shopping list...".to_string();
        }
        Action::ShoppingListGenerated(text) => {
            state.shopping_list = Some(text);
            state.is_loading = false;
            state.loading_message.clear();
        }
        Action::DecorateFailed => {
            state.error = Some(DECORATE_ERROR.to_string());
            state.is_loading = false;
            state.loading_message.clear();
        }
        Action::FindLinksStarted => {
            // リスト未生成なら状態を一切変えない
            if state.shopping_list.is_none() {
                return;
            }
            state.is_finding_links = true;
            state.error = None;
        }
        Action::ProductLinksFound { links, sources } => {
            state.shopping_links = links;
            state.sources = sources;
            state.is_finding_links = false;
        }
        Action::FindLinksFailed => {
            state.error = Some(LINKS_ERROR.to_string());
            state.is_finding_links = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded_state() -> SessionState {
        let mut state = SessionState::default();
        reduce(
            &mut state,
            Action::ImageUploaded {
                file_name: "room.jpg".to_string(),
                data_url: "data:image/jpeg;base64,AAAA".to_string(),
            },
        );
        state
    }

    fn decorated_state() -> SessionState {
        let mut state = uploaded_state();
        reduce(&mut state, Action::PromptEdited("A festive christmas theme".to_string()));
        reduce(&mut state, Action::DecorateStarted);
        reduce(&mut state, Action::DesignGenerated("data:image/png;base64,BBBB".to_string()));
        reduce(&mut state, Action::ShoppingListGenerated("- Candles\n- Balloons".to_string()));
        state
    }

    // =============================================
    // アップロード
    // =============================================

    #[test]
    fn test_upload_resets_all_derived_state() {
        let mut state = decorated_state();
        reduce(
            &mut state,
            Action::ProductLinksFound {
                links: vec![ShoppingListItem {
                    item: "Candles".to_string(),
                    url: "https://example.com".to_string(),
                }],
                sources: vec![Source::default()],
            },
        );

        reduce(
            &mut state,
            Action::ImageUploaded {
                file_name: "other.png".to_string(),
                data_url: "data:image/png;base64,CCCC".to_string(),
            },
        );

        assert_eq!(state.original_image.as_ref().unwrap().file_name, "other.png");
        assert!(state.generated_image.is_none());
        assert!(state.shopping_list.is_none());
        assert!(state.shopping_links.is_empty());
        assert!(state.sources.is_empty());
        assert!(state.prompt.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_upload_failure_leaves_state_unchanged_except_error() {
        let before = decorated_state();
        let mut state = before.clone();
        reduce(&mut state, Action::UploadFailed);

        assert_eq!(state.error.as_deref(), Some(UPLOAD_ERROR));
        state.error = None;
        assert_eq!(state, before);
    }

    // =============================================
    // デコレーション（2段階ワークフロー）
    // =============================================

    #[test]
    fn test_decorate_success_yields_image_and_list() {
        let state = decorated_state();
        assert!(state.generated_image.is_some());
        assert_eq!(state.shopping_list.as_deref(), Some("- Candles\n- Balloons"));
        assert!(!state.is_loading);
        assert!(state.loading_message.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_decorate_started_message_first_time() {
        let mut state = uploaded_state();
        reduce(&mut state, Action::DecorateStarted);
        assert!(state.is_loading);
        assert_eq!(state.loading_message, "Decorating your room...");
    }

    #[test]
    fn test_decorate_started_message_when_refining() {
        let mut state = decorated_state();
        reduce(&mut state, Action::DecorateStarted);
        assert_eq!(state.loading_message, "Refining your design...");
    }

    #[test]
    fn test_decorate_started_clears_previous_list() {
        let mut state = decorated_state();
        reduce(
            &mut state,
            Action::ProductLinksFound {
                links: vec![ShoppingListItem::default()],
                sources: vec![],
            },
        );

        reduce(&mut state, Action::DecorateStarted);
        assert!(state.shopping_list.is_none());
        assert!(state.shopping_links.is_empty());
        assert!(state.sources.is_empty());
        // 前回の生成画像は編集の入力として残る
        assert!(state.generated_image.is_some());
    }

    #[test]
    fn test_step1_failure_keeps_previous_generated_image() {
        let mut state = decorated_state();
        let previous = state.generated_image.clone();

        reduce(&mut state, Action::DecorateStarted);
        reduce(&mut state, Action::DecorateFailed);

        assert_eq!(state.generated_image, previous);
        assert!(state.shopping_list.is_none());
        assert_eq!(state.error.as_deref(), Some(DECORATE_ERROR));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_step2_failure_keeps_committed_image_without_list() {
        // 画像編集は成功、リスト生成で失敗したケース
        let mut state = uploaded_state();
        reduce(&mut state, Action::PromptEdited("halloween".to_string()));
        reduce(&mut state, Action::DecorateStarted);
        reduce(&mut state, Action::DesignGenerated("data:image/png;base64,NEW".to_string()));
        reduce(&mut state, Action::DecorateFailed);

        assert_eq!(state.generated_image.as_deref(), Some("data:image/png;base64,NEW"));
        assert!(state.shopping_list.is_none());
        assert_eq!(state.error.as_deref(), Some(DECORATE_ERROR));
    }

    #[test]
    fn test_decorate_started_clears_error_banner() {
        let mut state = uploaded_state();
        reduce(&mut state, Action::DecorateStarted);
        reduce(&mut state, Action::DecorateFailed);
        assert!(state.error.is_some());

        reduce(&mut state, Action::DecorateStarted);
        assert!(state.error.is_none());
    }

    // =============================================
    // 商品リンク検索
    // =============================================

    #[test]
    fn test_find_links_is_noop_without_list() {
        let before = uploaded_state();
        let mut state = before.clone();
        reduce(&mut state, Action::FindLinksStarted);
        assert_eq!(state, before);
    }

    #[test]
    fn test_find_links_success() {
        let mut state = decorated_state();
        reduce(&mut state, Action::FindLinksStarted);
        assert!(state.is_finding_links);

        reduce(
            &mut state,
            Action::ProductLinksFound {
                links: vec![ShoppingListItem {
                    item: "Candles".to_string(),
                    url: "https://example.com/candles".to_string(),
                }],
                sources: vec![Source::default()],
            },
        );

        assert!(!state.is_finding_links);
        assert_eq!(state.shopping_links.len(), 1);
        assert_eq!(state.sources.len(), 1);
    }

    #[test]
    fn test_find_links_failure_preserves_image_and_list() {
        let mut state = decorated_state();
        let image = state.generated_image.clone();
        let list = state.shopping_list.clone();

        reduce(&mut state, Action::FindLinksStarted);
        reduce(&mut state, Action::FindLinksFailed);

        assert_eq!(state.generated_image, image);
        assert_eq!(state.shopping_list, list);
        assert_eq!(state.error.as_deref(), Some(LINKS_ERROR));
        assert!(!state.is_finding_links);
    }

    // =============================================
    // ヘルパー
    // =============================================

    #[test]
    fn test_base_image_prefers_generated() {
        let state = decorated_state();
        assert_eq!(state.base_image(), Some("data:image/png;base64,BBBB"));

        let state = uploaded_state();
        assert_eq!(state.base_image(), Some("data:image/jpeg;base64,AAAA"));

        assert_eq!(SessionState::default().base_image(), None);
    }

    #[test]
    fn test_can_decorate_requires_image_and_prompt() {
        let mut state = SessionState::default();
        assert!(!state.can_decorate());

        state = uploaded_state();
        assert!(!state.can_decorate());

        reduce(&mut state, Action::PromptEdited("  ".to_string()));
        assert!(!state.can_decorate());

        reduce(&mut state, Action::PromptEdited("christmas".to_string()));
        assert!(state.can_decorate());

        reduce(&mut state, Action::DecorateStarted);
        assert!(!state.can_decorate());
    }
}
