//! ブラウザ環境での結合テスト（wasm-pack test --headless で実行）

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use decor_ai_wasm::api::gemini::{extract_base64_from_data_url, extract_mime_type_from_data_url};
use decor_ai_wasm::state::{reduce, Action, SessionState};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn full_session_flow() {
    let mut state = SessionState::default();

    reduce(
        &mut state,
        Action::ImageUploaded {
            file_name: "room.jpg".to_string(),
            data_url: "data:image/jpeg;base64,AAAA".to_string(),
        },
    );
    reduce(&mut state, Action::PromptEdited("A festive halloween theme".to_string()));
    assert!(state.can_decorate());

    reduce(&mut state, Action::DecorateStarted);
    reduce(&mut state, Action::DesignGenerated("data:image/png;base64,BBBB".to_string()));
    reduce(&mut state, Action::ShoppingListGenerated("- Candles".to_string()));
    assert!(state.generated_image.is_some());
    assert!(state.shopping_list.is_some());

    // 再アップロードで派生状態がすべて消える
    reduce(
        &mut state,
        Action::ImageUploaded {
            file_name: "other.jpg".to_string(),
            data_url: "data:image/jpeg;base64,CCCC".to_string(),
        },
    );
    assert!(state.generated_image.is_none());
    assert!(state.shopping_list.is_none());
    assert!(state.prompt.is_empty());
}

#[wasm_bindgen_test]
fn data_url_helpers() {
    let data_url = "data:image/png;base64,iVBORw0KGgo=";
    assert_eq!(extract_base64_from_data_url(data_url), Some("iVBORw0KGgo="));
    assert_eq!(extract_mime_type_from_data_url(data_url), "image/png");
}
