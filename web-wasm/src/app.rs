//! メインアプリケーションコンポーネント

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{gemini, shopping};
use crate::components::{
    header::Header, image_viewer::ImageViewer, prompt_controls::PromptControls,
    settings_panel::SettingsPanel, shopping_list::ShoppingListDisplay, upload_area::UploadArea,
};
use crate::state::{reduce, Action, SessionState};

const API_KEY_STORAGE_KEY: &str = "decor-ai-api-key";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // セッション状態（遷移はすべてdispatch経由）
    let state = RwSignal::new(SessionState::default());
    let dispatch = move |action: Action| state.update(|s| reduce(s, action));

    let stored_key: String = LocalStorage::get(API_KEY_STORAGE_KEY).unwrap_or_default();
    let (api_key, set_api_key) = signal(stored_key);
    let (show_uploader, set_show_uploader) = signal(false);

    // 派生シグナル（presentation層はこれらの読み取りのみ）
    let original_image = Signal::derive(move || {
        state.with(|s| s.original_image.as_ref().map(|img| img.data_url.clone()))
    });
    let generated_image = Signal::derive(move || state.with(|s| s.generated_image.clone()));
    let prompt = Signal::derive(move || state.with(|s| s.prompt.clone()));
    let shopping_list = Signal::derive(move || state.with(|s| s.shopping_list.clone()));
    let shopping_links = Signal::derive(move || state.with(|s| s.shopping_links.clone()));
    let sources = Signal::derive(move || state.with(|s| s.sources.clone()));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
    let is_finding_links = Signal::derive(move || state.with(|s| s.is_finding_links));
    let loading_message = Signal::derive(move || state.with(|s| s.loading_message.clone()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let is_decorated = Signal::derive(move || state.with(|s| s.generated_image.is_some()));
    let has_image = Signal::derive(move || state.with(|s| s.original_image.is_some()));
    let has_list = Signal::derive(move || {
        state.with(|s| s.shopping_list.is_some() || !s.shopping_links.is_empty())
    });

    // APIキー変更（LocalStorageへ永続化）
    let on_api_key_changed = move |key: String| {
        if LocalStorage::set(API_KEY_STORAGE_KEY, &key).is_err() {
            console::warn!("failed to persist API key");
        }
        set_api_key.set(key);
    };

    // 画像アップロード
    let on_image_selected = move |file_name: String, data_url: String| {
        dispatch(Action::ImageUploaded { file_name, data_url });
        set_show_uploader.set(false);
    };
    let on_upload_error = move || dispatch(Action::UploadFailed);

    // プロンプト入力
    let on_prompt_edited = move |text: String| dispatch(Action::PromptEdited(text));

    // デコレーション実行（画像編集 → 買い物リスト生成の逐次2段階）
    let on_submit = move |_| {
        let snapshot = state.with_untracked(|s| {
            if !s.can_decorate() {
                return None;
            }
            s.base_image().map(|base| {
                (
                    base.to_string(),
                    s.original_image
                        .as_ref()
                        .map(|img| img.data_url.clone())
                        .unwrap_or_default(),
                    s.prompt.clone(),
                )
            })
        });
        let Some((base_image, original, user_prompt)) = snapshot else {
            return;
        };
        let key = api_key.get_untracked();

        dispatch(Action::DecorateStarted);
        spawn_local(async move {
            // Step1: 画像編集
            let new_image = match gemini::edit_image(&key, &base_image, &user_prompt).await {
                Ok(image) => image,
                Err(e) => {
                    console::error!(format!("image edit failed: {:?}", e));
                    dispatch(Action::DecorateFailed);
                    return;
                }
            };
            dispatch(Action::DesignGenerated(new_image.clone()));

            // Step2: 買い物リスト生成（元画像と新画像の比較）
            match shopping::generate_shopping_list(&key, &original, &new_image).await {
                Ok(list) => dispatch(Action::ShoppingListGenerated(list)),
                Err(e) => {
                    console::error!(format!("shopping list generation failed: {:?}", e));
                    dispatch(Action::DecorateFailed);
                }
            }
        });
    };

    // 商品リンク検索（リスト未生成なら何もしない）
    let on_find_links = move |_| {
        let payload = state.with_untracked(|s| {
            if s.is_finding_links {
                return None;
            }
            s.shopping_list
                .clone()
                .map(|list| (list, s.prompt.clone()))
        });
        let Some((list, theme_prompt)) = payload else {
            return;
        };
        let key = api_key.get_untracked();

        dispatch(Action::FindLinksStarted);
        spawn_local(async move {
            match shopping::find_product_links(&key, &list, &theme_prompt).await {
                Ok((links, sources)) => dispatch(Action::ProductLinksFound { links, sources }),
                Err(e) => {
                    console::error!(format!("product link lookup failed: {:?}", e));
                    dispatch(Action::FindLinksFailed);
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel api_key=api_key on_api_key_changed=on_api_key_changed />

            <main class="layout">
                <section class="controls">
                    <h2>"Controls"</h2>

                    <Show when=move || error.get().is_some()>
                        <div class="error-banner">
                            <p class="error-title">"An Error Occurred"</p>
                            <p>{move || error.get().unwrap_or_default()}</p>
                        </div>
                    </Show>

                    <Show
                        when=move || has_image.get()
                        fallback=move || {
                            view! {
                                <UploadArea
                                    on_image_selected=on_image_selected
                                    on_read_error=on_upload_error
                                />
                            }
                        }
                    >
                        <PromptControls
                            prompt=prompt
                            on_prompt_edited=on_prompt_edited
                            on_submit=on_submit
                            is_loading=is_loading
                            is_decorated=is_decorated
                        />

                        <Show when=move || has_list.get()>
                            <ShoppingListDisplay
                                items=shopping_list
                                links=shopping_links
                                sources=sources
                                on_find_links=on_find_links
                                is_finding_links=is_finding_links
                            />
                        </Show>

                        <Show
                            when=move || show_uploader.get()
                            fallback=move || {
                                view! {
                                    <button
                                        class="btn btn-small btn-tertiary"
                                        disabled=move || is_loading.get()
                                        on:click=move |_| set_show_uploader.set(true)
                                    >
                                        "Upload a different photo"
                                    </button>
                                }
                            }
                        >
                            <UploadArea
                                on_image_selected=on_image_selected
                                on_read_error=on_upload_error
                            />
                        </Show>
                    </Show>
                </section>

                <section class="result">
                    <ImageViewer
                        original_image=original_image
                        generated_image=generated_image
                        is_loading=is_loading
                        loading_message=loading_message
                    />
                </section>
            </main>
        </div>
    }
}
