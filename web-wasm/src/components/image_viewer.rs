//! 画像ビューアコンポーネント
//!
//! 元画像と生成画像のBefore/After切り替え表示。
//! 切り替えは表示だけのローカル状態で、セッション状態には触れない。

use leptos::prelude::*;

#[component]
pub fn ImageViewer(
    original_image: Signal<Option<String>>,
    generated_image: Signal<Option<String>>,
    is_loading: Signal<bool>,
    loading_message: Signal<String>,
) -> impl IntoView {
    let (show_original, set_show_original) = signal(true);

    // 生成画像ができたらAfter表示へ、無くなったらBefore表示へ戻す
    Effect::new(move |_| {
        set_show_original.set(generated_image.get().is_none());
    });

    let displayed_image = move || {
        if show_original.get() {
            original_image.get()
        } else {
            generated_image.get()
        }
    };

    view! {
        <div class="image-viewer">
            <h2>"Result"</h2>
            <div class="viewer-frame">
                <Show when=move || is_loading.get()>
                    <div class="viewer-overlay">
                        <div class="spinner"></div>
                        <p>{move || loading_message.get()}</p>
                    </div>
                </Show>
                <Show when=move || original_image.get().is_none() && !is_loading.get()>
                    <div class="viewer-empty">
                        <p>"Upload an image to get started."</p>
                        <p class="text-muted">"Your generated design will appear here."</p>
                    </div>
                </Show>
                <Show when=move || displayed_image().is_some()>
                    <img
                        src=move || displayed_image().unwrap_or_default()
                        alt=move || {
                            if show_original.get() {
                                "Original room"
                            } else {
                                "Decorated room"
                            }
                        }
                    />
                </Show>
            </div>
            <Show when=move || generated_image.get().is_some()>
                <div class="viewer-toggle">
                    <span class:active=move || !show_original.get()>"After"</span>
                    <label class="toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || show_original.get()
                            on:change=move |_| set_show_original.update(|v| *v = !*v)
                        />
                        <span class="toggle-track"></span>
                    </label>
                    <span class:active=move || show_original.get()>"Before"</span>
                </div>
            </Show>
        </div>
    }
}
