//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<F>(api_key: ReadSignal<String>, on_api_key_changed: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-key">"Gemini API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="Paste your API key..."
                    prop:value=move || api_key.get()
                    on:input={
                        let on_api_key_changed = on_api_key_changed.clone();
                        move |ev| on_api_key_changed(event_target_value(&ev))
                    }
                />
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "Get an API key"
                </a>
            </div>
        </div>
    }
}
