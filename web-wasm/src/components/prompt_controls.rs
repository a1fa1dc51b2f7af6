//! プロンプト入力コンポーネント

use leptos::prelude::*;

use decor_ai_common::DECOR_THEMES;

#[component]
pub fn PromptControls<FP, FS>(
    prompt: Signal<String>,
    on_prompt_edited: FP,
    on_submit: FS,
    is_loading: Signal<bool>,
    is_decorated: Signal<bool>,
) -> impl IntoView
where
    FP: Fn(String) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    let can_submit = move || !is_loading.get() && !prompt.get().trim().is_empty();

    view! {
        <div class="prompt-controls">
            <div class="form-group">
                <label for="prompt">
                    {move || {
                        if is_decorated.get() {
                            "Describe your refinements..."
                        } else {
                            "Describe the party theme..."
                        }
                    }}
                </label>
                <textarea
                    id="prompt"
                    rows=3
                    prop:value=move || prompt.get()
                    placeholder=move || {
                        if is_decorated.get() {
                            "e.g., 'Make it more rustic' or 'Add balloons'"
                        } else {
                            "e.g., 'A spooky Halloween party' or 'A vintage Thanksgiving dinner'"
                        }
                    }
                    disabled=move || is_loading.get()
                    on:input={
                        let on_prompt_edited = on_prompt_edited.clone();
                        move |ev| on_prompt_edited(event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="theme-chips">
                <p class="text-muted">"Or try a quick theme:"</p>
                {DECOR_THEMES
                    .iter()
                    .map(|theme| {
                        let on_prompt_edited = on_prompt_edited.clone();
                        view! {
                            <button
                                class="chip"
                                disabled=move || is_loading.get()
                                on:click=move |_| {
                                    on_prompt_edited(
                                        format!("A festive {} theme", theme.to_lowercase()),
                                    )
                                }
                            >
                                {*theme}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="btn btn-primary"
                disabled=move || !can_submit()
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || {
                    if is_loading.get() {
                        "Working..."
                    } else if is_decorated.get() {
                        "Refine Design"
                    } else {
                        "Decorate"
                    }
                }}
            </button>
        </div>
    }
}
