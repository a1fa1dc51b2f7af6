//! 買い物リスト表示コンポーネント
//!
//! リスト本文の行パース表示、商品リンク検索、出典表示、
//! クリップボードへの共有

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use decor_ai_common::{shopping_list_lines, ShoppingListItem, Source};

#[component]
pub fn ShoppingListDisplay<F>(
    items: Signal<Option<String>>,
    links: Signal<Vec<ShoppingListItem>>,
    sources: Signal<Vec<Source>>,
    on_find_links: F,
    is_finding_links: Signal<bool>,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (copied, set_copied) = signal(false);

    let list_items =
        move || items.get().map(|text| shopping_list_lines(&text)).unwrap_or_default();
    let has_links = move || !links.get().is_empty();
    let web_sources = move || {
        sources
            .get()
            .into_iter()
            .filter(|s| s.has_web_uri())
            .collect::<Vec<_>>()
    };

    let on_share = move |_| {
        let links = links.get_untracked();
        if links.is_empty() {
            return;
        }
        let share_text = format!(
            "Here's my shopping list for the party decorations:\n\n{}",
            links
                .iter()
                .map(|link| format!("- {}: {}", link.item, link.url))
                .collect::<Vec<_>>()
                .join("\n")
        );

        let clipboard = web_sys::window().unwrap().navigator().clipboard();
        spawn_local(async move {
            if JsFuture::from(clipboard.write_text(&share_text)).await.is_ok() {
                set_copied.set(true);
                Timeout::new(2_500, move || set_copied.set(false)).forget();
            }
        });
    };

    view! {
        <div class="shopping-list">
            <div class="shopping-list-header">
                <h3>"Your Shopping List"</h3>
                <Show when=has_links>
                    <div class="share">
                        <button class="btn btn-small btn-secondary" on:click=on_share>
                            "Share"
                        </button>
                        <Show when=move || copied.get()>
                            <span class="share-status">"Copied!"</span>
                        </Show>
                    </div>
                </Show>
            </div>

            <Show when=move || !has_links()>
                <ul class="item-list">
                    {move || {
                        list_items()
                            .into_iter()
                            .map(|item| view! { <li>{item}</li> })
                            .collect_view()
                    }}
                </ul>
                <button
                    class="btn btn-primary"
                    disabled=move || is_finding_links.get()
                    on:click={
                        let on_find_links = on_find_links.clone();
                        move |_| on_find_links(())
                    }
                >
                    {move || {
                        if is_finding_links.get() {
                            "Finding..."
                        } else {
                            "Find on Amazon"
                        }
                    }}
                </button>
            </Show>

            <Show when=has_links>
                <ul class="link-list">
                    <For
                        each=move || { links.get().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(i, _)| *i
                        children=move |(_, link)| {
                            view! {
                                <li class="link-row">
                                    <span class="link-item">{link.item.clone()}</span>
                                    <a
                                        class="btn btn-small btn-primary"
                                        href=link.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "Open Link"
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <Show when=move || has_links() && !web_sources().is_empty()>
                <div class="sources">
                    <h4>"Sources"</h4>
                    <ul>
                        <For
                            each=move || {
                                web_sources().into_iter().enumerate().collect::<Vec<_>>()
                            }
                            key=|(i, _)| *i
                            children=move |(_, source)| {
                                let web = source.web.unwrap_or_default();
                                let label = if web.title.is_empty() {
                                    web.uri.clone()
                                } else {
                                    web.title.clone()
                                };
                                view! {
                                    <li>
                                        <a
                                            href=web.uri.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {label}
                                        </a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}
