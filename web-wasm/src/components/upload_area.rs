//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<F, E>(on_image_selected: F, on_read_error: E) -> impl IntoView
where
    F: Fn(String, String) + 'static + Clone,
    E: Fn() + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_image_selected = on_image_selected.clone();
        let on_read_error = on_read_error.clone();
        move |file: File| {
            read_file(file, on_image_selected.clone(), on_read_error.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        // ドロップは画像MIMEのみ受け付け、それ以外は黙って無視
                        if file.type_().starts_with("image/") {
                            handle_file(file);
                        }
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_file = handle_file.clone();
            let picker = input.clone();
            // ピッカー経由はaccept属性任せでMIME判定を行わない
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = picker.files().and_then(|files| files.get(0)) {
                    handle_file(file);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Upload an image of your room"</p>
            <p class="text-muted">"Drag & drop a file here or click to select"</p>
            <p class="upload-note">"Supports JPG, PNG, WEBP, etc."</p>
        </div>
    }
}

fn read_file<F, E>(file: File, on_loaded: F, on_error: E)
where
    F: Fn(String, String) + 'static,
    E: Fn() + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(file_name.clone(), data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        on_error();
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let _ = reader.read_as_data_url(&file);
}
