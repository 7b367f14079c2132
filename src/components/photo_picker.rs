//! Photo Picker Component
//!
//! Optional image for a report, with an inline preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toaster;

use crate::preview;

#[component]
pub fn PhotoPicker(
    image: ReadSignal<Option<String>>,
    set_image: WriteSignal<Option<String>>,
) -> impl IntoView {
    let toaster = use_toaster();

    let on_change = move |ev: web_sys::Event| {
        let Some(file) = preview::first_selected_file(&ev) else { return };
        log::debug!("[photo] reading {} ({} bytes)", file.name(), file.size());
        spawn_local(async move {
            match preview::read_as_data_url(&file).await {
                Ok(url) => set_image.set(Some(url)),
                Err(e) => {
                    log::error!("[photo] {}", e);
                    toaster.error("Photo Not Loaded", e.to_string());
                }
            }
        });
    };

    view! {
        <div class="photo-picker">
            {move || match image.get() {
                Some(src) => view! {
                    <div class="photo-preview">
                        <img src=src alt="Preview" class="preview-img" />
                        <button type="button" class="btn btn-outline" on:click=move |_| set_image.set(None)>
                            "Remove Photo"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="photo-empty">
                        <div class="photo-icon">"📷"</div>
                        <p>"Upload a photo to help identify the item"</p>
                        <input
                            type="file"
                            accept="image/*"
                            id="image-upload"
                            class="hidden"
                            on:change=on_change
                        />
                        <label for="image-upload" class="btn btn-outline">"⬆ Choose Photo"</label>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
