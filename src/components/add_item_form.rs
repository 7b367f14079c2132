//! Add Item Form Component
//!
//! Report form for a lost or found posting, with optional photo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toaster;
use lost_found_domain::{Action, ItemDraft, ItemType, User};

use crate::commands;
use crate::components::{Header, PhotoPicker, TypeSelector};
use crate::context::use_app_context;
use crate::store::{store_begin, store_finish};

#[component]
pub fn AddItemForm(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();

    let (item_type, set_item_type) = signal::<Option<ItemType>>(None);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (image, set_image) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let back = move |_| ctx.dispatch(Action::BackToDashboard);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }

        let draft = ItemDraft {
            item_type: item_type.get_untracked(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            date: date.get_untracked(),
            image: image.get_untracked(),
        };
        let pending = match store_begin(&ctx.store, draft.validate()) {
            Ok(pending) => pending,
            Err(e) => {
                log::debug!("[add-item] rejected: {}", e);
                toaster.error(e.title(), e.message());
                return;
            }
        };

        set_loading.set(true);
        let delay = ctx.config().submit_delay_ms;
        spawn_local(async move {
            let result = commands::submit_item(&pending.payload, delay).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    let kind = pending.payload.item_type.as_str();
                    if store_finish(&ctx.store, &pending, Action::BackToDashboard) {
                        toaster.info(
                            "Item Posted Successfully!",
                            format!("Your {} item has been added to the database.", kind),
                        );
                    }
                }
                Err(e) => {
                    log::error!("[add-item] {}", e);
                    toaster.error("Item Not Posted", e.to_string());
                }
            }
        });
    };

    view! {
        <div class="page">
            <Header
                user=user
                on_add_item=move |_: ()| ctx.dispatch(Action::ReportItem)
                on_logout=move |_: ()| ctx.dispatch(Action::Logout)
            />

            <div class="container page-body narrow">
                <button type="button" class="btn btn-ghost back-btn" on:click=back>
                    "← Back to Dashboard"
                </button>

                <div class="card form-card">
                    <div class="card-header">
                        <h2 class="card-title">"Report an Item"</h2>
                        <p class="card-description">"Help reunite items with their owners"</p>
                    </div>

                    <div class="card-content">
                        <form class="form-stack" on:submit=on_submit>
                            <div class="field">
                                <label>"Item Type *"</label>
                                <TypeSelector
                                    current_type=item_type
                                    on_change=move |t| set_item_type.set(Some(t))
                                />
                            </div>

                            <div class="field">
                                <label for="title">"Item Title *"</label>
                                <input
                                    id="title"
                                    type="text"
                                    class="input"
                                    placeholder="e.g., Blue iPhone 13, Black Backpack"
                                    prop:value=title
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="field">
                                <label for="description">"Description *"</label>
                                <textarea
                                    id="description"
                                    class="input textarea"
                                    placeholder="Provide a detailed description of the item, including any distinctive features, brand, color, etc."
                                    prop:value=description
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="field">
                                <label for="location">"Location *"</label>
                                <input
                                    id="location"
                                    type="text"
                                    class="input"
                                    placeholder="e.g., Main Library 2nd Floor, Science Building Entrance"
                                    prop:value=location
                                    on:input=move |ev| set_location.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="field">
                                <label for="date">"Date *"</label>
                                <input
                                    id="date"
                                    type="date"
                                    class="input"
                                    prop:value=date
                                    on:input=move |ev| set_date.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="field">
                                <label>"Photo (Optional)"</label>
                                <PhotoPicker image=image set_image=set_image />
                            </div>

                            <div class="form-actions">
                                <button type="button" class="btn btn-outline flex-1" on:click=back>
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-campus flex-1" disabled=move || loading.get()>
                                    {move || if loading.get() { "Posting..." } else { "Post Item" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
