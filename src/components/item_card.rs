//! Item Card Component
//!
//! One posting in the dashboard grid.

use leptos::prelude::*;
use lost_found_domain::{Item, ItemType};

fn badge_class(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Lost => "badge badge-lost",
        ItemType::Found => "badge badge-found",
    }
}

#[component]
pub fn ItemCard(
    item: Item,
    /// Called with the item id
    #[prop(into)] on_contact: Callback<String>,
) -> impl IntoView {
    let id = item.id.clone();
    let image = item.image.clone();
    let alt = item.title.clone();

    view! {
        <div class="card item-card">
            <div class="item-image">
                {match image {
                    Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                    None => view! { <div class="item-image-placeholder">"📷"</div> }.into_any(),
                }}
            </div>

            <div class="card-content item-body">
                <div class="item-title-row">
                    <h3 class="item-title">{item.title}</h3>
                    <span class=badge_class(item.item_type)>{item.item_type.label()}</span>
                </div>

                <p class="item-description">{item.description}</p>

                <div class="item-meta">
                    <div class="item-meta-row">"📍 " {item.location}</div>
                    <div class="item-meta-row">"📅 " {item.date}</div>
                    <div class="item-meta-row">"👤 Posted by " {item.contact_name}</div>
                </div>

                <button class="btn btn-campus-outline btn-sm w-full" on:click=move |_| on_contact.run(id.clone())>
                    "Contact"
                </button>
            </div>
        </div>
    }
}
