//! Type Selector Component
//!
//! Lost/found toggle buttons for the report form.

use leptos::prelude::*;
use lost_found_domain::ItemType;

/// Item type options
pub const ITEM_TYPES: &[(ItemType, &str)] = &[
    (ItemType::Lost, "Lost Item"),
    (ItemType::Found, "Found Item"),
];

/// Type selector buttons; nothing is selected until the user picks
#[component]
pub fn TypeSelector(
    current_type: ReadSignal<Option<ItemType>>,
    on_change: impl Fn(ItemType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {ITEM_TYPES.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || current_type.get() == Some(value);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
