//! Filter Bar Component
//!
//! Search box and lost/found select above the dashboard grid.

use leptos::prelude::*;
use lost_found_domain::TypeFilter;

#[component]
pub fn FilterBar(
    search_term: ReadSignal<String>,
    set_search_term: WriteSignal<String>,
    filter: ReadSignal<TypeFilter>,
    set_filter: WriteSignal<TypeFilter>,
) -> impl IntoView {
    view! {
        <div class="card filter-bar">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    class="input search-input"
                    placeholder="Search for items, locations, or descriptions..."
                    prop:value=search_term
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
            </div>
            <div class="filter-select">
                <select
                    class="select"
                    prop:value=move || filter.get().as_str()
                    on:change=move |ev| set_filter.set(TypeFilter::parse(&event_target_value(&ev)))
                >
                    {TypeFilter::OPTIONS.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <option value=value.as_str() selected=move || filter.get() == value>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
