//! Dashboard Screen
//!
//! Hero with counts, search/filter bar and the grid of postings.

use leptos::prelude::*;
use leptos_toast::use_toaster;
use lost_found_domain::{count_by_type, filter_items, find_item, Action, Item, ItemType, TypeFilter, User};

use crate::components::{FilterBar, Header, ItemCard};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Hint under "No items found"
fn empty_state_hint(search_term: &str, filter: TypeFilter) -> &'static str {
    if !search_term.is_empty() || filter != TypeFilter::All {
        "Try adjusting your search or filter criteria"
    } else {
        "Be the first to report a lost or found item!"
    }
}

#[component]
pub fn Dashboard(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();
    let store = ctx.store;
    let campus_name = ctx.config().campus_name;

    let (search_term, set_search_term) = signal(String::new());
    let (filter, set_filter) = signal(TypeFilter::All);

    // Recomputed on every keystroke or select change
    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        let filter = filter.get();
        let field = store.catalog();
        let catalog = field.read();
        let visible: Vec<Item> = filter_items(&catalog, &term, filter).into_iter().cloned().collect();
        visible
    });

    let lost_count = move || count_by_type(&store.catalog().read(), ItemType::Lost);
    let found_count = move || count_by_type(&store.catalog().read(), ItemType::Found);

    let on_contact = move |id: String| {
        let contact = find_item(&store.catalog().read_untracked(), &id).map(|item| item.contact_name.clone());
        match contact {
            Some(name) => toaster.info(
                "Contact Information",
                format!("You can reach {} through the campus messaging system.", name),
            ),
            None => log::warn!("[dashboard] contact requested for unknown item {}", id),
        }
    };

    let report = move |_: ()| ctx.dispatch(Action::ReportItem);

    view! {
        <div class="page">
            <Header
                user=user
                on_add_item=report
                on_logout=move |_: ()| ctx.dispatch(Action::Logout)
            />

            <section class="hero">
                <div class="hero-overlay"></div>
                <div class="container hero-content">
                    <h1 class="hero-title">{campus_name}</h1>
                    <p class="hero-subtitle">"Campus Lost and Found System"</p>
                    <div class="hero-badges">
                        <span class="hero-badge">{lost_count} " Lost Items"</span>
                        <span class="hero-badge">{found_count} " Found Items"</span>
                    </div>
                </div>
            </section>

            <div class="container page-body">
                <FilterBar
                    search_term=search_term
                    set_search_term=set_search_term
                    filter=filter
                    set_filter=set_filter
                />

                <div class="items-grid">
                    <For
                        each=move || filtered.get()
                        key=|item| item.id.clone()
                        children=move |item| {
                            view! { <ItemCard item=item on_contact=on_contact /> }
                        }
                    />
                </div>

                <Show when=move || filtered.with(|items| items.is_empty())>
                    <div class="empty-state">
                        <div class="empty-icon">"🔍"</div>
                        <h3>"No items found"</h3>
                        <p>{move || empty_state_hint(&search_term.get(), filter.get())}</p>
                        <button class="btn btn-campus" on:click=move |_| report(())>
                            "Report an Item"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_hint() {
        assert_eq!(empty_state_hint("", TypeFilter::All), "Be the first to report a lost or found item!");
        assert_eq!(empty_state_hint("zzz", TypeFilter::All), "Try adjusting your search or filter criteria");
        assert_eq!(empty_state_hint("", TypeFilter::Found), "Try adjusting your search or filter criteria");
    }
}
