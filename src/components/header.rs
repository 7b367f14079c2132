//! Header Component
//!
//! Sticky brand bar with the session controls.

use leptos::prelude::*;
use lost_found_domain::User;

#[component]
pub fn Header(
    user: User,
    #[prop(into)] on_add_item: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-row">
                <div class="brand">
                    <div class="brand-icon">"🔍"</div>
                    <div>
                        <h1 class="brand-title">"Campus Lost & Found"</h1>
                        <p class="brand-tagline">"Reuniting students with their belongings"</p>
                    </div>
                </div>

                <div class="header-actions">
                    <button class="btn btn-campus btn-sm report-btn" on:click=move |_| on_add_item.run(())>
                        "+ Report Item"
                    </button>
                    <div class="header-user">
                        <span class="user-icon">"👤"</span>
                        <span class="user-name">{user.name}</span>
                    </div>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
