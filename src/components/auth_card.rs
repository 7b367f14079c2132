//! Auth Card Component
//!
//! Centered card framing the login and registration forms.

use leptos::prelude::*;

#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="card-header auth-card-header">
                    <div class="auth-badge">"🔍"</div>
                    <h2 class="card-title">{title}</h2>
                    <p class="card-description">{description}</p>
                </div>
                <div class="card-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}
