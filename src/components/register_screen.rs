//! Register Screen
//!
//! Account creation form; the password is checked locally and then dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toaster;
use lost_found_domain::{Action, RegisterForm};

use crate::commands;
use crate::components::AuthCard;
use crate::context::use_app_context;
use crate::store::{store_begin, store_finish};

#[component]
pub fn RegisterScreen() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }

        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let pending = match store_begin(&ctx.store, form.validate()) {
            Ok(pending) => pending,
            Err(e) => {
                toaster.error(e.title(), e.message());
                return;
            }
        };

        set_loading.set(true);
        let delay = ctx.config().register_delay_ms;
        spawn_local(async move {
            let result = commands::register(&form, delay).await;
            set_loading.set(false);
            match result {
                Ok(user) => {
                    if store_finish(&ctx.store, &pending, Action::Registered(user)) {
                        toaster.info("Account Created!", "Welcome to Campus Lost & Found");
                    }
                }
                Err(e) => {
                    log::error!("[register] {}", e);
                    toaster.error("Registration Failed", e.to_string());
                }
            }
        });
    };

    view! {
        <AuthCard
            title="Create Account"
            description="Join Campus Lost & Found to help reunite items with their owners"
        >
            <form class="form-stack" on:submit=on_submit>
                <div class="field">
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        type="text"
                        class="input"
                        placeholder="Enter your full name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="email">"College Email"</label>
                    <input
                        id="email"
                        type="email"
                        class="input"
                        placeholder="your.email@college.edu"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="input"
                        placeholder="Create a strong password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="confirmPassword">"Confirm Password"</label>
                    <input
                        id="confirmPassword"
                        type="password"
                        class="input"
                        placeholder="Confirm your password"
                        prop:value=confirm_password
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-campus w-full" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                </button>

                <div class="auth-switch">
                    "Already have an account? "
                    <button type="button" class="link-btn" on:click=move |_| ctx.dispatch(Action::ShowLogin)>
                        "Sign in here"
                    </button>
                </div>
            </form>
        </AuthCard>
    }
}
