//! Login Screen
//!
//! Email/password sign-in. Any non-empty pair is accepted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toaster;
use lost_found_domain::{Action, LoginForm};

use crate::commands;
use crate::components::AuthCard;
use crate::context::use_app_context;
use crate::store::{store_begin, store_finish};

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let pending = match store_begin(&ctx.store, form.validate()) {
            Ok(pending) => pending,
            Err(e) => {
                toaster.error(e.title(), e.message());
                return;
            }
        };

        set_loading.set(true);
        let delay = ctx.config().login_delay_ms;
        spawn_local(async move {
            let result = commands::login(&form, delay).await;
            set_loading.set(false);
            match result {
                Ok(user) => {
                    if store_finish(&ctx.store, &pending, Action::LoggedIn(user)) {
                        toaster.info("Welcome back!", "You've successfully logged in.");
                    }
                }
                Err(e) => {
                    log::error!("[login] {}", e);
                    toaster.error("Sign In Failed", e.to_string());
                }
            }
        });
    };

    view! {
        <AuthCard title="Welcome Back" description="Sign in to your Campus Lost & Found account">
            <form class="form-stack" on:submit=on_submit>
                <div class="field">
                    <label for="email">"Email"</label>
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
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-campus w-full" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <div class="auth-switch">
                    "Don't have an account? "
                    <button type="button" class="link-btn" on:click=move |_| ctx.dispatch(Action::ShowRegister)>
                        "Register here"
                    </button>
                </div>
            </form>
        </AuthCard>
    }
}
