//! Account creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_header::AuthHeader;
use crate::state::session::SessionContext;
use crate::util::auth::{DASHBOARD_PATH, install_authed_redirect};
use crate::util::validation::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    install_authed_redirect(session.auth(), navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let interests = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        busy.set(true);
        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            interests: interests.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.sign_up(form).await {
                Ok(user) => {
                    log::info!("signed up as {}", user.username);
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <AuthHeader/>
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"One new concept every day, picked from your interests."</p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        disabled=move || busy.get()
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        disabled=move || busy.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Interests (comma separated)"
                        disabled=move || busy.get()
                        prop:value=move || interests.get()
                        on:input=move |ev| interests.set(event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
