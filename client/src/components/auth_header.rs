//! Top navigation bar shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionContext;

/// Brand link plus auth-aware navigation.
///
/// Signed-in users get a link to their dashboard; everyone else gets login
/// and signup links. Nothing auth-dependent renders while the stored
/// session is still being read.
#[component]
pub fn AuthHeader() -> impl IntoView {
    let auth = expect_context::<SessionContext>().auth();

    view! {
        <header class="auth-header">
            <A href="/" attr:class=String::from("auth-header__brand")>"One Concept a Day"</A>
            <nav class="auth-header__nav">
                <Show when=move || !auth.get().loading>
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <A href="/login" attr:class=String::from("auth-header__link")>"Log in"</A>
                                <A href="/signup" attr:class=String::from("btn auth-header__link auth-header__link--primary")>
                                    "Sign up"
                                </A>
                            }
                        }
                    >
                        <A href="/dashboard" attr:class=String::from("auth-header__link")>"Dashboard"</A>
                    </Show>
                </Show>
            </nav>
        </header>
    }
}
