//! Public landing page: try a concept for any topic without an account.

use leptos::prelude::*;

use crate::components::auth_header::AuthHeader;
use crate::components::concept_view::ConceptView;
use crate::net::api::ApiClient;
use crate::net::types::CategoryConcept;
use crate::state::interests::normalize_interest;
use crate::state::request::{Request, RequestStatus};

#[component]
pub fn LandingPage() -> impl IntoView {
    let category = RwSignal::new(String::new());
    let lookup = RwSignal::new(Request::<CategoryConcept>::default());
    let hint = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if lookup.with_untracked(Request::is_pending) {
            return;
        }
        let Some(topic) = normalize_interest(&category.get_untracked()) else {
            hint.set(Some("Enter a topic first."));
            return;
        };
        hint.set(None);
        let ticket = lookup.try_update(Request::start);
        let Some(ticket) = ticket else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = ApiClient::browser().fetch_concept_by_category(&topic).await;
            let _ = lookup.try_update(|r| r.settle(ticket, result));
        });
    };

    let explanation = Signal::derive(move || {
        lookup.with(|r| r.value().map(|c| c.concept.clone()).unwrap_or_default())
    });

    view! {
        <div class="landing-page">
            <AuthHeader/>
            <main class="landing-card">
                <h1>"One Concept a Day"</h1>
                <p class="landing-card__subtitle">"What's on your mind?"</p>
                <form class="landing-form" on:submit=on_submit>
                    <input
                        class="landing-input"
                        type="text"
                        placeholder="Try a topic (e.g. 'AI')"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <button class="btn landing-button" type="submit" disabled=move || lookup.with(Request::is_pending)>
                        {move || if lookup.with(Request::is_pending) { "Loading..." } else { "Get Concept" }}
                    </button>
                </form>
                <Show when=move || hint.get().is_some()>
                    <p class="landing-message">{move || hint.get().unwrap_or_default()}</p>
                </Show>
                {move || match lookup.with(|r| r.status().clone()) {
                    RequestStatus::Succeeded(_) => {
                        view! { <ConceptView term=String::new() explanation=explanation/> }.into_any()
                    }
                    RequestStatus::Failed(e) => view! { <p class="landing-message landing-message--error">{e.to_string()}</p> }.into_any(),
                    _ => ().into_any(),
                }}
            </main>
        </div>
    }
}
