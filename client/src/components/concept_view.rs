//! Concept card with a typewriter-revealed explanation.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::util::typewriter::use_typewriter;

#[component]
pub fn ConceptView(
    /// Headline term; may be empty for category-only lookups.
    #[prop(into)]
    term: Signal<String>,
    #[prop(into)] explanation: Signal<String>,
) -> impl IntoView {
    let revealed = use_typewriter(explanation, ClientConfig::from_build_env().typewriter_delay);

    view! {
        <article class="concept-view">
            <Show when=move || !term.get().is_empty()>
                <h2 class="concept-view__term">{move || term.get()}</h2>
            </Show>
            <p class="concept-view__explanation">{move || revealed.get()}</p>
        </article>
    }
}
