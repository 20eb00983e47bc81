//! Slide-in panel for adding and removing interests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard owns the `InterestEditor` and the request loop; this panel
//! renders the editor's visible list and reports add/remove intents through
//! callbacks. Opening mounts the panel and slides it in on the next frame;
//! closing slides it out and unmounts once the exit animation has run.

#[cfg(test)]
#[path = "edit_interests_test.rs"]
mod edit_interests_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::interests::InterestEditor;

/// Pause between mounting the panel and starting its slide-in.
pub const ENTER_DELAY: Duration = Duration::from_millis(10);
/// Length of the slide-out animation.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Mount/visibility phase of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Closed,
    /// Mounted, waiting to slide in.
    Entering,
    Open,
    /// Sliding out, unmounted when the animation ends.
    Leaving,
}

impl PanelPhase {
    #[must_use]
    pub fn request_open(self) -> Self {
        match self {
            Self::Closed | Self::Leaving => Self::Entering,
            other => other,
        }
    }

    #[must_use]
    pub fn request_close(self) -> Self {
        match self {
            Self::Entering | Self::Open => Self::Leaving,
            other => other,
        }
    }

    /// Timer completion for a slide-in. Ignored if the panel was closed again
    /// in the meantime.
    #[must_use]
    pub fn entered(self) -> Self {
        match self {
            Self::Entering => Self::Open,
            other => other,
        }
    }

    /// Timer completion for a slide-out. Ignored if the panel was reopened
    /// in the meantime.
    #[must_use]
    pub fn left(self) -> Self {
        match self {
            Self::Leaving => Self::Closed,
            other => other,
        }
    }

    #[must_use]
    pub fn is_mounted(self) -> bool {
        self != Self::Closed
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Open
    }
}

/// Run `apply` once `delay` has elapsed.
fn after(delay: Duration, apply: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        apply();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
        apply();
    }
}

#[component]
pub fn EditInterests(
    /// Requested open state; the panel animates toward it.
    open: RwSignal<bool>,
    #[prop(into)] editor: Signal<InterestEditor>,
    /// Last mutation failure, if any.
    #[prop(into)]
    error: Signal<Option<String>>,
    on_add: Callback<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let phase = RwSignal::new(PanelPhase::Closed);
    let draft = RwSignal::new(String::new());

    Effect::new(move || {
        if open.get() {
            phase.update(|p| *p = p.request_open());
            after(ENTER_DELAY, move || {
                let _ = phase.try_update(|p| *p = p.entered());
            });
        } else {
            phase.update(|p| *p = p.request_close());
            after(EXIT_ANIMATION, move || {
                let _ = phase.try_update(|p| *p = p.left());
            });
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = draft.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_add.run(value);
        draft.set(String::new());
    };

    view! {
        <Show when=move || phase.get().is_mounted()>
            <div class="edit-interests-backdrop" on:click=move |_| open.set(false)></div>
            <aside
                class="edit-interests"
                class:edit-interests--open=move || phase.get().is_visible()
                aria-label="Edit interests"
            >
                <div class="edit-interests__header">
                    <h2>"Edit Interests"</h2>
                    <button class="edit-interests__close" title="Close" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                </div>

                <form class="edit-interests__form" on:submit=submit>
                    <input
                        class="edit-interests__input"
                        type="text"
                        placeholder="Add interest"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn edit-interests__add" type="submit">"Add"</button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="edit-interests__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || editor.with(InterestEditor::is_busy)>
                    <p class="edit-interests__status">"Saving..."</p>
                </Show>

                <ul class="edit-interests__list">
                    <For
                        each=move || editor.with(InterestEditor::interests)
                        key=|interest| interest.clone()
                        children=move |interest| {
                            let label = interest.clone();
                            view! {
                                <li class="edit-interests__item">
                                    <span>{label}</span>
                                    <button
                                        class="edit-interests__remove"
                                        title="Remove"
                                        on:click=move |_| on_remove.run(interest.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </aside>
        </Show>
    }
}
