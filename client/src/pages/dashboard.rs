//! Authenticated dashboard: greeting, interest chips and the daily concept.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard reads identity from `SessionContext` and drives a
//! `DailyConceptState`: the category defaults to the first interest, a fetch
//! fires once per category, and clicking a chip switches category. It also
//! owns the `InterestEditor` behind the edit panel and the loop that sends
//! its mutations one at a time.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures render the `ApiError` message; retryable ones get a retry
//! button. Interest mutation failures are shown in the panel and the edit is
//! dropped from the visible list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::concept_view::ConceptView;
use crate::components::edit_interests::EditInterests;
use crate::net::api::ApiClient;
use crate::state::concept::{DailyConceptState, DashboardView, dashboard_view};
use crate::state::interests::{InterestEditor, drain_mutations};
use crate::state::session::{SessionContext, token_for};
use crate::util::auth::install_unauth_redirect;

/// Status text for the concept area, where one applies.
fn status_line(view: &DashboardView) -> Option<&'static str> {
    match view {
        DashboardView::Checking => Some("Loading..."),
        DashboardView::Unauthenticated => Some("Redirecting to login..."),
        DashboardView::Greeting => Some("Add an interest to get your first concept."),
        DashboardView::Fetching => Some("Fetching today's concept..."),
        DashboardView::Showing(_) | DashboardView::Failed(_) => None,
    }
}

fn greeting(username: &str) -> String {
    format!("Welcome, {username}!")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.auth();
    let logging_out = RwSignal::new(false);
    install_unauth_redirect(auth, logging_out, use_navigate());

    let concept = RwSignal::new(DailyConceptState::default());

    Effect::new(move || {
        if let Some(user) = auth.with(|a| a.user.clone()) {
            concept.maybe_update(|state| state.adopt_default_category(&user));
        }
    });

    let alive = Arc::new(AtomicBool::new(true));
    let fetch_alive = alive.clone();
    Effect::new(move || {
        if !concept.with(DailyConceptState::should_fetch) {
            return;
        }
        let Some(user) = session.user_untracked() else {
            return;
        };
        let Some((ticket, category)) = concept.try_update(DailyConceptState::begin_fetch).flatten() else {
            return;
        };
        let alive = fetch_alive.clone();
        leptos::task::spawn_local(async move {
            let token = token_for(&user).map(str::to_owned);
            let result = ApiClient::browser().fetch_daily_concept(&user.id, &category, token.as_deref()).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            concept.update(|state| {
                if !state.settle(ticket, result) {
                    log::debug!("discarding stale concept for {category}");
                }
            });
        });
    });
    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        let _ = concept.try_update(DailyConceptState::cancel);
    });

    let view_state = Memo::new(move |_| concept.with(|state| auth.with(|a| dashboard_view(a, state))));

    let panel_open = RwSignal::new(false);
    let editor = RwSignal::new(InterestEditor::default());
    let edit_error = RwSignal::new(None::<String>);
    let draining = RwSignal::new(false);

    let drain = move || {
        if draining.get_untracked() {
            return;
        }
        let Some(user) = session.user_untracked() else {
            return;
        };
        draining.set(true);
        leptos::task::spawn_local(async move {
            let token = token_for(&user).map(str::to_owned);
            drain_mutations(
                &ApiClient::browser(),
                &user.id,
                token.as_deref(),
                || editor.try_update(InterestEditor::start_next).flatten(),
                |result| {
                    if let Some(Some(e)) = editor.try_update(|ed| ed.finish(result)) {
                        let _ = edit_error.try_set(Some(e.to_string()));
                    }
                    if let Some(confirmed) = editor.try_with_untracked(|ed| ed.confirmed().to_vec()) {
                        session.replace_interests(confirmed);
                    }
                },
            )
            .await;
            let _ = draining.try_set(false);
        });
    };

    let on_add = Callback::new(move |raw: String| {
        edit_error.set(None);
        let mut queued = false;
        editor.update(|ed| queued = ed.add(&raw));
        if queued {
            drain();
        }
    });
    let on_remove = Callback::new(move |interest: String| {
        edit_error.set(None);
        editor.update(|ed| ed.remove(&interest));
        drain();
    });

    let on_edit = move |_| {
        if !editor.with_untracked(InterestEditor::is_busy) {
            let interests = session.user_untracked().map(|u| u.interests).unwrap_or_default();
            editor.set(InterestEditor::new(interests));
        }
        edit_error.set(None);
        panel_open.set(true);
    };

    let on_logout = move |_| {
        logging_out.set(true);
        session.log_out();
    };

    let username = move || auth.with(|a| a.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let interests = move || auth.with(|a| a.user.as_ref().map(|u| u.interests.clone()).unwrap_or_default());

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || status_line(&view_state.get()).unwrap_or_default()}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">{move || greeting(&username())}</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__edit" on:click=on_edit>
                        "Edit interests"
                    </button>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <nav class="dashboard-page__chips">
                    <For
                        each=interests
                        key=|interest| interest.clone()
                        children=move |interest| {
                            let label = interest.clone();
                            let chip = interest.clone();
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || concept.with(|s| s.category == chip)
                                    on:click=move |_| {
                                        concept.maybe_update(|s| s.select_category(&interest));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </nav>

                <section class="dashboard-page__concept">
                    {move || match view_state.get() {
                        DashboardView::Showing(c) => {
                            view! { <ConceptView term=c.term explanation=c.explanation/> }.into_any()
                        }
                        DashboardView::Failed(e) => {
                            let retryable = e.is_retryable();
                            view! {
                                <div class="dashboard-page__error">
                                    <p>{e.to_string()}</p>
                                    <Show when=move || retryable>
                                        <button
                                            class="btn"
                                            on:click=move |_| {
                                                concept.maybe_update(DailyConceptState::retry);
                                            }
                                        >
                                            "Try again"
                                        </button>
                                    </Show>
                                </div>
                            }
                                .into_any()
                        }
                        other => view! { <p class="dashboard-page__status">{status_line(&other)}</p> }.into_any(),
                    }}
                </section>

                <EditInterests
                    open=panel_open
                    editor=editor
                    error=edit_error
                    on_add=on_add
                    on_remove=on_remove
                />
            </div>
        </Show>
    }
}
