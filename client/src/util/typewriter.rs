//! Time-paced text reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Concept explanations are revealed one character per tick. `Typewriter` is
//! the pure reveal state; `use_typewriter` drives it from a timer inside a
//! component and restarts from empty whenever the source text changes.
//!
//! DESIGN
//! ======
//! Each reveal run owns a generation number. A run stops as soon as the
//! shared counter moves past it, which happens on restart and on component
//! teardown, so a stale timer never writes to the output signal.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use leptos::prelude::*;

/// Incremental reveal of one target string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    /// Byte length of the revealed prefix; always on a char boundary.
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into(), shown: 0 }
    }

    /// Reveal one more character. Returns `false` once nothing is left.
    pub fn tick(&mut self) -> bool {
        match self.target[self.shown..].chars().next() {
            Some(ch) => {
                self.shown += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn visible(&self) -> &str {
        &self.target[..self.shown]
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown == self.target.len()
    }

    /// Start over from empty with a new target.
    pub fn restart(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.shown = 0;
    }
}

/// Reveal `text` into the returned signal at `delay` per character.
///
/// A change of `text` abandons the current reveal and starts from empty.
pub fn use_typewriter(text: Signal<String>, delay: Duration) -> ReadSignal<String> {
    let (shown, set_shown) = signal(String::new());
    let generation = Arc::new(AtomicU64::new(0));

    let teardown = generation.clone();
    on_cleanup(move || {
        teardown.fetch_add(1, Ordering::Relaxed);
    });

    Effect::new(move || {
        let target = text.get();
        let run = generation.fetch_add(1, Ordering::Relaxed) + 1;
        set_shown.set(String::new());
        start_reveal(target, delay, run, generation.clone(), set_shown);
    });

    shown
}

#[cfg(feature = "hydrate")]
fn start_reveal(
    target: String,
    delay: Duration,
    run: u64,
    generation: Arc<AtomicU64>,
    set_shown: WriteSignal<String>,
) {
    leptos::task::spawn_local(async move {
        let mut writer = Typewriter::new(target);
        while !writer.is_done() {
            gloo_timers::future::sleep(delay).await;
            if generation.load(Ordering::Relaxed) != run {
                return;
            }
            writer.tick();
            set_shown.set(writer.visible().to_owned());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_reveal(
    target: String,
    _delay: Duration,
    _run: u64,
    _generation: Arc<AtomicU64>,
    set_shown: WriteSignal<String>,
) {
    set_shown.set(target);
}
