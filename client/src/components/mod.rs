//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the concept/interest surfaces while
//! reading shared session state from Leptos context.

pub mod auth_header;
pub mod concept_view;
pub mod edit_interests;
