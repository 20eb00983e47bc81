//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the persisted user record and exposes it through the
//! `AuthState` signal. The remaining modules are plain state machines that
//! pages drive and render.

pub mod auth;
pub mod concept;
pub mod interests;
pub mod request;
pub mod session;
