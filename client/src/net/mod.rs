//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps each endpoint to a typed call, `http` is the transport seam,
//! `error` is the failure taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
