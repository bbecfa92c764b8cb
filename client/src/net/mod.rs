//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` re-exports the shared wire schema
//! from the `contract` crate.

pub mod api;
pub mod types;
