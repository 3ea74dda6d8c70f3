//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `AuthApi` seam and `types`
//! defines the request/response schema and error taxonomy.

pub mod api;
pub mod types;
