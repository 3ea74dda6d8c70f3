//! Server-side services used by the HTTP routes.

pub mod auth_proxy;
