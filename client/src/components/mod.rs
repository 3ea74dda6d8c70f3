//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form inputs, the busy spinner, and the toast stack while
//! reading/writing page signals or shared state from Leptos context.

pub mod form_field;
pub mod spinner;
pub mod toast_host;
