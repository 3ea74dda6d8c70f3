//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `phase`, `toast`) so pages and
//! components depend on small focused models.

pub mod form;
pub mod phase;
pub mod toast;
