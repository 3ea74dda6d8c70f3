//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers) and
//! pure form rules from page and component logic to improve reuse and
//! testability.

pub mod redirect;
pub mod storage;
pub mod validate;
