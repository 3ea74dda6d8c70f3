//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, submit phase,
//! redirect timer) and delegates rendering details to `components`. The
//! submit flow shared by the two forms lives in `submission`.

pub mod home;
pub mod layout;
pub mod login;
pub mod register;
pub mod submission;
