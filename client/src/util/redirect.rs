//! Delayed post-submit navigation tied to the page lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a successful submit the page waits `REDIRECT_DELAY` so the success
//! toast is visible, then navigates. If the page is torn down first (the user
//! clicked away) the pending timer is cleared, and a redirect requested after
//! teardown is never scheduled at all.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Bookkeeping for one cancellable timer, generic over the platform handle.
#[derive(Debug)]
pub struct ScheduledTask<H> {
    pending: Option<H>,
    cancelled: bool,
}

impl<H> Default for ScheduledTask<H> {
    fn default() -> Self {
        Self { pending: None, cancelled: false }
    }
}

impl<H> ScheduledTask<H> {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Record a freshly scheduled timer.
    ///
    /// Returns a handle the caller must clear: the new one when the task was
    /// already cancelled, otherwise any timer it replaces.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        if self.cancelled {
            return Some(handle);
        }
        self.pending.replace(handle)
    }

    /// Called from the timer callback. Returns whether the action should run.
    pub fn fire(&mut self) -> bool {
        self.pending = None;
        !self.cancelled
    }

    /// Mark the owner as gone and hand back the pending handle to clear.
    pub fn cancel(&mut self) -> Option<H> {
        self.cancelled = true;
        self.pending.take()
    }
}

fn lock<H>(task: &Mutex<ScheduledTask<H>>) -> MutexGuard<'_, ScheduledTask<H>> {
    task.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Page-scoped redirect timer. Clones share the same underlying task.
#[derive(Clone, Default)]
pub struct RedirectTimer {
    task: Arc<Mutex<ScheduledTask<TimeoutHandle>>>,
}

impl RedirectTimer {
    /// Create a timer that is cancelled when the current reactive owner is cleaned up.
    pub fn new() -> Self {
        let timer = Self::default();
        let task = Arc::clone(&timer.task);
        on_cleanup(move || {
            if let Some(handle) = lock(&task).cancel() {
                handle.clear();
            }
        });
        timer
    }

    pub fn is_cancelled(&self) -> bool {
        lock(&self.task).is_cancelled()
    }

    /// Navigate to `path` after [`REDIRECT_DELAY`] unless the page goes away first.
    pub fn schedule<F>(&self, path: &'static str, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        if self.is_cancelled() {
            log::debug!("page torn down; skipping redirect to {path}");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let task = Arc::clone(&self.task);
            let fire = move || {
                if lock(&task).fire() {
                    navigate(path, NavigateOptions::default());
                }
            };
            match set_timeout_with_handle(fire, REDIRECT_DELAY) {
                Ok(handle) => {
                    if let Some(stale) = lock(&self.task).arm(handle) {
                        stale.clear();
                    }
                }
                Err(e) => log::warn!("failed to schedule redirect to {path}: {e:?}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = navigate;
        }
    }
}
