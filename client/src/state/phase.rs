//! Submission phase of a single form instance.
//!
//! DESIGN
//! ======
//! Pages keep the phase in an `RwSignal<SubmitPhase>`; the submission flow
//! only sees the `PhaseTracker` seam so it can be driven by a plain `Cell` in
//! tests.

#[cfg(test)]
#[path = "phase_test.rs"]
mod phase_test;

use leptos::prelude::*;

/// `Idle → Validating → Submitting → {Success, Failed} → Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

impl SubmitPhase {
    /// The submit control is disabled and shows a spinner in this phase.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Read/write access to a form's current phase.
pub trait PhaseTracker {
    fn phase(&self) -> SubmitPhase;
    fn set_phase(&self, phase: SubmitPhase);
}

impl<T: PhaseTracker + ?Sized> PhaseTracker for &T {
    fn phase(&self) -> SubmitPhase {
        (**self).phase()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        (**self).set_phase(phase);
    }
}

// A disposed signal (page unmounted mid-request) reads as idle and ignores writes.
impl PhaseTracker for RwSignal<SubmitPhase> {
    fn phase(&self) -> SubmitPhase {
        self.try_get_untracked().unwrap_or_default()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        let _ = self.try_set(phase);
    }
}
