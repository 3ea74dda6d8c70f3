use super::*;

#[test]
fn default_phase_is_idle() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
}

#[test]
fn only_submitting_is_busy() {
    assert!(SubmitPhase::Submitting.is_busy());
    for phase in [SubmitPhase::Idle, SubmitPhase::Validating, SubmitPhase::Success, SubmitPhase::Failed] {
        assert!(!phase.is_busy(), "{phase:?} should not be busy");
    }
}

#[test]
fn signal_tracker_reads_back_written_phase() {
    let signal = RwSignal::new(SubmitPhase::Idle);
    signal.set_phase(SubmitPhase::Submitting);
    assert_eq!(PhaseTracker::phase(&signal), SubmitPhase::Submitting);
}
