use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Login successful!");
    let b = state.push(ToastKind::Error, "Login failed!");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].message, "Login failed!");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "x");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "x");
    state.dismiss(a);
    let b = state.push(ToastKind::Error, "y");
    assert_ne!(a, b);
}

#[test]
fn toast_ttl_is_two_and_a_half_seconds() {
    assert_eq!(TOAST_TTL.as_millis(), 2500);
    assert_eq!(ToastKind::Error.css_class(), "toast toast--error");
}
