//! Validate → call → persist/notify → navigate, shared by the login and
//! registration pages.
//!
//! DESIGN
//! ======
//! The flow is split at the await point. `begin` runs synchronously inside
//! the submit handler: it rejects duplicate submits, validates, and moves the
//! phase to `Submitting` before any task is spawned, so a second click can
//! never slip in. The returned `InFlight` guard is moved into the async half
//! (`send_login` / `send_register`) and puts the phase back to `Idle` when it
//! drops, on every exit path.
//!
//! Everything above `apply_outcome` is free of Leptos so it can be driven by
//! in-memory fakes in tests.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::toast_host::notify;
use crate::net::api::AuthApi;
use crate::net::types::{LoginCredentials, RegisterCredentials};
use crate::state::form::{ErrorState, FormState};
use crate::state::phase::{PhaseTracker, SubmitPhase};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::redirect::RedirectTimer;
use crate::util::storage::{TokenStore, persist_tokens};
use crate::util::validate::{validate_login, validate_register};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed!";
pub const REGISTER_SUCCESS: &str = "Registration successful!";
pub const REGISTER_FAILED: &str = "Registration failed!";

/// Where each form navigates after success.
pub const LOGIN_REDIRECT: &str = "/";
pub const REGISTER_REDIRECT: &str = "/login";

/// Result of the async half of a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded { notice: &'static str, redirect_to: &'static str, clear_form: bool },
    Failed { notice: String },
}

/// Result of the synchronous half of a submission.
pub enum Begin<T: PhaseTracker, C> {
    /// A request from this form is still outstanding; the submit is ignored.
    AlreadySubmitting,
    /// Validation failed; show these messages inline.
    Invalid(ErrorState),
    /// Validation passed and the phase is now `Submitting`.
    Ready(InFlight<T>, C),
}

/// Holds the form in `Submitting` and releases it to `Idle` on drop.
pub struct InFlight<T: PhaseTracker> {
    tracker: T,
}

impl<T: PhaseTracker> InFlight<T> {
    fn resolve(&self, phase: SubmitPhase) {
        self.tracker.set_phase(phase);
    }
}

impl<T: PhaseTracker> Drop for InFlight<T> {
    fn drop(&mut self) {
        self.tracker.set_phase(SubmitPhase::Idle);
    }
}

/// Run validation and, if it passes, enter `Submitting`.
pub fn begin<T, C>(tracker: T, validate: impl FnOnce() -> Result<C, ErrorState>) -> Begin<T, C>
where
    T: PhaseTracker,
{
    if tracker.phase().is_busy() {
        return Begin::AlreadySubmitting;
    }
    tracker.set_phase(SubmitPhase::Validating);
    match validate() {
        Err(errors) => {
            tracker.set_phase(SubmitPhase::Idle);
            Begin::Invalid(errors)
        }
        Ok(payload) => {
            tracker.set_phase(SubmitPhase::Submitting);
            Begin::Ready(InFlight { tracker }, payload)
        }
    }
}

/// Validate a login form snapshot into its request payload.
pub fn prepare_login(form: &FormState) -> Result<LoginCredentials, ErrorState> {
    let errors = validate_login(form);
    if errors.is_empty() { Ok(LoginCredentials::from_form(form)) } else { Err(errors) }
}

/// Validate a registration form snapshot into its request payload.
pub fn prepare_register(form: &FormState) -> Result<RegisterCredentials, ErrorState> {
    let errors = validate_register(form);
    if errors.is_empty() { Ok(RegisterCredentials::from_form(form)) } else { Err(errors) }
}

/// Call `LoginUser`, persisting both tokens on success.
pub async fn send_login<A, S, T>(api: &A, store: &S, flight: InFlight<T>, credentials: LoginCredentials) -> SubmitOutcome
where
    A: AuthApi,
    S: TokenStore + ?Sized,
    T: PhaseTracker,
{
    match api.login_user(&credentials).await {
        Ok(tokens) => {
            persist_tokens(store, &tokens);
            log::info!("login succeeded");
            flight.resolve(SubmitPhase::Success);
            SubmitOutcome::Succeeded { notice: LOGIN_SUCCESS, redirect_to: LOGIN_REDIRECT, clear_form: false }
        }
        Err(e) => {
            log::error!("login error: {e}");
            flight.resolve(SubmitPhase::Failed);
            SubmitOutcome::Failed { notice: e.notice(LOGIN_FAILED) }
        }
    }
}

/// Call `RegisterUser`, persisting tokens only when the response carries them.
pub async fn send_register<A, S, T>(
    api: &A,
    store: &S,
    flight: InFlight<T>,
    credentials: RegisterCredentials,
) -> SubmitOutcome
where
    A: AuthApi,
    S: TokenStore + ?Sized,
    T: PhaseTracker,
{
    match api.register_user(&credentials).await {
        Ok(resp) => {
            log::debug!("register response: {resp:?}");
            if let Some(tokens) = resp.tokens() {
                persist_tokens(store, &tokens);
            }
            flight.resolve(SubmitPhase::Success);
            SubmitOutcome::Succeeded { notice: REGISTER_SUCCESS, redirect_to: REGISTER_REDIRECT, clear_form: true }
        }
        Err(e) => {
            log::error!("registration error: {e}");
            flight.resolve(SubmitPhase::Failed);
            SubmitOutcome::Failed { notice: e.notice(REGISTER_FAILED) }
        }
    }
}

/// Show the outcome to the user: toast, optional form reset, delayed redirect.
pub fn apply_outcome<N>(
    outcome: SubmitOutcome,
    form: RwSignal<FormState>,
    toasts: RwSignal<ToastState>,
    redirect: &RedirectTimer,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    match outcome {
        SubmitOutcome::Succeeded { notice, redirect_to, clear_form } => {
            if clear_form {
                let _ = form.try_update(FormState::clear);
            }
            notify(toasts, ToastKind::Success, notice);
            redirect.schedule(redirect_to, navigate);
        }
        SubmitOutcome::Failed { notice } => notify(toasts, ToastKind::Error, notice),
    }
}
