//! Registration page: username, email, password and confirmation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::spinner::Spinner;
use crate::net::api::HttpAuthApi;
use crate::pages::submission::{Begin, begin, prepare_register};
use crate::state::form::{ErrorState, FormState, REGISTER_FIELDS};
use crate::state::phase::SubmitPhase;
use crate::state::toast::ToastState;
use crate::util::redirect::RedirectTimer;

/// On success the form is cleared and the user is sent to `/login`.
/// A failed request leaves every field as typed.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<HttpAuthApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(FormState::register());
    let errors = RwSignal::new(ErrorState::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let redirect = RedirectTimer::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        match begin(phase, || prepare_register(&snapshot)) {
            Begin::AlreadySubmitting => {}
            Begin::Invalid(found) => errors.set(found),
            Begin::Ready(flight, credentials) => {
                errors.set(ErrorState::default());

                #[cfg(feature = "hydrate")]
                {
                    use crate::pages::submission::{apply_outcome, send_register};
                    use crate::util::storage::BrowserStorage;

                    let api = api.clone();
                    let navigate = navigate.clone();
                    let redirect = redirect.clone();
                    leptos::task::spawn_local(async move {
                        let outcome = send_register(&api, &BrowserStorage, flight, credentials).await;
                        apply_outcome(outcome, form, toasts, &redirect, navigate);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (flight, credentials, &api, &navigate, &redirect, toasts);
            }
        }
    };

    let fields = REGISTER_FIELDS
        .into_iter()
        .map(|field| view! { <FormField field=field form=form errors=errors/> })
        .collect_view();

    view! {
        <div class="auth-page auth-page--register">
            <div class="auth-card">
                <h2 class="auth-card__title">"Register"</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {fields}
                    <button class="submit-button" type="submit" disabled=move || phase.get().is_busy()>
                        <Show when=move || phase.get().is_busy() fallback=|| "Register">
                            <Spinner/>
                        </Show>
                    </button>
                </form>
                <div class="auth-card__switch">
                    <h3>"Already have an Account?"</h3>
                    <A href="/login">"Log in"</A>
                </div>
            </div>
        </div>
    }
}
