//! Login page: email + password form posting to `LoginUser`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::spinner::Spinner;
use crate::net::api::HttpAuthApi;
use crate::pages::submission::{Begin, begin, prepare_login};
use crate::state::form::{ErrorState, Field, FormState};
use crate::state::phase::SubmitPhase;
use crate::state::toast::ToastState;
use crate::util::redirect::RedirectTimer;

/// On success the tokens are stored and the user lands on `/` a second later.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpAuthApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(FormState::login());
    let errors = RwSignal::new(ErrorState::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let redirect = RedirectTimer::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        match begin(phase, || prepare_login(&snapshot)) {
            Begin::AlreadySubmitting => {}
            Begin::Invalid(found) => errors.set(found),
            Begin::Ready(flight, credentials) => {
                errors.set(ErrorState::default());

                #[cfg(feature = "hydrate")]
                {
                    use crate::pages::submission::{apply_outcome, send_login};
                    use crate::util::storage::BrowserStorage;

                    let api = api.clone();
                    let navigate = navigate.clone();
                    let redirect = redirect.clone();
                    leptos::task::spawn_local(async move {
                        let outcome = send_login(&api, &BrowserStorage, flight, credentials).await;
                        apply_outcome(outcome, form, toasts, &redirect, navigate);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (flight, credentials, &api, &navigate, &redirect, toasts);
            }
        }
    };

    view! {
        <div class="auth-page auth-page--login">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField field=Field::Email form=form errors=errors/>
                    <FormField field=Field::Password form=form errors=errors/>
                    <button class="submit-button" type="submit" disabled=move || phase.get().is_busy()>
                        <Show when=move || phase.get().is_busy() fallback=|| "Login">
                            <Spinner/>
                        </Show>
                    </button>
                </form>
                <div class="auth-card__switch">
                    <h3>"Don't have an account?"</h3>
                    <A href="/register">"Register"</A>
                </div>
            </div>
        </div>
    }
}
