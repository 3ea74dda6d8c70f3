//! Top-center toast stack and the helper pages use to raise toasts.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL;

/// Push a toast and schedule its dismissal after `TOAST_TTL`.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders every active toast; clicking one dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
