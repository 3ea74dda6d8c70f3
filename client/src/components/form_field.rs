//! Labeled form input with its inline validation message.
//!
//! ARCHITECTURE
//! ============
//! The component owns no state. It reads the page's `FormState` and
//! `ErrorState` signals and routes each keystroke through
//! `apply_field_change`, so only the edited field's error is cleared.

use leptos::prelude::*;

use crate::state::form::{ErrorState, Field, FormState, apply_field_change};

#[component]
pub fn FormField(field: Field, form: RwSignal<FormState>, errors: RwSignal<ErrorState>) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).map(str::to_owned));

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            errors.update(|e| apply_field_change(f, e, field, value));
        });
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for=field.name()>{field.label()}</label>
            <input
                class="form-field__input"
                id=field.name()
                name=field.name()
                type=field.input_type()
                prop:value=move || form.with(|f| f.get(field).to_owned())
                on:input=on_input
            />
            <Show when=move || error().is_some()>
                <p class="form-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
