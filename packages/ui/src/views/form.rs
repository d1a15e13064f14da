use dioxus::prelude::*;

use crate::controller::FormState;
use crate::validation::{Field, FieldError};

/// The sign-in form. Invalid fields get the `input-error` class and an inline
/// `role="alert"` message directly after the input.
#[component]
pub fn FormView(
    form: FormState,
    /// Called on every keystroke with the edited field and its new value.
    on_input: EventHandler<(Field, String)>,
    on_submit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        form {
            class: "login-form",
            onsubmit: move |evt: FormEvent| on_submit.call(evt),

            h2 { "Sign in" }

            FieldInput {
                field: Field::Name,
                label: "Name",
                kind: "text",
                value: form.input.name.clone(),
                error: form.error(Field::Name),
                on_input: on_input,
            }
            FieldInput {
                field: Field::Age,
                label: "Age",
                kind: "number",
                value: form.input.age.clone(),
                error: form.error(Field::Age),
                on_input: on_input,
            }
            FieldInput {
                field: Field::Password,
                label: "Password",
                kind: "password",
                value: form.input.password.clone(),
                error: form.error(Field::Password),
                on_input: on_input,
            }

            button {
                class: "btn",
                r#type: "submit",
                disabled: form.is_submitting(),
                "{form.submit_label()}"
            }
        }
    }
}

#[component]
fn FieldInput(
    field: Field,
    label: &'static str,
    kind: &'static str,
    value: String,
    error: Option<FieldError>,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    let class = if error.is_some() { "input input-error" } else { "input" };

    rsx! {
        div {
            class: "field",
            label { r#for: field.id(), "{label}" }
            input {
                id: field.id(),
                name: field.id(),
                class: class,
                r#type: kind,
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
            }
            if let Some(err) = error {
                div {
                    class: "error-msg",
                    role: "alert",
                    "{err}"
                }
            }
        }
    }
}
