use dioxus::prelude::*;

use crate::controller::ResultState;

/// Card shown after a successful sign-in or registration.
#[component]
pub fn ResultView(
    result: ResultState,
    on_sign_out: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "result-card",
            role: "status",
            "aria-live": "polite",

            h2 { "Success" }
            p { class: "result-message", "{result.message}" }

            div {
                class: "result-actions",
                button {
                    id: "signout-btn",
                    class: "btn",
                    onclick: move |_| on_sign_out.call(()),
                    "Sign out"
                }
                button {
                    id: "back-btn",
                    class: "btn btn-ghost",
                    onclick: move |_| on_back.call(()),
                    "Back to form"
                }
            }
        }
    }
}
