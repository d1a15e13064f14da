//! The sign-in card: form, result and live region wired to the controller.

use dioxus::prelude::*;

use crate::controller::View;
use crate::live_region::LiveRegion;
use crate::validation::Field;
use crate::{delay, use_auth};

use super::{FormView, ResultView};

/// Sign-in card. Must be rendered inside an [`AuthProvider`](crate::AuthProvider).
#[component]
pub fn SignInView() -> Element {
    let mut controller = use_auth();
    // Delayed evaluation of the in-flight submission, if any.
    let mut pending = use_signal(|| Option::<Task>::None);

    // Spawned tasks die with this component; release the submit button too.
    use_drop(move || {
        if let Ok(mut c) = controller.try_write() {
            c.cancel_pending();
        }
    });

    let handle_input = move |(field, value): (Field, String)| {
        let mut c = controller.write();
        match field {
            Field::Name => c.set_name(value),
            Field::Age => c.set_age(value),
            Field::Password => c.set_password(value),
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(submission) = controller.write().submit() else {
            return;
        };
        let latency = controller.peek().latency();
        let task = spawn(async move {
            delay::sleep(latency).await;
            let completion = controller.write().complete(submission);
            tracing::debug!("Submission finished: {:?}", completion);
            pending.set(None);
        });
        pending.set(Some(task));
    };

    let mut leave_result = move |sign_out: bool| {
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let mut c = controller.write();
        c.cancel_pending();
        if sign_out {
            c.sign_out();
        } else {
            c.back_to_form();
        }
    };

    let status = controller.read().status().to_string();
    let body = match controller.read().view().clone() {
        View::Form(form) => rsx! {
            FormView {
                form: form,
                on_input: handle_input,
                on_submit: handle_submit,
            }
        },
        View::Result(result) => rsx! {
            ResultView {
                result: result,
                on_sign_out: move |_| leave_result(true),
                on_back: move |_| leave_result(false),
            }
        },
    };

    rsx! {
        div {
            class: "container",
            {body}
        }
        LiveRegion { message: status }
    }
}
