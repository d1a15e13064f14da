//! Sign-in controller context and hooks for the UI.

use dioxus::prelude::*;
use store::{LoginConfig, UserDirectory};

use crate::controller::FormController;
use crate::repo::{make_store, SharedStore};

/// Signal holding the sign-in view model.
pub type AuthState = Signal<FormController<SharedStore>>;

/// Get the sign-in controller.
/// Returns a signal that updates on every form edit and view transition.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Provider component that owns the sign-in controller.
/// Wrap your app with this component to enable the sign-in card.
#[component]
pub fn AuthProvider(config: LoginConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::debug!(
            "Using storage key {:?}, latency {:?}",
            config.storage.users_key,
            config.latency()
        );
        let directory = UserDirectory::with_keys(make_store(), config.storage.clone());
        Signal::new(FormController::new(directory, config.latency()))
    });

    rsx! {
        {children}
    }
}
