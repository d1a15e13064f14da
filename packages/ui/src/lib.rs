//! This crate contains all shared UI for the workspace.

pub mod controller;
pub use controller::{Completion, FormController, FormState, ResultState, Submission, SubmissionId, View};

pub mod validation;
pub use validation::{validate, Field, FieldError, FieldErrors, FormInput};

pub mod delay;

mod repo;
pub use repo::{make_store, SharedStore};

pub mod views;
pub use views::{FormView, ResultView, SignInView};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod live_region;
pub use live_region::LiveRegion;
