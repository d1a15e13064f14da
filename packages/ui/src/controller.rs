//! # Form controller — the sign-in view model
//!
//! [`FormController`] owns everything the sign-in card renders: the raw field
//! values, the inline errors, the submit button state, the live-region status and
//! which of the two views is showing. Components only read it and forward events;
//! no markup is built here.
//!
//! ## States
//!
//! | From | Event | To |
//! |------|-------|----|
//! | FORM | invalid submit, wrong password, failed save | FORM (annotations and status only) |
//! | FORM | sign in or registration | RESULT |
//! | RESULT | sign out, back to form | fresh FORM |
//!
//! ## Submissions
//!
//! [`submit`](FormController::submit) hands out a [`Submission`] tagged with a
//! fresh [`SubmissionId`]. The caller waits out the simulated latency and passes
//! it back to [`complete`](FormController::complete). Only the currently pending
//! submission is evaluated; anything else is reported as [`Completion::Stale`] and
//! ignored, so a late timer can never act on a view that has moved on.

use std::time::Duration;

use store::{AuthOutcome, Credentials, KeyValueStore, UserDirectory, UserRecord};

use crate::validation::{validate, Field, FieldError, FieldErrors, FormInput};

pub const SUBMIT_LABEL: &str = "Sign in";
pub const BUSY_LABEL: &str = "Checking...";

/// Identity of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(u64);

/// A validated submission waiting for its delayed evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub credentials: Credentials,
}

/// What happened when a submission was evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    SignedIn(UserRecord),
    Registered(UserRecord),
    WrongPassword,
    /// The account could not be written to storage.
    SaveFailed,
    /// The submission was no longer pending; nothing changed.
    Stale,
}

/// State of the FORM view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub input: FormInput,
    pub errors: FieldErrors,
    pending: Option<SubmissionId>,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }
}

/// State of the RESULT view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultState {
    pub user: UserRecord,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Form(FormState),
    Result(ResultState),
}

impl Default for View {
    fn default() -> Self {
        View::Form(FormState::default())
    }
}

/// View model for the sign-in card.
pub struct FormController<S> {
    directory: UserDirectory<S>,
    latency: Duration,
    view: View,
    status: String,
    next_id: u64,
}

impl<S: KeyValueStore> FormController<S> {
    pub fn new(directory: UserDirectory<S>, latency: Duration) -> Self {
        Self {
            directory,
            latency,
            view: View::default(),
            status: String::new(),
            next_id: 0,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Current live-region message.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn directory(&self) -> &UserDirectory<S> {
        &self.directory
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.view {
            View::Form(form) => Some(form),
            View::Result(_) => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.view {
            View::Form(form) => Some(form),
            View::Result(_) => None,
        }
    }

    pub fn set_name(&mut self, value: String) {
        if let Some(form) = self.form_mut() {
            form.input.name = value;
        }
    }

    pub fn set_age(&mut self, value: String) {
        if let Some(form) = self.form_mut() {
            form.input.age = value;
        }
    }

    pub fn set_password(&mut self, value: String) {
        if let Some(form) = self.form_mut() {
            form.input.password = value;
        }
    }

    /// Re-run validation, replacing every previous annotation.
    pub fn validate(&mut self) -> bool {
        self.run_validation().is_some()
    }

    fn run_validation(&mut self) -> Option<Credentials> {
        self.status.clear();
        let form = self.form_mut()?;
        match validate(&form.input) {
            Ok(credentials) => {
                form.errors = FieldErrors::default();
                Some(credentials)
            }
            Err(errors) => {
                tracing::debug!("Validation failed on {} field(s)", errors.count());
                form.errors = errors;
                None
            }
        }
    }

    /// Validate and, if valid, start a submission.
    ///
    /// Returns `None` when validation fails, when the RESULT view is showing, or
    /// while another submission is still pending.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.form()?.is_submitting() {
            return None;
        }
        let credentials = self.run_validation()?;

        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.form_mut()?.pending = Some(id);
        tracing::debug!("Submission {:?} pending for {:?}", id, credentials.display_name);
        Some(Submission { id, credentials })
    }

    /// Evaluate a submission after its delay.
    pub fn complete(&mut self, submission: Submission) -> Completion {
        let is_current = self
            .form()
            .is_some_and(|form| form.pending == Some(submission.id));
        if !is_current {
            tracing::debug!("Ignoring stale submission {:?}", submission.id);
            return Completion::Stale;
        }

        match self.directory.authenticate(&submission.credentials) {
            Ok(AuthOutcome::SignedIn(user)) => {
                self.status = format!("Signed in as {}", user.display_name);
                self.show_result(format!("Welcome back, {}!", user.display_name), user.clone());
                Completion::SignedIn(user)
            }
            Ok(AuthOutcome::Registered(user)) => {
                self.status = format!("Account created for {}", user.display_name);
                self.show_result(
                    format!("Account created. Welcome, {}!", user.display_name),
                    user.clone(),
                );
                Completion::Registered(user)
            }
            Ok(AuthOutcome::WrongPassword) => {
                self.status = "Sign-in failed: incorrect password.".to_string();
                if let Some(form) = self.form_mut() {
                    form.errors.set(Field::Password, FieldError::PasswordIncorrect);
                    form.pending = None;
                }
                Completion::WrongPassword
            }
            Err(e) => {
                tracing::warn!("Could not save account: {}", e);
                self.status = "Could not save your account. Please try again.".to_string();
                if let Some(form) = self.form_mut() {
                    form.pending = None;
                }
                Completion::SaveFailed
            }
        }
    }

    /// Forget the pending submission and re-enable the submit button.
    pub fn cancel_pending(&mut self) {
        if let Some(form) = self.form_mut() {
            if let Some(id) = form.pending.take() {
                tracing::debug!("Canceled submission {:?}", id);
            }
        }
    }

    /// Leave the result view and clear the current-user marker.
    pub fn sign_out(&mut self) {
        if let Err(e) = self.directory.clear_current_user() {
            tracing::warn!("Failed to clear current user: {}", e);
        }
        self.back_to_form();
    }

    /// Return to an empty form.
    pub fn back_to_form(&mut self) {
        self.view = View::default();
        self.status.clear();
    }

    fn show_result(&mut self, message: String, user: UserRecord) {
        tracing::debug!("Showing result for {:?}", user.display_name);
        self.view = View::Result(ResultState { user, message });
    }
}
