use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// How long the simulated send takes before it reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.name())]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("message was rejected: {0}")]
    Rejected(String),
}

/// Identifies one submission so a late completion can't land on a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
    issued: u64,
}

impl ContactForm {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Applies a keystroke. Ignored while a send is in flight; an edit after
    /// a finished send starts a new message.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        if self.status == FormStatus::Succeeded {
            log::debug!("contact form: succeeded -> idle");
            self.status = FormStatus::Idle;
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.value(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Starts a send. The caller completes it after [`SUBMIT_DELAY`].
    pub fn submit(&mut self) -> Result<SubmitTicket, ContactError> {
        if self.is_submitting() {
            log::warn!("contact form: submit ignored, send in progress");
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate().inspect_err(|e| {
            log::warn!("contact form: submit rejected: {e}");
        })?;
        self.issued += 1;
        log::debug!("contact form: {:?} -> submitting", self.status);
        self.status = FormStatus::Submitting;
        Ok(SubmitTicket(self.issued))
    }

    /// Finishes the send identified by `ticket`. Returns `false` when the
    /// ticket is stale or nothing is in flight.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<(), DeliveryError>) -> bool {
        if !self.is_submitting() || ticket.0 != self.issued {
            return false;
        }
        match outcome {
            Ok(()) => {
                log::debug!("contact form: submitting -> succeeded");
                self.status = FormStatus::Succeeded;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            Err(e) => {
                log::debug!("contact form: submitting -> failed ({e})");
                self.status = FormStatus::Failed;
            }
        }
        true
    }
}

/// Mirrors what `<input type="email">` accepts closely enough for a local
/// form: one `@` with a non-empty local part and a dotted-or-bare domain.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// The stand-in for delivery: there is no backend, so every send succeeds.
pub fn simulated_delivery() -> Result<(), DeliveryError> {
    Ok(())
}

/// Body of the send timer. A no-op once `form` has been disposed with its
/// component, or when a newer submission replaced `ticket`.
pub fn deliver(form: RwSignal<ContactForm>, ticket: SubmitTicket) -> bool {
    form.try_update(|f| f.complete(ticket, simulated_delivery()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_edit_updates_fields_without_status_change() {
        let form = filled();
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert_eq!(form.value(Field::Message), "Hello there");
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_submit_then_complete_resets_fields() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        // fields stay until the timer resolves
        assert_eq!(form.name, "Ada");

        assert!(form.complete(ticket, simulated_delivery()));
        assert_eq!(form.status(), FormStatus::Succeeded);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        let mut form = filled();
        form.edit(Field::Email, "");
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(Field::Email))
        );
        assert_eq!(form.status(), FormStatus::Idle);

        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Name)));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut form = filled();
        for bad in ["ada", "@example.com", "ada@", "ada @example.com", "a@b@c"] {
            form.edit(Field::Email, bad);
            assert_eq!(form.submit(), Err(ContactError::InvalidEmail), "{bad}");
        }
        form.edit(Field::Email, "ada@localhost");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_resubmit_while_submitting_is_ignored() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        let before = form.clone();

        assert_eq!(form.submit(), Err(ContactError::AlreadySubmitting));
        form.edit(Field::Name, "Grace");
        assert_eq!(form, before);

        assert!(form.complete(ticket, simulated_delivery()));
        assert_eq!(form.status(), FormStatus::Succeeded);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut form = filled();
        let first = form.submit().unwrap();
        assert!(form.complete(first, Err(DeliveryError::Rejected("offline".into()))));
        assert_eq!(form.status(), FormStatus::Failed);

        // retry from failed, then a late duplicate of the first send arrives
        let second = form.submit().unwrap();
        assert!(!form.complete(first, simulated_delivery()));
        assert_eq!(form.status(), FormStatus::Submitting);
        assert!(form.complete(second, simulated_delivery()));
        assert!(!form.complete(second, simulated_delivery()));
    }

    #[test]
    fn test_failed_keeps_fields() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.complete(ticket, Err(DeliveryError::Rejected("nope".into())));
        assert_eq!(form.status(), FormStatus::Failed);
        assert_eq!(form.message, "Hello there");
    }

    #[test]
    fn test_edit_after_success_starts_new_message() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.complete(ticket, simulated_delivery());
        assert_eq!(form.status(), FormStatus::Succeeded);

        form.edit(Field::Name, "A");
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.name, "A");
    }

    #[test]
    fn test_timer_delivers_pending_submission() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(filled());
            let ticket = form.try_update(ContactForm::submit).unwrap().unwrap();
            assert!(deliver(form, ticket));
            assert_eq!(form.with_untracked(ContactForm::status), FormStatus::Succeeded);
            // a second firing of the same timer changes nothing
            assert!(!deliver(form, ticket));
        });
    }

    #[test]
    fn test_timer_after_unmount_is_noop() {
        let owner = Owner::new();
        let form = owner.with(|| RwSignal::new(filled()));
        let ticket = form.try_update(ContactForm::submit).unwrap().unwrap();

        owner.cleanup();
        assert!(!deliver(form, ticket));
        assert!(form.try_with_untracked(ContactForm::status).is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&FormStatus::Submitting).unwrap();
        assert_eq!(json, "\"submitting\"");
        assert_eq!(
            ContactError::MissingField(Field::Message).to_string(),
            "message is required"
        );
    }
}
