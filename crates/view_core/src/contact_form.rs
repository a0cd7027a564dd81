//! Contact form model: field values plus the submission lifecycle.
//!
//! The form is a small state machine. `begin_submit` validates and flips the
//! in-flight flags synchronously; the actual delivery happens elsewhere (an
//! async collaborator behind [`crate::delivery::DeliveryService`]) and the
//! outcome is reported back through `submit_succeeded` / `submit_failed`.

use shared::contact::ContactMessage;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("required field is empty: {}", field.label())]
    MissingRequiredField { field: ContactField },
}

/// Field values and submission flags. `submitting` and `shutter_visible`
/// move together: both set by `begin_submit`, both cleared by
/// `submit_succeeded` / `submit_failed`.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    service: String,
    message: String,
    submitting: bool,
    shutter_visible: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the value verbatim. Edits are permitted at any time, including
    /// while a submission is in flight; the in-flight snapshot was taken at
    /// `begin_submit` and is unaffected.
    pub fn update_field(&mut self, field: ContactField, value: &str) {
        let slot = self.field_mut(field);
        if slot != value {
            slot.clear();
            slot.push_str(value);
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn shutter_visible(&self) -> bool {
        self.shutter_visible
    }

    /// Starts a submission. Rejects if one is already in flight (the second
    /// call changes nothing) or if a required field is empty after trimming.
    /// On success the in-flight flags are set before returning, so the
    /// shutter overlay is observable immediately.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.submitting {
            return Err(FormError::SubmissionInFlight);
        }
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingRequiredField { field });
            }
        }

        self.submitting = true;
        self.shutter_visible = true;
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        })
    }

    /// Delivery succeeded: clear the flags and reset all four fields.
    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.shutter_visible = false;
        self.name.clear();
        self.email.clear();
        self.service.clear();
        self.message.clear();
    }

    /// Delivery failed: clear the flags but keep everything the visitor
    /// typed so a retry is one click away.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
        self.shutter_visible = false;
    }
}

#[cfg(test)]
#[path = "tests/contact_form_tests.rs"]
mod tests;
