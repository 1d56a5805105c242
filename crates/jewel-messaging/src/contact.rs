//! Contact form relay.
//!
//! The contact form is not submitted to a server: its fields are composed
//! into a plain-text message and handed to the chat service as a deep link.

use serde::Deserialize;
use std::fmt;

use crate::error::MessagingError;
use crate::link::InquiryLink;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// Fields that must be filled in.
    pub const REQUIRED: &'static [ContactField] = &[
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Key into the string tables for the field label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ContactField::Name => "contact.form.name",
            ContactField::Email => "contact.form.email",
            ContactField::Phone => "contact.form.phone",
            ContactField::Subject => "contact.form.subject",
            ContactField::Message => "contact.form.message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submitted contact form. Absent fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Check every required field is filled in. Whitespace-only counts as
    /// empty; the phone number is optional.
    pub fn validate(&self) -> Result<(), MessagingError> {
        let missing: Vec<ContactField> = ContactField::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MessagingError::MissingFields(missing))
        }
    }

    /// Compose the plain-text block sent to the chat service. Fields are
    /// relayed exactly as entered.
    pub fn relay_message(&self, greeting: &str) -> String {
        format!(
            "{},\n\nName: {}\nEmail: {}\nPhone: {}\nSubject: {}\n\nMessage:\n{}",
            greeting, self.name, self.email, self.phone, self.subject, self.message,
        )
    }
}

impl InquiryLink {
    /// Validate a contact form and build the link relaying it.
    pub fn relay_url(&self, form: &ContactForm) -> Result<String, MessagingError> {
        form.validate()?;
        Ok(self.url_for_text(&form.relay_message(self.greeting())))
    }
}
