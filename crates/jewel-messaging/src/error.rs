//! Messaging error types.

use thiserror::Error;

use crate::contact::ContactField;

/// Errors from building messaging links.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessagingError {
    /// Required contact-form fields are empty.
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),

    /// The chat service base URL is not an http(s) URL.
    #[error("Invalid messaging base URL: {0}")]
    InvalidBaseUrl(String),
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
