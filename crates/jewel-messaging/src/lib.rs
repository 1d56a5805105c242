//! Messaging deep links for The Lab Jewel.
//!
//! Every call to action on the site opens a chat with a prefilled message.
//! This crate builds those links: product inquiries from the listing and
//! detail pages, the general "chat with us" link, and the contact-form
//! relay.

pub mod contact;
pub mod error;
pub mod link;

pub use contact::{ContactField, ContactForm};
pub use error::MessagingError;
pub use link::{Inquiry, InquiryLink};
