//! Site configuration.
//!
//! Loaded from `site.toml`. Every field has a default, and the contact
//! defaults are bracketed placeholder tokens (`[WHATSAPP_NUMBER]`) that have
//! to be replaced before the site goes live.

use jewel_messaging::{InquiryLink, MessagingError};
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Site configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub messaging: MessagingConfig,
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(source)?)
    }

    /// Fields still holding a placeholder token, as `section.field` paths.
    pub fn unresolved_placeholders(&self) -> Vec<&'static str> {
        [
            ("contact.whatsapp_number", &self.contact.whatsapp_number),
            ("contact.office_number", &self.contact.office_number),
            ("contact.email", &self.contact.email),
            ("contact.address", &self.contact.address),
        ]
        .into_iter()
        .filter(|(_, value)| is_placeholder(value))
        .map(|(path, _)| path)
        .collect()
    }

    /// Greeting that opens every prefilled message.
    pub fn greeting(&self) -> String {
        format!("Hi {}", self.brand.name)
    }

    /// Link builder for the configured chat account.
    pub fn inquiry_link(&self) -> Result<InquiryLink, MessagingError> {
        InquiryLink::new(
            &self.messaging.base_url,
            &self.contact.whatsapp_number,
            self.greeting(),
        )
    }
}

/// Check if a value is a `[TOKEN]` placeholder.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.len() > 2 && value.starts_with('[') && value.ends_with(']')
}

/// Brand text shown in the header, footer and messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_brand_name() -> String {
    "The Lab Jewel".to_string()
}

fn default_tagline() -> String {
    "Lab-Grown Diamonds".to_string()
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Chat account number, in any format; only digits are used in links.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    #[serde(default = "default_office_number")]
    pub office_number: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            office_number: default_office_number(),
            email: default_email(),
            address: default_address(),
        }
    }
}

fn default_whatsapp_number() -> String {
    "[WHATSAPP_NUMBER]".to_string()
}

fn default_office_number() -> String {
    "[OFFICE_NUMBER]".to_string()
}

fn default_email() -> String {
    "[EMAIL]".to_string()
}

fn default_address() -> String {
    "[ADDRESS]".to_string()
}

/// Chat service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Deep-link base, e.g. `https://wa.me`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://wa.me".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_placeholders() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.brand.name, "The Lab Jewel");
        assert_eq!(config.messaging.base_url, "https://wa.me");
        assert_eq!(
            config.unresolved_placeholders(),
            vec![
                "contact.whatsapp_number",
                "contact.office_number",
                "contact.email",
                "contact.address"
            ]
        );
    }

    #[test]
    fn test_partial_document() {
        let config = SiteConfig::from_toml(
            r#"
[contact]
whatsapp_number = "+971 50 123 4567"
email = "hello@thelabjewel.com"
"#,
        )
        .unwrap();

        assert_eq!(
            config.unresolved_placeholders(),
            vec!["contact.office_number", "contact.address"]
        );
        assert_eq!(
            config.inquiry_link().unwrap().endpoint(),
            "https://wa.me/971501234567"
        );
    }

    #[test]
    fn test_invalid_document() {
        let err = SiteConfig::from_toml("[brand]\nname = 3").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_greeting() {
        assert_eq!(SiteConfig::default().greeting(), "Hi The Lab Jewel");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder("[EMAIL]"));
        assert!(is_placeholder(" [ADDRESS] "));
        assert!(!is_placeholder("[]"));
        assert!(!is_placeholder("hello@example.com"));
    }
}
