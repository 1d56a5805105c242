//! Inquiry deep links.
//!
//! Builds `https://<chat-service>/<phone>?text=<message>` links with a
//! prefilled message. Nothing here touches the network; opening the link is
//! up to the caller.

use tracing::debug;

use crate::error::MessagingError;

/// What the visitor is asking about.
///
/// A product inquiry needs both a name and an id; with either missing the
/// message falls back to a general question. Empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub product_name: Option<String>,
    pub product_id: Option<String>,
    pub category: Option<String>,
    pub filters: Option<String>,
}

impl Inquiry {
    /// A general question with no product attached.
    pub fn general() -> Self {
        Self::default()
    }

    /// An inquiry about one product.
    pub fn for_product(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            product_name: Some(name.into()),
            product_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Attach a filter summary if there is one.
    pub fn with_optional_filters(mut self, filters: Option<String>) -> Self {
        self.filters = filters;
        self
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builds inquiry links for one chat account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryLink {
    base_url: String,
    phone: String,
    greeting: String,
}

impl InquiryLink {
    /// Create a builder.
    ///
    /// `phone` keeps only its digits (`+971 50-123` -> `97150123`), as the
    /// chat service expects. A bracketed placeholder token such as
    /// `[WHATSAPP_NUMBER]` is kept verbatim so unconfigured builds stay
    /// recognizable.
    pub fn new(
        base_url: impl Into<String>,
        phone: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Result<Self, MessagingError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        if host.map_or(true, str::is_empty) {
            return Err(MessagingError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            phone: normalize_phone(&phone.into()),
            greeting: greeting.into(),
        })
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// The chat endpoint without a message: `https://wa.me/<phone>`.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.phone)
    }

    /// Compose the prefilled message for an inquiry.
    pub fn message(&self, inquiry: &Inquiry) -> String {
        let mut message = self.greeting.clone();

        match (present(&inquiry.product_name), present(&inquiry.product_id)) {
            (Some(name), Some(id)) => {
                message.push_str(&format!(", I'm interested in: {} ({}).", name, id));
                if let Some(category) = present(&inquiry.category) {
                    message.push_str(&format!(" Category: {}.", category));
                }
                if let Some(filters) = present(&inquiry.filters) {
                    message.push_str(&format!(" Filters: {}.", filters));
                }
                message.push_str(" Please share details and price.");
            }
            _ => message.push_str(", I would like to know more about your lab-grown diamonds."),
        }

        message
    }

    /// Full link for an inquiry.
    pub fn url(&self, inquiry: &Inquiry) -> String {
        self.url_for_text(&self.message(inquiry))
    }

    /// Link carrying arbitrary text.
    pub fn url_for_text(&self, text: &str) -> String {
        let url = format!("{}?text={}", self.endpoint(), urlencoding::encode(text));
        debug!(len = url.len(), "built messaging link");
        url
    }
}

fn normalize_phone(phone: &str) -> String {
    let phone = phone.trim();
    if phone.starts_with('[') && phone.ends_with(']') {
        return phone.to_string();
    }
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> InquiryLink {
        InquiryLink::new("https://wa.me", "[WHATSAPP_NUMBER]", "Hi The Lab Jewel").unwrap()
    }

    #[test]
    fn test_general_message() {
        assert_eq!(
            builder().message(&Inquiry::general()),
            "Hi The Lab Jewel, I would like to know more about your lab-grown diamonds."
        );
    }

    #[test]
    fn test_product_message_with_everything() {
        let inquiry = Inquiry::for_product("Round Brilliant 1.01ct", "LJ-W-001")
            .with_category("white")
            .with_filters("Round, 1.01ct, D, VVS1");

        assert_eq!(
            builder().message(&inquiry),
            "Hi The Lab Jewel, I'm interested in: Round Brilliant 1.01ct (LJ-W-001). \
             Category: white. Filters: Round, 1.01ct, D, VVS1. Please share details and price."
        );
    }

    #[test]
    fn test_missing_id_falls_back_to_general() {
        let inquiry = Inquiry {
            product_name: Some("Oval".to_string()),
            category: Some("white".to_string()),
            ..Inquiry::default()
        };
        assert_eq!(builder().message(&inquiry), builder().message(&Inquiry::general()));

        let empty_id = Inquiry::for_product("Oval", "");
        assert_eq!(builder().message(&empty_id), builder().message(&Inquiry::general()));
    }

    #[test]
    fn test_url_shape() {
        let url = builder().url(&Inquiry::general());
        assert!(url.starts_with("https://wa.me/[WHATSAPP_NUMBER]?text=Hi%20The%20Lab%20Jewel%2C%20"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_phone_is_reduced_to_digits() {
        let link = InquiryLink::new("https://wa.me/", "+971 50-123 4567", "Hi").unwrap();
        assert_eq!(link.endpoint(), "https://wa.me/971501234567");
    }

    #[test]
    fn test_base_url_must_be_http() {
        assert!(matches!(
            InquiryLink::new("wa.me", "1", "Hi"),
            Err(MessagingError::InvalidBaseUrl(_))
        ));
        assert!(InquiryLink::new("https://", "1", "Hi").is_err());
    }
}
