//! Site error types.

use jewel_catalog::CatalogError;
use jewel_i18n::I18nError;
use jewel_messaging::MessagingError;
use thiserror::Error;

/// Errors raised while starting the site or streaming a page.
#[derive(Error, Debug)]
pub enum SiteError {
    /// `site.toml` could not be parsed.
    #[error("Invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// The catalog failed its load-time checks.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Locale error: {0}")]
    I18n(#[from] I18nError),

    #[error("Messaging error: {0}")]
    Messaging(#[from] MessagingError),

    /// A section was sent before the shell.
    #[error("Shell not sent before sections")]
    ShellNotSent,

    /// The response body could not be written.
    #[error("Streaming error: {0}")]
    Stream(String),
}
