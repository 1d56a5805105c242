//! Locale error types.

use thiserror::Error;

use crate::language::Language;

/// Errors from the locale layer.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A language code outside the supported set.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// An embedded string table is not valid JSON.
    #[error("String table for {language} is invalid: {source}")]
    InvalidTable {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    /// A string table leaf is not a string.
    #[error("String table for {language} has a non-string entry at `{key}`")]
    InvalidEntry { language: Language, key: String },

    /// Locale state read before a provider was installed. This is a wiring
    /// mistake in the caller, not a user-facing condition.
    #[error("Locale used outside of a LocaleProvider")]
    OutsideProvider,

    /// The preference store refused a write.
    #[error("Preference store error: {0}")]
    Store(String),
}
