//! Locale layer for The Lab Jewel.
//!
//! - **Language**: the supported set and each language's text direction
//! - **Strings**: embedded string tables with base-language fallback
//! - **Provider**: active language, persistence port, document attributes
//!
//! # Example
//!
//! ```rust,ignore
//! use jewel_i18n::prelude::*;
//! use std::sync::Arc;
//!
//! let tables = Arc::new(StringTables::builtin()?);
//! let mut provider = LocaleProvider::init(MemoryStore::new(), tables);
//! provider.set_language("ar")?;
//!
//! let scope = provider.scope();
//! let locale = scope.locale()?;
//! assert!(locale.is_rtl());
//! println!("{}", locale.t("nav.home"));
//! ```

pub mod error;
pub mod language;
pub mod provider;
pub mod store;
pub mod strings;

pub use error::I18nError;
pub use language::{Direction, Language};
pub use provider::{DocumentAttributes, Locale, LocaleProvider, LocaleScope};
pub use store::{MemoryStore, PreferenceStore, LANGUAGE_KEY};
pub use strings::{StringTable, StringTables, Strings};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::I18nError;
    pub use crate::language::{Direction, Language};
    pub use crate::provider::{DocumentAttributes, Locale, LocaleProvider, LocaleScope};
    pub use crate::store::{MemoryStore, PreferenceStore, LANGUAGE_KEY};
    pub use crate::strings::{StringTable, StringTables, Strings};
}
