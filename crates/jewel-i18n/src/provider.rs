//! The locale provider and the context handle passed to views.
//!
//! The provider owns the active language and its preference store. Views
//! never reach for global state: they receive a [`LocaleScope`] built from
//! the provider at the application root.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::I18nError;
use crate::language::{Direction, Language};
use crate::store::{PreferenceStore, LANGUAGE_KEY};
use crate::strings::{StringTables, Strings};

/// Document-level presentation attributes for the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: Language,
    pub dir: Direction,
}

impl DocumentAttributes {
    fn of(language: Language) -> Self {
        Self {
            lang: language,
            dir: language.direction(),
        }
    }
}

impl fmt::Display for DocumentAttributes {
    /// Renders as HTML attributes: `lang="ar" dir="rtl"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lang=\"{}\" dir=\"{}\"", self.lang.code(), self.dir.as_str())
    }
}

/// Snapshot of the locale state handed to views.
#[derive(Debug, Clone)]
pub struct Locale {
    language: Language,
    strings: Strings,
}

impl Locale {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    /// Look up a dotted key in the active table.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.t(key)
    }

    /// Look up a key and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.strings.format(key, args)
    }

    pub fn attributes(&self) -> DocumentAttributes {
        DocumentAttributes::of(self.language)
    }
}

/// Owns the active language and persists changes to its store.
pub struct LocaleProvider<S> {
    store: S,
    tables: Arc<StringTables>,
    language: Language,
    attributes: DocumentAttributes,
}

impl<S: PreferenceStore> LocaleProvider<S> {
    /// Read the stored preference, falling back to the base language when it
    /// is absent or unsupported.
    pub fn init(store: S, tables: Arc<StringTables>) -> Self {
        let stored = store.get(LANGUAGE_KEY);
        let language = match stored.as_deref().map(|code| (code, Language::parse(code))) {
            Some((_, Some(language))) => language,
            Some((code, None)) => {
                debug!(code, "stored language unsupported, using base language");
                Language::BASE
            }
            None => Language::BASE,
        };

        Self {
            store,
            tables,
            language,
            attributes: DocumentAttributes::of(language),
        }
    }

    /// Switch language, persist it and update the document attributes.
    ///
    /// An unsupported code is rejected and leaves the state unchanged.
    pub fn set_language(&mut self, code: &str) -> Result<Language, I18nError> {
        let Some(language) = Language::parse(code) else {
            warn!(code, "rejected unsupported language");
            return Err(I18nError::UnsupportedLanguage(code.to_string()));
        };

        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        self.attributes = DocumentAttributes::of(language);

        info!(%language, dir = %language.direction(), "language changed");
        Ok(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    /// Resolved strings for the active language.
    pub fn strings(&self) -> Strings {
        self.tables.strings(self.language)
    }

    /// The `lang`/`dir` pair last applied to the document.
    pub fn document_attributes(&self) -> DocumentAttributes {
        self.attributes
    }

    /// Snapshot for views.
    pub fn locale(&self) -> Locale {
        Locale {
            language: self.language,
            strings: self.strings(),
        }
    }

    /// Context handle for views.
    pub fn scope(&self) -> LocaleScope {
        LocaleScope::install(self.locale())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Context handle carrying the locale through the view tree.
///
/// An empty scope stands for "no provider installed"; reading it is a
/// wiring error.
#[derive(Debug, Clone, Default)]
pub struct LocaleScope {
    locale: Option<Locale>,
}

impl LocaleScope {
    /// A scope with no provider behind it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn install(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
        }
    }

    /// The installed locale.
    pub fn locale(&self) -> Result<&Locale, I18nError> {
        self.locale.as_ref().ok_or(I18nError::OutsideProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tables() -> Arc<StringTables> {
        Arc::new(StringTables::builtin().unwrap())
    }

    #[test]
    fn test_init_defaults_to_base_language() {
        let provider = LocaleProvider::init(MemoryStore::new(), tables());
        assert_eq!(provider.language(), Language::En);
        assert_eq!(provider.direction(), Direction::Ltr);
        assert!(!provider.is_rtl());
    }

    #[test]
    fn test_init_reads_stored_preference() {
        let provider = LocaleProvider::init(MemoryStore::with(LANGUAGE_KEY, "ar"), tables());
        assert_eq!(provider.language(), Language::Ar);
        assert!(provider.is_rtl());
        assert_eq!(provider.document_attributes().to_string(), "lang=\"ar\" dir=\"rtl\"");
    }

    #[test]
    fn test_init_ignores_unsupported_preference() {
        let provider = LocaleProvider::init(MemoryStore::with(LANGUAGE_KEY, "klingon"), tables());
        assert_eq!(provider.language(), Language::En);
    }

    #[test]
    fn test_set_language_persists_and_updates_attributes() {
        let mut provider = LocaleProvider::init(MemoryStore::new(), tables());

        assert_eq!(provider.set_language("ur").unwrap(), Language::Ur);
        assert_eq!(provider.store().get(LANGUAGE_KEY).as_deref(), Some("ur"));
        assert_eq!(
            provider.document_attributes(),
            DocumentAttributes {
                lang: Language::Ur,
                dir: Direction::Rtl
            }
        );
        assert_eq!(provider.strings().t("nav.home"), "ہوم");
    }

    #[test]
    fn test_unsupported_language_leaves_state_unchanged() {
        let mut provider = LocaleProvider::init(MemoryStore::with(LANGUAGE_KEY, "fr"), tables());

        let err = provider.set_language("de").unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLanguage(code) if code == "de"));
        assert_eq!(provider.language(), Language::Fr);
        assert_eq!(provider.store().get(LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn test_region_tagged_codes_are_unsupported() {
        let provider = LocaleProvider::init(MemoryStore::with(LANGUAGE_KEY, "fr-CA"), tables());
        assert_eq!(provider.language(), Language::En);

        let mut provider = LocaleProvider::init(MemoryStore::new(), tables());
        let err = provider.set_language("ar_EG").unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLanguage(code) if code == "ar_EG"));
        assert_eq!(provider.language(), Language::En);
        assert_eq!(provider.store().get(LANGUAGE_KEY), None);
    }

    #[test]
    fn test_scope_outside_provider_fails() {
        let scope = LocaleScope::empty();
        assert!(matches!(scope.locale(), Err(I18nError::OutsideProvider)));
    }

    #[test]
    fn test_scope_carries_locale() {
        let provider = LocaleProvider::init(MemoryStore::with(LANGUAGE_KEY, "fr"), tables());
        let scope = provider.scope();
        let locale = scope.locale().unwrap();

        assert_eq!(locale.language(), Language::Fr);
        assert_eq!(locale.t("nav.home"), "Accueil");
        assert_eq!(
            locale.format("common.results", &[("count", "3")]),
            "3 diamants trouvés"
        );
    }
}
