//! Translated string tables.
//!
//! Tables are nested JSON objects embedded at build time and flattened into
//! dotted keys (`nav.home`) on load. Lookups fall back to the base language
//! and then to the key itself, so a missing translation degrades to visible
//! text rather than an error.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::I18nError;
use crate::language::Language;

const EN: &str = include_str!("../locales/en.json");
const FR: &str = include_str!("../locales/fr.json");
const AR: &str = include_str!("../locales/ar.json");
const UR: &str = include_str!("../locales/ur.json");

fn embedded(language: Language) -> &'static str {
    match language {
        Language::En => EN,
        Language::Fr => FR,
        Language::Ar => AR,
        Language::Ur => UR,
    }
}

/// One language's strings, keyed by dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    language: Language,
    entries: HashMap<String, String>,
}

impl StringTable {
    /// Parse a nested JSON object into a flat table.
    pub fn from_json(language: Language, json: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|source| I18nError::InvalidTable { language, source })?;

        let mut entries = HashMap::new();
        flatten(language, "", &value, &mut entries)?;

        debug!(%language, entries = entries.len(), "loaded string table");
        Ok(Self { language, entries })
    }

    /// Build a table from `(key, text)` pairs.
    pub fn from_pairs<'a>(
        language: Language,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { language, entries }
    }

    /// Load the table shipped for a language.
    pub fn builtin(language: Language) -> Result<Self, I18nError> {
        Self::from_json(language, embedded(language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten(
    language: Language,
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), I18nError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(language, &path, child, out)?;
            }
            Ok(())
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
            Ok(())
        }
        _ => Err(I18nError::InvalidEntry {
            language,
            key: prefix.to_string(),
        }),
    }
}

/// Every supported language's table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct StringTables {
    tables: HashMap<Language, Arc<StringTable>>,
}

impl StringTables {
    /// Load every embedded table.
    pub fn builtin() -> Result<Self, I18nError> {
        let tables = Language::ALL
            .iter()
            .map(|&language| Ok((language, Arc::new(StringTable::builtin(language)?))))
            .collect::<Result<HashMap<_, _>, I18nError>>()?;
        Ok(Self { tables })
    }

    /// Assemble from explicit tables. Languages without a table resolve to
    /// an empty one, so every lookup falls through to the base table.
    pub fn from_tables(tables: impl IntoIterator<Item = StringTable>) -> Self {
        let tables = tables
            .into_iter()
            .map(|t| (t.language(), Arc::new(t)))
            .collect();
        Self { tables }
    }

    fn table(&self, language: Language) -> Arc<StringTable> {
        self.tables
            .get(&language)
            .cloned()
            .unwrap_or_else(|| Arc::new(StringTable::from_pairs(language, [])))
    }

    /// Resolved strings for a language.
    pub fn strings(&self, language: Language) -> Strings {
        Strings {
            active: self.table(language),
            base: self.table(Language::BASE),
        }
    }
}

/// Strings for the active language, with base-language fallback.
#[derive(Debug, Clone)]
pub struct Strings {
    active: Arc<StringTable>,
    base: Arc<StringTable>,
}

impl Strings {
    pub fn language(&self) -> Language {
        self.active.language()
    }

    /// Look up a dotted key.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.active.get(key) {
            return text;
        }
        if let Some(text) = self.base.get(key) {
            debug!(language = %self.language(), key, "string missing, using base language");
            return text;
        }
        warn!(language = %self.language(), key, "string missing from every table");
        key
    }

    /// Look up a key and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_keys_are_flattened() {
        let table = StringTable::from_json(
            Language::En,
            r#"{"nav": {"home": "Home"}, "contact": {"form": {"name": "Name"}}}"#,
        )
        .unwrap();

        assert_eq!(table.get("nav.home"), Some("Home"));
        assert_eq!(table.get("contact.form.name"), Some("Name"));
        assert_eq!(table.get("nav"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_non_string_leaf_rejected() {
        let err = StringTable::from_json(Language::Fr, r#"{"a": {"b": 3}}"#).unwrap_err();
        assert!(matches!(err, I18nError::InvalidEntry { key, .. } if key == "a.b"));

        let err = StringTable::from_json(Language::Fr, "{").unwrap_err();
        assert!(matches!(err, I18nError::InvalidTable { language: Language::Fr, .. }));
    }

    #[test]
    fn test_lookup_falls_back_to_base_then_key() {
        let tables = StringTables::from_tables([
            StringTable::from_pairs(Language::En, [("nav.home", "Home"), ("nav.about", "About")]),
            StringTable::from_pairs(Language::Fr, [("nav.home", "Accueil")]),
        ]);
        let fr = tables.strings(Language::Fr);

        assert_eq!(fr.t("nav.home"), "Accueil");
        assert_eq!(fr.t("nav.about"), "About");
        assert_eq!(fr.t("nav.missing"), "nav.missing");

        // No Urdu table at all: every key resolves through English.
        assert_eq!(tables.strings(Language::Ur).t("nav.home"), "Home");
    }

    #[test]
    fn test_format_substitutes_placeholders() {
        let tables = StringTables::from_tables([StringTable::from_pairs(
            Language::En,
            [("footer.copyright", "© {year} {brand}. All rights reserved.")],
        )]);
        let en = tables.strings(Language::En);

        assert_eq!(
            en.format("footer.copyright", &[("year", "2026"), ("brand", "The Lab Jewel")]),
            "© 2026 The Lab Jewel. All rights reserved."
        );
    }

    #[test]
    fn test_builtin_tables_match_base_keys() {
        let base = StringTable::builtin(Language::BASE).unwrap();
        assert!(!base.is_empty());

        for language in Language::ALL {
            let table = StringTable::builtin(*language).unwrap();
            let mut missing: Vec<&str> = base.keys().filter(|k| table.get(k).is_none()).collect();
            missing.sort();
            assert!(missing.is_empty(), "{} is missing {:?}", language, missing);
        }
    }
}
