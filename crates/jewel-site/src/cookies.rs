//! Cookie-backed preference store.

use std::collections::BTreeMap;

use jewel_i18n::{I18nError, PreferenceStore};

/// One year.
const MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Preference store reading the request's `Cookie` header and collecting
/// `Set-Cookie` values for the response.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    values: BTreeMap<String, String>,
    pending: Vec<String>,
}

impl CookieStore {
    /// Parse a `Cookie` request header (`a=1; b=2`).
    pub fn from_header(header: Option<&str>) -> Self {
        let values = header
            .unwrap_or_default()
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let value = value.trim().trim_matches('"');
                let value = urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                Some((name.to_string(), value))
            })
            .collect();

        Self {
            values,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` header values for everything written.
    pub fn set_cookie_headers(&self) -> &[String] {
        &self.pending
    }

    pub fn into_set_cookie_headers(self) -> Vec<String> {
        self.pending
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), I18nError> {
        if key.is_empty() || key.contains(|c: char| c == '=' || c == ';' || c.is_whitespace()) {
            return Err(I18nError::Store(format!("invalid cookie name `{}`", key)));
        }

        self.values.insert(key.to_string(), value.to_string());
        self.pending.retain(|c| !c.starts_with(&format!("{}=", key)));
        self.pending.push(format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            key,
            urlencoding::encode(value),
            MAX_AGE_SECS
        ));
        Ok(())
    }
}
