//! Localized content fields.
//!
//! Catalog fields may be stored as one plain value or as a per-locale
//! mapping of values, and partially translated content must still render
//! something. `LocalizedText` makes the shape explicit as a tagged variant
//! constructed at the data boundary, and `resolve` encodes the fallback
//! chain: requested locale, then baseline, then empty string.

use crate::i18n::Locale;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// A content field that may be plain text or a per-locale mapping.
///
/// The raw catalog data is untyped JSON; [`LocalizedText::from_value`]
/// classifies it once at decode time so resolution never has to inspect
/// raw shapes. Mapping keys are not guaranteed to cover every supported
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocalizedText {
    /// Field was absent, null, or had a shape that carries no text
    /// (number, boolean, array).
    #[default]
    Missing,

    /// One plain text value, used as-is for every locale.
    Plain(String),

    /// Per-locale mapping. Keys that are not exact codes of enabled
    /// locales are dropped at construction.
    PerLocale(HashMap<Locale, String>),
}

impl LocalizedText {
    /// Create a plain text field.
    pub fn plain(text: impl Into<String>) -> Self {
        LocalizedText::Plain(text.into())
    }

    /// Classify a raw JSON value into a `LocalizedText`.
    ///
    /// * a string becomes `Plain`
    /// * an object becomes `PerLocale`, keeping only entries whose key is
    ///   the exact code of an enabled locale and whose value is a string
    /// * anything else (null, number, boolean, array) becomes `Missing`
    ///
    /// This is the only place shape inspection happens; it cannot fail.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => LocalizedText::Plain(text),
            Value::Object(entries) => {
                let map: HashMap<Locale, String> = entries
                    .into_iter()
                    .filter_map(|(key, value)| {
                        let locale = Locale::from_code(&key)?;
                        match value {
                            Value::String(text) => Some((locale, text)),
                            _ => None,
                        }
                    })
                    .collect();
                LocalizedText::PerLocale(map)
            }
            _ => LocalizedText::Missing,
        }
    }

    /// Resolve the field to a display string for the requested locale.
    ///
    /// Resolution order:
    /// 1. `Missing` resolves to `""`
    /// 2. `Plain` resolves to the text, unchanged
    /// 3. `PerLocale` resolves to the entry for the requested locale if
    ///    present and non-empty; else the baseline entry if present and
    ///    non-empty; else `""`
    ///
    /// Total and pure: every field produces a string, never an error, so a
    /// partially translated catalog still renders instead of breaking the
    /// page.
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            LocalizedText::Missing => "",
            LocalizedText::Plain(text) => text,
            LocalizedText::PerLocale(map) => map
                .get(&locale)
                .filter(|text| !text.is_empty())
                .or_else(|| {
                    map.get(&Locale::baseline())
                        .filter(|text| !text.is_empty())
                })
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Check whether the field carries its own non-empty text for a locale,
    /// without falling back.
    ///
    /// `Plain` counts as covering every locale; `Missing` covers none.
    pub fn has_translation(&self, locale: Locale) -> bool {
        match self {
            LocalizedText::Missing => false,
            LocalizedText::Plain(text) => !text.is_empty(),
            LocalizedText::PerLocale(map) => {
                map.get(&locale).map(|text| !text.is_empty()).unwrap_or(false)
            }
        }
    }

    /// Check whether the field carries no text at all.
    pub fn is_missing(&self) -> bool {
        matches!(self, LocalizedText::Missing)
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decode through Value so a malformed field degrades to Missing
        // instead of failing the whole catalog document.
        let value = Value::deserialize(deserializer)?;
        Ok(LocalizedText::from_value(value))
    }
}
