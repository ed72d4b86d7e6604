//! Locale type: the closed set of locales the storefront serves.
//!
//! Routing segments arrive as untrusted text. `Locale::resolve` maps any
//! input to a supported locale, so an unrecognized or malformed segment
//! degrades to the baseline locale instead of failing the request.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::Serialize;
use std::fmt;

/// A supported locale.
///
/// The set is closed: a `Locale` value is always one of the variants below,
/// never arbitrary text. Metadata (code, names, baseline flag) lives in the
/// [`LocaleRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Slovene, the baseline locale
    Sl,
    /// English
    En,
}

impl Locale {
    /// Resolve a raw locale token from the routing layer.
    ///
    /// Returns the matching locale for an exact, case-sensitive match on an
    /// enabled locale code, and the baseline locale for every other input,
    /// including the empty string and arbitrary text. This function is total
    /// and never fails; malformed routing input is expected, recoverable
    /// input, not an error.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Locale::resolve("en"), Locale::En);
    /// assert_eq!(Locale::resolve("de"), Locale::Sl);
    /// ```
    pub fn resolve(raw: &str) -> Locale {
        match LocaleRegistry::get().get_by_code(raw) {
            Some(cfg) if cfg.enabled => cfg.locale,
            _ => Locale::baseline(),
        }
    }

    /// Create a Locale from a locale code string.
    ///
    /// Unlike [`Locale::resolve`], this does not fall back: it is the strict
    /// lookup used at data boundaries (e.g. catalog mapping keys), where an
    /// unrecognized code must be rejected rather than silently remapped.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "sl", "en")
    ///
    /// # Returns
    /// * `Some(Locale)` if the code is an exact match for an enabled locale
    /// * `None` otherwise
    pub fn from_code(code: &str) -> Option<Locale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .filter(|cfg| cfg.enabled)
            .map(|cfg| cfg.locale)
    }

    /// Get the baseline locale.
    ///
    /// This is the default for unrecognized routing input and the fallback
    /// of last resort when resolving partially translated content.
    pub fn baseline() -> Locale {
        LocaleRegistry::get().baseline().locale
    }

    /// Get the full locale configuration from the registry.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config_for(*self)
    }

    /// Get the ISO 639-1 locale code (e.g., "sl", "en").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// Get the English name of the locale (e.g., "Slovene", "English").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale (e.g., "slovenščina", "English").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the baseline locale.
    pub fn is_baseline(&self) -> bool {
        self.config().is_baseline
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
