//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales supported by the
//! storefront. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use crate::i18n::Locale;
use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata and settings for a specific locale, including
/// its code, names, enabled status, and whether it's the baseline locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// ISO 639-1 language code (e.g., "sl", "en")
    pub code: &'static str,

    /// English name of the locale (e.g., "Slovene", "English")
    pub name: &'static str,

    /// Native name of the locale (e.g., "slovenščina", "English")
    pub native_name: &'static str,

    /// Whether this is the baseline locale (only one should be true)
    pub is_baseline: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains immutable
/// thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// The match is exact and case-sensitive: `"EN"` does not match `"en"`.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "sl", "en")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|cfg| cfg.code == code)
    }

    /// Get the configuration for a locale.
    ///
    /// # Panics
    /// Panics if the locale is missing from the registry. Every `Locale`
    /// variant must have exactly one entry, so this indicates a
    /// configuration error.
    pub fn config_for(&self, locale: Locale) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|cfg| cfg.locale == locale)
            .expect("Every locale should have a registry entry")
    }

    /// Get all enabled locales.
    ///
    /// # Returns
    /// A vector of references to all locale configurations where `enabled` is true.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|cfg| cfg.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    ///
    /// # Returns
    /// A vector of references to all locale configurations.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the baseline locale configuration.
    ///
    /// The baseline locale is the default for unrecognized routing input and
    /// the fallback of last resort for partially translated content. There
    /// should be exactly one baseline locale.
    ///
    /// # Returns
    /// A reference to the baseline locale configuration.
    ///
    /// # Panics
    /// Panics if no baseline locale is found or if multiple baseline
    /// locales are defined (this indicates a configuration error).
    pub fn baseline(&self) -> &LocaleConfig {
        let baseline_locales: Vec<_> = self
            .locales
            .iter()
            .filter(|cfg| cfg.is_baseline)
            .collect();

        match baseline_locales.len() {
            0 => panic!("No baseline locale found in registry"),
            1 => baseline_locales[0],
            _ => panic!("Multiple baseline locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code to check
    ///
    /// # Returns
    /// `true` if the locale exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|cfg| cfg.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// This function returns the set of locales the storefront serves.
/// Currently Slovene (baseline) and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Sl,
            code: "sl",
            name: "Slovene",
            native_name: "slovenščina",
            is_baseline: true,
            enabled: true,
        },
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            is_baseline: false,
            enabled: true,
        },
    ]
}
