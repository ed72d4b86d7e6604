//! Internationalization (i18n) module for the multilingual storefront.
//!
//! This module contains all locale-related logic: the closed locale set,
//! resolution of untrusted routing input, localized content fields with
//! their fallback rules, per-locale page strings, and the coverage and
//! fallback observability around them.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: The `Locale` type and the total `resolve` mapping for routing input
//! - `localized`: `LocalizedText` content fields with their fallback chain
//! - `strings`: Centralized per-locale page strings
//! - `coverage`: Catalog translation coverage validation
//! - `metrics`: Fallback observability
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, LocalizedText};
//!
//! // Resolve an untrusted routing segment (never fails)
//! let locale = Locale::resolve("en");
//!
//! // Resolve a possibly-localized content field
//! let name: &str = wine.name.resolve(locale);
//! ```

mod coverage;
mod locale;
mod localized;
mod metrics;
mod registry;
mod strings;

pub use coverage::{CatalogCoverage, CoverageReport};
pub use locale::Locale;
pub use localized::LocalizedText;
pub use metrics::{FallbackMetrics, FallbackReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::PageStrings;
