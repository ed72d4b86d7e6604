//! Catalog translation coverage validation.
//!
//! The resolvers fail soft at request time; this module makes the gaps
//! visible ahead of time. It walks a loaded catalog and reports fields
//! that will fall back to the baseline locale, fields with no baseline
//! text at all, and slugs that are not URL-safe.

use crate::catalog::{Catalog, FacetKind};
use crate::i18n::{LocaleRegistry, LocalizedText};
use regex::Regex;
use std::sync::OnceLock;

/// Coverage report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Critical problems: content with no baseline text, which renders as
    /// an empty string for baseline-locale requests
    pub errors: Vec<String>,

    /// Non-critical findings: translations that fall back, slugs that are
    /// not URL-safe
    pub warnings: Vec<String>,
}

impl CoverageReport {
    /// Create a new empty coverage report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for CoverageReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog translation coverage.
pub struct CatalogCoverage;

// Slug pattern (cached for performance)
static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
}

impl CatalogCoverage {
    /// Validate translation coverage of a loaded catalog.
    ///
    /// This function checks that:
    /// - every display field has non-empty baseline text
    /// - every enabled non-baseline locale has its own translation
    /// - every resolved slug is URL-safe
    ///
    /// # Returns
    /// A `CoverageReport` containing any errors or warnings found.
    pub fn validate(catalog: &Catalog) -> CoverageReport {
        let mut report = CoverageReport::new();

        for kind in FacetKind::ALL {
            for entry in catalog.facet(kind) {
                Self::check_field(&mut report, kind.label(), &entry.id, "name", &entry.name);
                Self::check_slug(&mut report, kind.label(), &entry.id, &entry.slug);
            }
        }

        for wine in &catalog.wines {
            Self::check_field(&mut report, "wine", &wine.id, "name", &wine.name);
            Self::check_slug(&mut report, "wine", &wine.id, &wine.slug);
        }

        report
    }

    /// Check one localized display field.
    fn check_field(
        report: &mut CoverageReport,
        kind: &str,
        id: &str,
        field: &str,
        value: &LocalizedText,
    ) {
        let registry = LocaleRegistry::get();
        let baseline = registry.baseline();

        if value.resolve(baseline.locale).is_empty() {
            report.errors.push(format!(
                "{} '{}': {} has no {} text and renders empty",
                kind, id, field, baseline.code
            ));
            return;
        }

        for cfg in registry.list_enabled() {
            if cfg.is_baseline {
                continue;
            }
            if !value.has_translation(cfg.locale) {
                report.warnings.push(format!(
                    "{} '{}': {} falls back to {} for '{}'",
                    kind, id, field, baseline.code, cfg.code
                ));
            }
        }
    }

    /// Check that a slug resolves to URL-safe text in every enabled locale.
    fn check_slug(report: &mut CoverageReport, kind: &str, id: &str, slug: &LocalizedText) {
        let mut seen: Vec<&str> = Vec::new();

        for cfg in LocaleRegistry::get().list_enabled() {
            let resolved = slug.resolve(cfg.locale);
            if resolved.is_empty() || seen.contains(&resolved) {
                continue;
            }
            seen.push(resolved);

            if !slug_regex().is_match(resolved) {
                report.warnings.push(format!(
                    "{} '{}': slug '{}' is not URL-safe",
                    kind, id, resolved
                ));
            }
        }
    }
}
