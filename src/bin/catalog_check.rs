//! Validate a catalog export and print its translation coverage report.
//!
//! Usage: `catalog-check <catalog.json>` (falls back to `CATALOG_FILE`).
//! Exits non-zero when the catalog contains content that renders empty.

use anyhow::{Context, Result};
use vinoteka::catalog::Catalog;
use vinoteka::i18n::CatalogCoverage;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CATALOG_FILE").ok())
        .context("usage: catalog-check <catalog.json>")?;

    let catalog = Catalog::load(&path)?;
    println!(
        "{}: {} wines, {} aromas, {} foods, {} moods",
        path,
        catalog.wines.len(),
        catalog.aromas.len(),
        catalog.foods.len(),
        catalog.moods.len()
    );

    let report = CatalogCoverage::validate(&catalog);
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for finding in &report.errors {
        println!("error: {}", finding);
    }

    if report.is_clean() {
        println!("coverage: clean");
    }

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
