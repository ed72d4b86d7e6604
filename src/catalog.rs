use crate::i18n::LocalizedText;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Error loading a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The listing facets the storefront exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Aromas,
    Foods,
    Moods,
}

impl FacetKind {
    pub const ALL: [FacetKind; 3] = [FacetKind::Aromas, FacetKind::Foods, FacetKind::Moods];

    /// Singular label used in logs and coverage findings.
    pub fn label(&self) -> &'static str {
        match self {
            FacetKind::Aromas => "aroma",
            FacetKind::Foods => "food",
            FacetKind::Moods => "mood",
        }
    }
}

/// One entry of a facet listing (an aroma, a food pairing, a mood).
///
/// Display fields come from the content export and may be plain text or
/// per-locale mappings; `#[serde(default)]` keeps absent fields as
/// `Missing` instead of failing the document.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetEntry {
    pub id: String,

    #[serde(default)]
    pub slug: LocalizedText,

    #[serde(default)]
    pub name: LocalizedText,

    #[serde(default)]
    pub description: LocalizedText,
}

/// One wine of the wine-shop listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Wine {
    pub id: String,

    #[serde(default)]
    pub slug: LocalizedText,

    #[serde(default)]
    pub name: LocalizedText,

    pub winery: String,

    /// Price in euro cents
    pub price_cents: u32,

    #[serde(default)]
    pub year: Option<i32>,
}

/// A content snapshot: the facet entries and wines the listing pages
/// render from.
///
/// Loaded from a JSON export of the content store and immutable until the
/// next reload; nothing here is written back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub aromas: Vec<FacetEntry>,

    #[serde(default)]
    pub foods: Vec<FacetEntry>,

    #[serde(default)]
    pub moods: Vec<FacetEntry>,

    #[serde(default)]
    pub wines: Vec<Wine>,
}

impl Catalog {
    /// Load a catalog snapshot from a JSON file.
    pub fn load(path: &str) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(Path::new(path)).map_err(|source| {
            CatalogError::Read {
                path: path.to_string(),
                source,
            }
        })?;

        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Get the entries of one facet.
    pub fn facet(&self, kind: FacetKind) -> &[FacetEntry] {
        match kind {
            FacetKind::Aromas => &self.aromas,
            FacetKind::Foods => &self.foods,
            FacetKind::Moods => &self.moods,
        }
    }
}
