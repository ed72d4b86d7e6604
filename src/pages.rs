//! Page handlers: the locale-dispatch glue between the routing layer and
//! the rendering collaborator.
//!
//! Every handler resolves the raw locale segment exactly once, resolves
//! localized content fields through that locale, forwards the request's
//! query parameters untouched, and returns a structured page context.
//! Malformed locale segments and missing translations degrade silently;
//! no listing page has a failure path.

use crate::catalog::{FacetKind, Wine};
use crate::i18n::{
    CatalogCoverage, FallbackMetrics, FallbackReport, Locale, LocalizedText, PageStrings,
};
use crate::security;
use crate::server::{AppState, CatalogState};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};

/// Query parameters as received from the routing layer: an ordered
/// sequence of key/value pairs, duplicates preserved, passed through to
/// the page context unmodified and uninspected.
pub type QueryParams = Vec<(String, String)>;

// ==================== Page Contexts ====================

#[derive(Debug, Serialize)]
pub struct ListingItem {
    pub slug: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ListingPage {
    pub locale: Locale,
    pub heading: &'static str,
    pub empty_notice: &'static str,
    pub items: Vec<ListingItem>,
    pub query: QueryParams,
}

#[derive(Debug, Serialize)]
pub struct WineCard {
    pub slug: String,
    pub name: String,
    pub winery: String,
    pub year: Option<i32>,
    pub price_cents: u32,
}

#[derive(Debug, Serialize)]
pub struct WineShopPage {
    pub locale: Locale,
    pub heading: &'static str,
    pub empty_notice: &'static str,
    pub wines: Vec<WineCard>,
    pub query: QueryParams,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub locale: Locale,
    pub heading: &'static str,
    pub placeholder: &'static str,
    pub query: QueryParams,
}

#[derive(Debug, Serialize)]
pub struct OrderConfirmationPage {
    pub locale: Locale,
    pub heading: &'static str,
    pub message: &'static str,
    pub query: QueryParams,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub wines: usize,
    pub loaded_at: String,
    pub fallbacks: FallbackReport,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub aromas: usize,
    pub foods: usize,
    pub moods: usize,
    pub wines: usize,
    pub loaded_at: String,
    pub coverage_warnings: usize,
}

// ==================== Resolution Helpers ====================

/// Resolve the raw locale path segment, recording a fallback when the
/// token was not a supported locale code.
fn resolve_request_locale(raw: &str) -> Locale {
    let locale = Locale::resolve(raw);
    if locale.code() != raw {
        FallbackMetrics::global().record_locale_fallback();
    }
    locale
}

/// Resolve a localized field for the page, recording fallback and
/// empty-result metrics.
fn resolve_field(field: &LocalizedText, locale: Locale) -> String {
    let metrics = FallbackMetrics::global();
    if !field.has_translation(locale) {
        metrics.record_field_fallback();
    }

    let text = field.resolve(locale);
    if text.is_empty() {
        metrics.record_empty_field();
    }
    text.to_string()
}

fn facet_listing(
    state: &AppState,
    kind: FacetKind,
    raw_locale: &str,
    query: QueryParams,
) -> ListingPage {
    let locale = resolve_request_locale(raw_locale);
    let strings = PageStrings::for_locale(locale);
    let heading = match kind {
        FacetKind::Aromas => strings.aromas_heading,
        FacetKind::Foods => strings.foods_heading,
        FacetKind::Moods => strings.moods_heading,
    };

    let guard = state.catalog.read().unwrap();
    let items = guard
        .catalog
        .facet(kind)
        .iter()
        .map(|entry| ListingItem {
            slug: resolve_field(&entry.slug, locale),
            name: resolve_field(&entry.name, locale),
            description: resolve_field(&entry.description, locale),
        })
        .collect();

    ListingPage {
        locale,
        heading,
        empty_notice: strings.empty_listing,
        items,
        query,
    }
}

fn wine_card(wine: &Wine, locale: Locale) -> WineCard {
    WineCard {
        slug: resolve_field(&wine.slug, locale),
        name: resolve_field(&wine.name, locale),
        winery: wine.winery.clone(),
        year: wine.year,
        price_cents: wine.price_cents,
    }
}

// ==================== Listing Pages ====================

pub async fn aromas(
    State(state): State<AppState>,
    Path(raw_locale): Path<String>,
    Query(query): Query<QueryParams>,
) -> Json<ListingPage> {
    Json(facet_listing(&state, FacetKind::Aromas, &raw_locale, query))
}

pub async fn foods(
    State(state): State<AppState>,
    Path(raw_locale): Path<String>,
    Query(query): Query<QueryParams>,
) -> Json<ListingPage> {
    Json(facet_listing(&state, FacetKind::Foods, &raw_locale, query))
}

pub async fn moods(
    State(state): State<AppState>,
    Path(raw_locale): Path<String>,
    Query(query): Query<QueryParams>,
) -> Json<ListingPage> {
    Json(facet_listing(&state, FacetKind::Moods, &raw_locale, query))
}

pub async fn wine_shop(
    State(state): State<AppState>,
    Path(raw_locale): Path<String>,
    Query(query): Query<QueryParams>,
) -> Json<WineShopPage> {
    let locale = resolve_request_locale(&raw_locale);
    let strings = PageStrings::for_locale(locale);

    let guard = state.catalog.read().unwrap();
    let wines = guard
        .catalog
        .wines
        .iter()
        .map(|wine| wine_card(wine, locale))
        .collect();

    Json(WineShopPage {
        locale,
        heading: strings.wine_shop_heading,
        empty_notice: strings.empty_listing,
        wines,
        query,
    })
}

// ==================== Search Page ====================

/// Search execution lives in the client collaborator; the page context
/// only carries the locale, the chrome strings, and the untouched query.
pub async fn search(
    Path(raw_locale): Path<String>,
    Query(query): Query<QueryParams>,
) -> Json<SearchPage> {
    let locale = resolve_request_locale(&raw_locale);
    let strings = PageStrings::for_locale(locale);

    Json(SearchPage {
        locale,
        heading: strings.search_heading,
        placeholder: strings.search_placeholder,
        query,
    })
}

// ==================== Order Confirmation Page ====================

pub async fn order_confirmation(
    Path(raw_locale): Path<String>,
    Query(query): Query<QueryParams>,
) -> Json<OrderConfirmationPage> {
    let locale = resolve_request_locale(&raw_locale);
    let strings = PageStrings::for_locale(locale);

    Json(OrderConfirmationPage {
        locale,
        heading: strings.order_confirmation_heading,
        message: strings.order_confirmation_message,
        query,
    })
}

// ==================== Health ====================

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let guard = state.catalog.read().unwrap();

    Json(HealthResponse {
        status: "ok",
        wines: guard.catalog.wines.len(),
        loaded_at: guard.loaded_at.to_rfc3339(),
        fallbacks: FallbackMetrics::global().report(),
    })
}

// ==================== Admin ====================

/// Re-read the catalog file and swap it in.
///
/// On failure the previous catalog stays live; content problems must not
/// take the storefront down.
pub async fn reload_catalog(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ReloadResponse>, (StatusCode, String)> {
    let Some(expected_key) = state.config.admin_api_key.as_deref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "admin API is not configured".to_string(),
        ));
    };

    let provided_key = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if !security::constant_time_compare(provided_key, expected_key) {
        return Err((StatusCode::UNAUTHORIZED, "invalid API key".to_string()));
    }

    match crate::catalog::Catalog::load(&state.config.catalog_file) {
        Ok(catalog) => {
            let report = CatalogCoverage::validate(&catalog);
            for warning in &report.warnings {
                warn!("catalog: {}", warning);
            }
            for finding in &report.errors {
                error!("catalog: {}", finding);
            }

            let response = ReloadResponse {
                aromas: catalog.aromas.len(),
                foods: catalog.foods.len(),
                moods: catalog.moods.len(),
                wines: catalog.wines.len(),
                loaded_at: Utc::now().to_rfc3339(),
                coverage_warnings: report.warnings.len(),
            };

            let mut guard = state.catalog.write().unwrap();
            *guard = CatalogState {
                catalog,
                loaded_at: Utc::now(),
            };

            info!("Catalog reloaded: {} wines", response.wines);
            Ok(Json(response))
        }
        Err(err) => {
            error!("Catalog reload failed, keeping previous snapshot: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("catalog reload failed: {}", err),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use axum::http::HeaderValue;

    const TEST_CATALOG: &str = r#"{
        "aromas": [
            {"id": "berries", "slug": {"sl": "jagodicevje", "en": "berries"},
             "name": {"sl": "Jagodičevje", "en": "Berries"},
             "description": {"sl": "Vina z aromo jagodičevja."}},
            {"id": "citrus", "slug": {"sl": "citrusi"}, "name": {"sl": "Citrusi"}}
        ],
        "foods": [
            {"id": "cheese", "slug": {"sl": "sir", "en": "cheese"},
             "name": {"sl": "Sir", "en": "Cheese"}}
        ],
        "moods": [],
        "wines": [
            {"id": "w1", "slug": "rebula-2021", "name": "Rebula 2021",
             "winery": "Klet Brda", "price_cents": 1450, "year": 2021},
            {"id": "w2", "slug": {"sl": "teran"}, "name": {"sl": "Teran"},
             "winery": "Vinakras", "price_cents": 990}
        ]
    }"#;

    fn test_state(admin_api_key: Option<&str>, catalog_file: &str) -> AppState {
        let catalog: Catalog = serde_json::from_str(TEST_CATALOG).expect("test catalog");
        let config = Config {
            catalog_file: catalog_file.to_string(),
            port: 8080,
            admin_api_key: admin_api_key.map(str::to_string),
        };
        AppState::new(config, catalog)
    }

    fn no_query() -> QueryParams {
        Vec::new()
    }

    // ==================== Listing Page Tests ====================

    #[tokio::test]
    async fn test_aromas_page_english() {
        let state = test_state(None, "unused.json");

        let page = aromas(
            State(state),
            Path("en".to_string()),
            Query(no_query()),
        )
        .await
        .0;

        assert_eq!(page.locale, Locale::En);
        assert_eq!(page.heading, "Aromas");
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Berries");
        assert_eq!(page.items[0].slug, "berries");
        // Slovene-only entry falls back to the baseline text.
        assert_eq!(page.items[1].name, "Citrusi");
    }

    #[tokio::test]
    async fn test_aromas_page_unknown_locale_falls_back_to_slovene() {
        let state = test_state(None, "unused.json");

        let page = aromas(
            State(state),
            Path("de".to_string()),
            Query(no_query()),
        )
        .await
        .0;

        assert_eq!(page.locale, Locale::Sl);
        assert_eq!(page.heading, "Arome");
        assert_eq!(page.items[0].name, "Jagodičevje");
    }

    #[tokio::test]
    async fn test_foods_and_moods_pages() {
        let state = test_state(None, "unused.json");

        let foods_page = foods(
            State(state.clone()),
            Path("sl".to_string()),
            Query(no_query()),
        )
        .await
        .0;
        assert_eq!(foods_page.heading, "Hrana");
        assert_eq!(foods_page.items.len(), 1);
        assert_eq!(foods_page.items[0].name, "Sir");

        let moods_page = moods(
            State(state),
            Path("sl".to_string()),
            Query(no_query()),
        )
        .await
        .0;
        assert_eq!(moods_page.heading, "Razpoloženja");
        assert!(moods_page.items.is_empty());
        assert_eq!(moods_page.empty_notice, "Ni zadetkov.");
    }

    #[tokio::test]
    async fn test_listing_page_query_passthrough_preserves_order_and_duplicates() {
        let state = test_state(None, "unused.json");
        let query = vec![
            ("sort".to_string(), "price".to_string()),
            ("tag".to_string(), "red".to_string()),
            ("tag".to_string(), "dry".to_string()),
        ];

        let page = aromas(
            State(state),
            Path("en".to_string()),
            Query(query.clone()),
        )
        .await
        .0;

        assert_eq!(page.query, query);
    }

    #[tokio::test]
    async fn test_missing_description_renders_empty() {
        let state = test_state(None, "unused.json");

        let page = foods(
            State(state),
            Path("en".to_string()),
            Query(no_query()),
        )
        .await
        .0;

        assert_eq!(page.items[0].description, "");
    }

    // ==================== Wine Shop Tests ====================

    #[tokio::test]
    async fn test_wine_shop_page() {
        let state = test_state(None, "unused.json");

        let page = wine_shop(
            State(state),
            Path("en".to_string()),
            Query(no_query()),
        )
        .await
        .0;

        assert_eq!(page.heading, "Wine shop");
        assert_eq!(page.wines.len(), 2);
        assert_eq!(page.wines[0].name, "Rebula 2021");
        assert_eq!(page.wines[0].winery, "Klet Brda");
        assert_eq!(page.wines[0].price_cents, 1450);
        assert_eq!(page.wines[0].year, Some(2021));
        // Slovene-only wine name falls back for English.
        assert_eq!(page.wines[1].name, "Teran");
        assert_eq!(page.wines[1].year, None);
    }

    // ==================== Search Page Tests ====================

    #[tokio::test]
    async fn test_search_page_forwards_query_untouched() {
        let query = vec![("q".to_string(), "rebula brda".to_string())];

        let page = search(Path("en".to_string()), Query(query.clone())).await.0;

        assert_eq!(page.locale, Locale::En);
        assert_eq!(page.heading, "Search");
        assert_eq!(page.query, query);
    }

    #[tokio::test]
    async fn test_search_page_empty_locale_segment() {
        let page = search(Path(String::new()), Query(no_query())).await.0;
        assert_eq!(page.locale, Locale::Sl);
        assert_eq!(page.heading, "Iskanje");
    }

    // ==================== Order Confirmation Tests ====================

    #[tokio::test]
    async fn test_order_confirmation_page() {
        let query = vec![("order".to_string(), "VN-2026-0142".to_string())];

        let page = order_confirmation(Path("sl".to_string()), Query(query.clone()))
            .await
            .0;

        assert_eq!(page.heading, "Hvala za nakup!");
        assert!(page.message.contains("naročilo"));
        assert_eq!(page.query, query);
    }

    // ==================== Health Tests ====================

    #[tokio::test]
    async fn test_health_reports_catalog() {
        let state = test_state(None, "unused.json");

        let response = health(State(state)).await.0;

        assert_eq!(response.status, "ok");
        assert_eq!(response.wines, 2);
        // RFC 3339 timestamp
        assert!(chrono::DateTime::parse_from_rfc3339(&response.loaded_at).is_ok());
    }

    // ==================== Reload Tests ====================

    fn api_key_headers(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_str(key).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_reload_requires_configured_key() {
        let state = test_state(None, "unused.json");

        let result = reload_catalog(State(state), HeaderMap::new()).await;

        let (status, _) = result.expect_err("Should be rejected");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_reload_rejects_wrong_key() {
        let state = test_state(Some("secret"), "unused.json");

        let result = reload_catalog(State(state), api_key_headers("wrong")).await;

        let (status, _) = result.expect_err("Should be rejected");
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_reload_swaps_catalog() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"wines": [{"id": "w9", "name": "Zelen", "winery": "Guerila", "price_cents": 2100}]}"#,
        )
        .unwrap();
        let state = test_state(Some("secret"), file.path().to_str().unwrap());

        let response = reload_catalog(State(state.clone()), api_key_headers("secret"))
            .await
            .expect("Should reload")
            .0;

        assert_eq!(response.wines, 1);
        assert_eq!(response.aromas, 0);

        let page = wine_shop(
            State(state),
            Path("sl".to_string()),
            Query(no_query()),
        )
        .await
        .0;
        assert_eq!(page.wines.len(), 1);
        assert_eq!(page.wines[0].name, "Zelen");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_catalog() {
        let state = test_state(Some("secret"), "/non/existent/catalog.json");

        let result = reload_catalog(State(state.clone()), api_key_headers("secret")).await;
        let (status, message) = result.expect_err("Should fail");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("catalog reload failed"));

        // The original snapshot is still served.
        let page = wine_shop(
            State(state),
            Path("sl".to_string()),
            Query(no_query()),
        )
        .await
        .0;
        assert_eq!(page.wines.len(), 2);
    }
}
