use crate::catalog::Catalog;
use crate::config::Config;
use crate::pages;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

/// The currently served catalog snapshot and when it was loaded.
pub struct CatalogState {
    pub catalog: Catalog,
    pub loaded_at: DateTime<Utc>,
}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<RwLock<CatalogState>>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(RwLock::new(CatalogState {
                catalog,
                loaded_at: Utc::now(),
            })),
        }
    }
}

/// Build the storefront router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(pages::health))
        .route("/admin/reload", post(pages::reload_catalog))
        .route("/:locale/aromas", get(pages::aromas))
        .route("/:locale/foods", get(pages::foods))
        .route("/:locale/moods", get(pages::moods))
        .route("/:locale/wine-shop", get(pages::wine_shop))
        .route("/:locale/search", get(pages::search))
        .route("/:locale/order-confirmation", get(pages::order_confirmation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn run(config: Config, catalog: Catalog) -> Result<()> {
    let port = config.port;
    let state = AppState::new(config, catalog);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
