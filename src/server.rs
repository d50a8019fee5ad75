//! HTTP surface for the three catalog views
//!
//! The catalog is loaded once before the listener starts and shared
//! read-only. Each request builds its own query state, so views never see
//! each other's search, sort, type or page selections.

use anyhow::Result;
use axum::{
    extract::{Path, Query as AxumQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::{Catalog, CatalogSource};
use crate::config::CatalogConfig;
use crate::models::SortMode;
use crate::query::QueryState;
use crate::registry::{self, PokemonType};
use crate::views::{DetailPage, DetailView, GalleryPage, GalleryView, ListPage, ListView};

/// State shared across requests
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<CatalogConfig>,
    pub source: Arc<dyn CatalogSource>,
}

/// Query parameters for GET /list
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Query parameters for GET /gallery
#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    /// Comma-separated type names
    #[serde(default)]
    pub types: Option<String>,
    /// Zero-based page index
    #[serde(default)]
    pub page: Option<usize>,
}

/// One row of GET /types
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub id: u8,
    pub name: PokemonType,
    pub icon_url: String,
}

/// Parse an optional sort parameter (absent = default order)
pub fn parse_sort(sort: Option<&str>) -> Result<SortMode> {
    match sort {
        None | Some("") => Ok(SortMode::default()),
        Some(s) => s.parse::<SortMode>().map_err(|_| {
            anyhow::anyhow!(
                "Unknown sort mode '{}'. Supported: dex-asc, dex-desc, name-asc, name-desc",
                s
            )
        }),
    }
}

/// Build the list view for a request
pub fn list_response(catalog: &Catalog, config: &CatalogConfig, params: &ListParams) -> Result<ListPage> {
    let mut view = ListView::new(catalog);
    view.set_sort_mode(parse_sort(params.sort.as_deref())?);
    if let Some(q) = &params.q {
        view.set_search_text(q.clone());
    }
    Ok(view.page(config))
}

/// Build one gallery page for a request
pub fn gallery_response(
    catalog: &Catalog,
    config: &CatalogConfig,
    params: &GalleryParams,
) -> Result<GalleryPage> {
    let type_names: Vec<String> = params
        .types
        .as_deref()
        .map(|s| s.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    let state = QueryState::new(
        params.q.clone().unwrap_or_default(),
        parse_sort(params.sort.as_deref())?,
    )
    .with_types(registry::parse_types(&type_names)?);

    let mut view = GalleryView::new(catalog, config.page_size);
    view.set_state(state);
    view.go_to(params.page.unwrap_or(0));
    Ok(view.page(config))
}

/// The category registry with icon URLs
pub fn types_response(config: &CatalogConfig) -> Vec<TypeInfo> {
    PokemonType::all()
        .map(|kind| TypeInfo {
            id: kind.id(),
            name: kind,
            icon_url: crate::sprites::type_icon_url(config, &kind.to_string()),
        })
        .collect()
}

async fn handle_list(
    State(state): State<AppState>,
    AxumQuery(params): AxumQuery<ListParams>,
) -> Result<Json<ListPage>, (StatusCode, String)> {
    log::info!("List request: q={:?} sort={:?}", params.q, params.sort);
    list_response(&state.catalog, &state.config, &params)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("{:#}", e)))
}

async fn handle_gallery(
    State(state): State<AppState>,
    AxumQuery(params): AxumQuery<GalleryParams>,
) -> Result<Json<GalleryPage>, (StatusCode, String)> {
    log::info!(
        "Gallery request: q={:?} sort={:?} types={:?} page={:?}",
        params.q,
        params.sort,
        params.types,
        params.page
    );
    gallery_response(&state.catalog, &state.config, &params)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("{:#}", e)))
}

async fn handle_details(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DetailPage>, (StatusCode, String)> {
    log::info!("Details request: id={}", id);
    match DetailView::load(state.source.as_ref(), &state.catalog, id).await {
        Ok(view) => Ok(Json(view.page(&state.config))),
        Err(e) => {
            log::error!("Details error: {:#}", e);
            Err((StatusCode::BAD_GATEWAY, format!("{:#}", e)))
        }
    }
}

async fn handle_types(State(state): State<AppState>) -> Json<Vec<TypeInfo>> {
    Json(types_response(&state.config))
}

async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, "Dexview is running")
}

/// Router with every view route mounted
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_list))
        .route("/list", get(handle_list))
        .route("/gallery", get(handle_gallery))
        .route("/details/:id", get(handle_details))
        .route("/types", get(handle_types))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn run_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
