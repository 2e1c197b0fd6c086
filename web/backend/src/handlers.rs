use crate::models::{
    CacheClearResponse, CountriesResponse, CountryQuery, HealthResponse, RegionQuery,
    TopRatedQuery, WineListQuery, WineListResponse, WineSearchQuery, WineSearchResponse,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "WineWise API is running".to_string(),
    })
}

pub async fn list_wines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WineListQuery>,
) -> Json<WineListResponse> {
    let wines = match params.category.as_deref() {
        Some(label) if label != "Todos" => state.catalog.get_wines_by_type(label).await,
        _ => state.catalog.get_all_wines().await,
    };
    let count = wines.len();

    Json(WineListResponse { wines, count })
}

pub async fn search_wines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WineSearchQuery>,
) -> Json<WineSearchResponse> {
    let query = params.q.trim();

    if query.is_empty() {
        return Json(WineSearchResponse {
            query: query.to_string(),
            results: vec![],
            count: 0,
        });
    }

    let results = state
        .catalog
        .search_wines(query, params.category.as_deref())
        .await;
    let count = results.len();

    Json(WineSearchResponse {
        query: query.to_string(),
        results,
        count,
    })
}

pub async fn top_rated_wines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopRatedQuery>,
) -> Json<WineListResponse> {
    let wines = state.catalog.get_top_rated(params.limit).await;
    let count = wines.len();

    Json(WineListResponse { wines, count })
}

pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<CountriesResponse> {
    let countries = state.catalog.get_unique_countries().await;
    let count = countries.len();

    Json(CountriesResponse { countries, count })
}

pub async fn wines_by_country(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryQuery>,
) -> Json<WineListResponse> {
    let wines = state.catalog.get_wines_by_country(&params.country).await;
    let count = wines.len();

    Json(WineListResponse { wines, count })
}

pub async fn wines_by_region(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionQuery>,
) -> Json<WineListResponse> {
    let wines = state.catalog.get_wines_by_region(&params.region).await;
    let count = wines.len();

    Json(WineListResponse { wines, count })
}

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<CacheClearResponse> {
    state.catalog.clear_cache().await;

    Json(CacheClearResponse {
        status: "ok".to_string(),
        message: "Wine catalog cache cleared".to_string(),
    })
}
