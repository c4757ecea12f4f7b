// Woke or Not - JSON API
// Read-only routes over a shared, immutable catalog

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{Catalog, CatalogQuery, Category, Entity, LinkLogoLoader, LogoImage, LogoLoader};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Default rows per query when the request does not say
    pub limit: usize,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, limit: usize) -> Self {
        Self { catalog, limit }
    }
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Response types
// ============================================================================

#[derive(Serialize)]
pub struct CatalogInfo {
    pub entities: usize,
    pub built_at: DateTime<Utc>,
    pub fingerprint: String,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct CategoryStat {
    pub slug: &'static str,
    pub label: &'static str,
    pub woke: usize,
    pub not_woke: usize,
}

/// Entity as served to clients, with the display-only values filled in
#[derive(Serialize)]
pub struct EntityResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub is_woke: bool,
    pub status: &'static str,
    pub woke_percentage: u8,
    pub displayed_percentage: u8,
    pub logo: LogoImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_url: Option<String>,
    pub href: String,
}

impl From<&Entity> for EntityResponse {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            category: entity.category,
            is_woke: entity.is_woke,
            status: entity.status_label(),
            woke_percentage: entity.woke_percentage,
            displayed_percentage: entity.displayed_percentage(),
            logo: LinkLogoLoader.load(entity.logo_ref.as_deref()),
            evidence_url: entity.evidence_ref.clone(),
            href: format!("/api/lookup/{}", urlencoding::encode(&entity.name)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub woke: Option<bool>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/catalog - Catalog metadata
async fn catalog_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(CatalogInfo {
        entities: state.catalog.len(),
        built_at: state.catalog.built_at(),
        fingerprint: state.catalog.fingerprint().to_string(),
        version: crate::VERSION,
    }))
}

/// GET /api/categories - Categories with section sizes
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let stats: Vec<CategoryStat> = Category::ALL
        .iter()
        .map(|c| CategoryStat {
            slug: c.slug(),
            label: c.label(),
            woke: state.catalog.count_by(*c, true),
            not_woke: state.catalog.count_by(*c, false),
        })
        .collect();

    Json(ApiResponse::ok(stats))
}

/// GET /api/entities/:category?woke=&search=&limit= - Catalog query
async fn query_entities(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<QueryParams>,
) -> Response {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting query");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Vec<EntityResponse>>::err(e.to_string())),
            )
                .into_response();
        }
    };

    let query = CatalogQuery::new(category, params.woke.unwrap_or(true))
        .search(params.search.unwrap_or_default())
        .limit(params.limit.unwrap_or(state.limit));

    let results: Vec<EntityResponse> = state
        .catalog
        .query(&query)
        .into_iter()
        .map(EntityResponse::from)
        .collect();

    (StatusCode::OK, Json(ApiResponse::ok(results))).into_response()
}

/// GET /api/entity/:id - Entity by id
async fn entity_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(entity) => (StatusCode::OK, Json(ApiResponse::ok(EntityResponse::from(entity)))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<EntityResponse>::err(format!("No entity with id {}", id))),
        )
            .into_response(),
    }
}

/// GET /api/lookup/:name - Exact-match lookup
async fn lookup_entity(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.catalog.lookup(&name) {
        Some(entity) => (StatusCode::OK, Json(ApiResponse::ok(EntityResponse::from(entity)))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<EntityResponse>::err(format!("'{}' not found", name))),
        )
            .into_response(),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/catalog", get(catalog_info))
        .route("/categories", get(list_categories))
        .route("/entity/:id", get(entity_by_id))
        .route("/entities/:category", get(query_entities))
        .route("/lookup/:name", get(lookup_entity))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> (Router, Arc<Catalog>) {
        let catalog = Arc::new(Catalog::builtin());
        (router(AppState::new(catalog.clone(), 5)), catalog)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn names(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_catalog_info() {
        let (app, catalog) = app();
        let (status, body) = get_json(app, "/api/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["entities"], 60);
        assert_eq!(body["data"]["fingerprint"], catalog.fingerprint());
    }

    #[tokio::test]
    async fn test_categories() {
        let (app, _) = app();
        let (_, body) = get_json(app, "/api/categories").await;
        let cats = body["data"].as_array().unwrap();
        assert_eq!(cats.len(), 6);
        assert_eq!(cats[2]["slug"], "non-profits");
        assert_eq!(cats[2]["label"], "Non-Profits");
        assert_eq!(cats[2]["woke"], 5);
        assert_eq!(cats[2]["not_woke"], 5);
    }

    #[tokio::test]
    async fn test_query_defaults_to_woke_top_five() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/api/entities/companies").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["Apple", "Google", "Microsoft", "Amazon", "Nike"]);
        assert_eq!(body["data"][0]["displayed_percentage"], 90);
        assert_eq!(body["data"][0]["logo"]["kind"], "remote");
    }

    #[tokio::test]
    async fn test_query_not_woke_with_search() {
        let (app, _) = app();
        let (_, body) = get_json(app, "/api/entities/companies?woke=false&search=GOYA").await;
        assert_eq!(names(&body), vec!["Goya"]);
        assert_eq!(body["data"][0]["woke_percentage"], 25);
        assert_eq!(body["data"][0]["displayed_percentage"], 75);
        assert_eq!(body["data"][0]["status"], "NOT WOKE");
    }

    #[tokio::test]
    async fn test_query_limit_and_empty() {
        let (app, _) = app();
        let (_, body) = get_json(app.clone(), "/api/entities/media?limit=2").await;
        assert_eq!(names(&body), vec!["CNN", "BBC"]);

        let (status, body) = get_json(app, "/api/entities/government?woke=false&search=zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_unknown_category() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/api/entities/sports").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("sports"));
    }

    #[tokio::test]
    async fn test_lookup() {
        let (app, _) = app();
        let uri = format!("/api/lookup/{}", urlencoding::encode("department of defense (usa)"));
        let (status, body) = get_json(app.clone(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Department of Defense (USA)");
        assert_eq!(body["data"]["category"], "government");

        let (status, body) = get_json(app, "/api/lookup/department").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_href_round_trips_through_lookup() {
        let (app, _) = app();
        let (_, body) = get_json(app.clone(), "/api/entities/educational?search=berkeley").await;
        let href = body["data"][0]["href"].as_str().unwrap().to_string();

        let (status, body) = get_json(app, &href).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "University of California, Berkeley");
    }

    #[tokio::test]
    async fn test_entity_by_id() {
        let (app, catalog) = app();
        let nike = catalog.lookup("nike").unwrap();

        let (status, body) = get_json(app.clone(), &format!("/api/entity/{}", nike.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Nike");

        let (status, _) = get_json(app, "/api/entity/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
