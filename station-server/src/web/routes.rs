//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::catalog::CatalogSource;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: CatalogSource + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(search_stations::<S>))
        .route("/stations/lookup", get(lookup_station::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name.
///
/// Without `q` the whole catalog document is returned.
async fn search_stations<S: CatalogSource + 'static>(
    State(state): State<AppState<S>>,
    Query(req): Query<StationsQuery>,
) -> Response {
    let limit = state.config.effective_limit(req.limit);
    let catalog = state.catalog.snapshot().await;

    let stations = catalog.search(&req.q, req.country.as_deref(), limit);
    let envelope = catalog.envelope(&req.q, stations);
    Json(envelope).into_response()
}

/// Resolve a single station by id.
async fn lookup_station<S: CatalogSource + 'static>(
    State(state): State<AppState<S>>,
    Query(req): Query<LookupQuery>,
) -> Result<Response, AppError> {
    if req.id.is_empty() {
        return Err(AppError::BadRequest {
            message: "missing station id".to_string(),
        });
    }

    let catalog = state.catalog.snapshot().await;
    let station = catalog
        .resolve_by_id(&req.id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no station with id {}", req.id),
        })?;

    Ok(Json(station).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogError, CatalogStore};
    use crate::config::ServerConfig;
    use crate::domain::Station;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Source that always returns the same catalog.
    struct StaticSource(Catalog);

    impl CatalogSource for StaticSource {
        async fn load(&self) -> Result<Catalog, CatalogError> {
            Ok(self.0.clone())
        }
    }

    fn app() -> Router {
        let catalog = Catalog::new(vec![
            Station::new("http://irail.be/stations/NMBS/008814001", "Brussel-Zuid", 1300.0),
            Station::new("http://irail.be/stations/NMBS/008812005", "Brussel-Noord", 1100.0),
            Station::new("http://irail.be/stations/NMBS/008892007", "Gent-Sint-Pieters", 800.0),
            Station::new("http://irail.be/stations/NMBS/008894508", "Sint-Niklaas", 400.0),
        ])
        .unwrap()
        .with_metadata(
            "http://irail.be/stations",
            json!({"name": "http://xmlns.com/foaf/0.1/name"}),
        );

        let store = CatalogStore::with_catalog(catalog.clone(), StaticSource(catalog));
        create_router(AppState::new(store, ServerConfig::default()))
    }

    async fn fetch(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn graph_names(body: &Value) -> Vec<&str> {
        body["@graph"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn search_returns_envelope() {
        let (status, body) = fetch("/stations?q=sint&limit=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["@id"], "http://irail.be/stations?q=sint");
        assert_eq!(body["@context"]["name"], "http://xmlns.com/foaf/0.1/name");
        assert_eq!(graph_names(&body), ["Sint-Niklaas", "Gent-Sint-Pieters"]);
        assert!(body["@graph"][0].get("match").is_none());
    }

    #[tokio::test]
    async fn search_uses_default_limit() {
        let (_, body) = fetch("/stations?q=zzz").await;
        assert_eq!(graph_names(&body).len(), 4);

        let (_, body) = fetch("/stations?q=zzz&limit=1").await;
        assert_eq!(graph_names(&body), ["Brussel-Zuid"]);
    }

    #[tokio::test]
    async fn search_accepts_country() {
        let (status, body) = fetch("/stations?q=brussel&country=be&limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(graph_names(&body), ["Brussel-Zuid"]);
    }

    #[tokio::test]
    async fn no_query_returns_catalog() {
        let (status, body) = fetch("/stations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["@id"], "http://irail.be/stations");
        assert_eq!(
            graph_names(&body),
            ["Brussel-Zuid", "Brussel-Noord", "Gent-Sint-Pieters", "Sint-Niklaas"]
        );
    }

    #[tokio::test]
    async fn invalid_limit_is_rejected() {
        let (status, _) = fetch("/stations?q=gent&limit=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lookup_by_legacy_id() {
        let (status, body) = fetch("/stations/lookup?id=BE.NMBS.008892007").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["@id"], "http://irail.be/stations/NMBS/008892007");
        assert_eq!(body["name"], "Gent-Sint-Pieters");
        assert_eq!(body["avgStopTimes"], 800.0);
    }

    #[tokio::test]
    async fn lookup_by_uri() {
        let (status, body) =
            fetch("/stations/lookup?id=http%3A%2F%2Firail.be%2Fstations%2FNMBS%2F008814001").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Brussel-Zuid");
    }

    #[tokio::test]
    async fn lookup_unknown_is_not_found() {
        let (status, body) = fetch("/stations/lookup?id=008000000").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no station with id 008000000");
    }

    #[tokio::test]
    async fn lookup_without_id_is_bad_request() {
        let (status, _) = fetch("/stations/lookup?id=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = fetch("/stations/lookup").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
