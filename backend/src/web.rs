use crate::db;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use std::sync::Arc;
use suraksha_shared::{
    IncidentReport, ReportResponse, SafeZone, REPORT_PATH, SAFE_ZONES, SAFE_ZONES_PATH,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const HEALTH_PATH: &str = "/api/health";

/// Public router constructor
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let static_files = ServeDir::new(static_dir)
        .precompressed_br()
        .precompressed_gzip();

    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(SAFE_ZONES_PATH, get(get_safe_zones))
        .route(REPORT_PATH, post(post_report))
        // anything that doesn't match the above routes goes to the static files
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<ReportResponse> {
    Json(ReportResponse::message("ok"))
}

async fn get_safe_zones() -> Json<Vec<SafeZone>> {
    Json(SAFE_ZONES.to_vec())
}

async fn post_report(
    State(state): State<Arc<AppState>>,
    body: Result<Json<IncidentReport>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportResponse>), ApiError> {
    let Json(report) = body?;
    let kind = report.validate()?;

    let now_ms = chrono::Utc::now().timestamp_millis();
    let id = db::insert_report(&state.db, kind, &report, now_ms).await?;
    info!(id, kind = %kind, "report stored");

    Ok((
        StatusCode::CREATED,
        Json(ReportResponse {
            message: "Report received".to_string(),
            id: Some(id),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> (Router, sqlx::SqlitePool) {
        let pool = db::memory_pool().await;
        let state = Arc::new(AppState { db: pool.clone() });
        (router(state, Path::new("./does-not-exist")), pool)
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(REPORT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn report(kind: &str, location: &str, description: &str) -> Request<Body> {
        let body = json!({
            "incidentType": kind,
            "location": location,
            "description": description,
        });
        post_json(body.to_string())
    }

    #[tokio::test]
    async fn valid_report_is_stored() {
        let (app, pool) = app().await;
        let (status, body) = send(app, report("unsafe-area", "Bittan Market", "no street lights")).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Report received");
        let id = body["id"].as_i64().unwrap();

        let rows = db::recent_reports(&pool, 1).await.unwrap();
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].incident_type, "unsafe-area");
        assert_eq!(rows[0].location, "Bittan Market");
        assert!(rows[0].created_at_ms > 0);
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let (app, pool) = app().await;
        let (status, body) = send(app, report("theft", "  ", "bag taken")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Location and description are required");
        assert_eq!(db::count_reports(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_type_is_rejected() {
        let (app, pool) = app().await;
        let (status, body) = send(app, report("ufo", "Van Vihar", "lights in the sky")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid type");
        assert_eq!(db::count_reports(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let (app, _pool) = app().await;
        let (status, body) = send(app.clone(), post_json("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body["message"].as_str().unwrap().is_empty());

        // well-formed JSON missing a field
        let (status, _) = send(app, post_json(r#"{"location":"x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn storage_failure_is_a_500() {
        let (app, pool) = app().await;
        pool.close().await;
        let (status, body) = send(app, report("theft", "Habibganj", "phone snatched")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Could not store report");
    }

    #[tokio::test]
    async fn safe_zones_are_listed() {
        let (app, _pool) = app().await;
        let req = Request::get(SAFE_ZONES_PATH).body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        let zones = body.as_array().unwrap();
        assert_eq!(zones.len(), 4);
        assert!(zones.iter().any(|z| z["type"] == "Police"));
        assert!(zones.iter().any(|z| z["name"] == "Hamidia Hospital"));
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let (app, _pool) = app().await;
        let req = Request::get(HEALTH_PATH).body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "ok" }));
    }
}
