pub mod health;
pub mod resume;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/layout", post(resume::handle_layout))
        .route("/api/v1/resume/ats-score", post(resume::handle_ats_score))
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        .route("/api/v1/resume/export/:format", post(resume::handle_export))
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn resume_json() -> Value {
        json!({
            "header": {
                "name": "Jane Doe",
                "contact": "Toronto, ON | jane@example.com | 555-123-4567"
            },
            "summary": "Backend engineer focused on payments infrastructure.",
            "experience": [{
                "company": "Acme",
                "location": "Toronto, ON",
                "dates": "2020 - Present",
                "title": "Senior Engineer",
                "bullets": [
                    "Managed team of 5",
                    "Increased revenue by 20%",
                    "Helped with various tasks"
                ]
            }],
            "education": [{ "school": "University of Waterloo", "degree": "BMath" }],
            "additional": { "technical_skills": "Rust, Go" }
        })
    }

    async fn post_json(uri: &str, body: &Value) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_layout_endpoint_returns_parameters() {
        let (status, body) = post_json("/api/v1/resume/layout", &resume_json()).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["density"], "expanded");
        assert_eq!(value["fit_level"], 0);
        let contact = value["contact_line"]["text"].as_str().unwrap();
        assert!(!contact.contains(", "));
        assert!(contact.contains('\u{2022}'));
    }

    #[tokio::test]
    async fn test_layout_endpoint_rejects_missing_name() {
        let mut doc = resume_json();
        doc["header"]["name"] = json!("");
        let (status, body) = post_json("/api/v1/resume/layout", &doc).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "INVALID_RESUME_DATA");
    }

    #[tokio::test]
    async fn test_export_json_rejects_missing_header() {
        let mut doc = resume_json();
        doc["header"] = Value::Null;
        let (status, body) = post_json("/api/v1/resume/export/json", &doc).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "INVALID_RESUME_DATA");
    }

    #[tokio::test]
    async fn test_ats_endpoint_accepts_empty_document() {
        let (status, body) = post_json("/api/v1/resume/ats-score", &json!({})).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["total_score"], 0);
        assert!(!value["feedback"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_combines_layout_and_score() {
        let (status, body) = post_json("/api/v1/resume/analyze", &resume_json()).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["layout"]["density"], "expanded");
        assert_eq!(value["ats"]["categories"]["quantifying_impact"], 67);
    }

    #[tokio::test]
    async fn test_export_text() {
        let (status, body) = post_json("/api/v1/resume/export/text", &resume_json()).await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("- Helped with various tasks\n"));
    }

    #[tokio::test]
    async fn test_export_json_wraps_resume() {
        let (status, body) = post_json("/api/v1/resume/export/json", &resume_json()).await;
        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert!(value["exported_at"].is_string());
        assert_eq!(value["resume"]["header"]["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_export_unknown_format_is_bad_request() {
        let (status, _) = post_json("/api/v1/resume/export/docx", &resume_json()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = post_json("/api/v1/nope", &json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "NOT_FOUND");
    }
}
