//! Axum route handlers for the colorsense HTTP service.
//!
//! # Routes
//!
//! - `GET  /api/health`      — Returns `{"status": "ok", "version": ...}`
//! - `GET  /api/test-mode`   — Lists the canned response kinds
//! - `POST /api/test-upload` — `{response_type}` → canned analysis
//! - `POST /api/analyze`     — Multipart upload → provider call → normalized sections
//!
//! Test mode is an explicit per-request form field, never process-wide
//! state: concurrent requests cannot interfere with each other.

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::analysis::normalize;
use crate::fixtures::{generate, FixtureKind};
use crate::prompts::resolve_prompt;
use crate::providers::{self, Provider, ProviderError};

/// Upload size cap.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

type ApiError = (StatusCode, Json<Value>);

/// Build the axum router with all routes.
pub fn app_router() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/test-mode", get(test_mode_handler))
        .route("/api/test-upload", post(test_upload_handler))
        .route("/api/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /api/health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "colorsense",
    }))
}

/// GET /api/test-mode — canned response kinds a client may request.
async fn test_mode_handler() -> impl IntoResponse {
    let kinds: Vec<&str> = FixtureKind::ALL.iter().map(FixtureKind::name).collect();
    Json(json!({
        "test_mode": "per-request",
        "available_types": kinds,
    }))
}

#[derive(Debug, Deserialize)]
struct TestUploadRequest {
    #[serde(default)]
    response_type: Option<String>,
}

/// POST /api/test-upload — serve a canned analysis without touching any
/// provider.
async fn test_upload_handler(Json(request): Json<TestUploadRequest>) -> impl IntoResponse {
    let kind = FixtureKind::from_name(request.response_type.as_deref().unwrap_or_default());
    let fixture = generate(kind);
    Json(json!({
        "success": true,
        "analysis": fixture.raw_response,
        "parsed_analysis": fixture.parsed_sections,
        "provider": "test_mode",
        "response_type": kind.name(),
    }))
}

/// Fields collected from the analyze multipart form.
#[derive(Debug, Default)]
struct AnalyzeForm {
    /// (filename, mime type, bytes)
    image: Option<(String, String, Bytes)>,
    provider: Option<String>,
    custom_prompt: Option<String>,
    test_mode: bool,
    test_response_type: Option<String>,
}

/// POST /api/analyze — upload a photo, run the provider, normalize the
/// reply.
///
/// The raw reply is always normalized, fixture mode included; the
/// response carries both the verbatim text and the structured sections.
async fn analyze_handler(multipart: Multipart) -> Result<Json<Value>, ApiError> {
    let form = read_form(multipart).await?;

    if form.test_mode {
        let kind = FixtureKind::from_name(form.test_response_type.as_deref().unwrap_or_default());
        let fixture = generate(kind);
        return Ok(Json(json!({
            "success": true,
            "analysis": fixture.raw_response,
            "parsed_analysis": fixture.parsed_sections,
            "provider": "test_mode",
            "response_type": kind.name(),
        })));
    }

    let (filename, mime_type, data) = form
        .image
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "no image file provided"))?;

    if data.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "empty image upload"));
    }
    if !has_allowed_extension(&filename) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "unsupported file type; allowed: png, jpg, jpeg, gif, bmp, webp",
        ));
    }

    let provider: Provider = form
        .provider
        .as_deref()
        .unwrap_or("gemini")
        .parse()
        .map_err(|err: ProviderError| error_response(StatusCode::BAD_REQUEST, &err.to_string()))?;

    let prompt = resolve_prompt(form.custom_prompt.as_deref());

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, %provider, bytes = data.len(), "analyzing upload");

    let raw = providers::invoke(provider, &data, &mime_type, prompt)
        .await
        .map_err(provider_error_response)?;

    let sections = normalize(&raw);
    tracing::debug!(
        %request_id,
        seasonal_type = %sections.observations.overall_type,
        clarification = sections.is_clarification(),
        "normalized provider reply"
    );

    Ok(Json(json!({
        "success": true,
        "analysis": raw,
        "parsed_analysis": sections,
        "provider": provider.as_str(),
    })))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, ApiError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, &format!("malformed upload: {}", err)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_string();
                let data = field.bytes().await.map_err(|err| {
                    error_response(StatusCode::BAD_REQUEST, &format!("failed to read upload: {}", err))
                })?;
                form.image = Some((filename, mime_type, data));
            }
            "provider" => form.provider = Some(read_text(field).await?),
            "custom_prompt" => form.custom_prompt = Some(read_text(field).await?),
            "test_mode" => form.test_mode = read_text(field).await? == "true",
            "test_response_type" => form.test_response_type = Some(read_text(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, &format!("malformed field: {}", err)))
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

/// Configuration problems are the client's to fix (use test mode or set
/// a key); everything else is an upstream failure.
fn provider_error_response(err: ProviderError) -> ApiError {
    let status = match err {
        ProviderError::MissingApiKey { .. } | ProviderError::UnknownProvider { .. } => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::BAD_GATEWAY,
    };
    error_response(status, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            ));
        }
        body.push_str(&format!("--{}--\r\n", boundary));
        body
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_router()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn test_test_mode_lists_all_kinds() {
        let response = app_router()
            .oneshot(Request::get("/api/test-mode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let payload = body_json(response).await;
        let kinds = payload["available_types"].as_array().unwrap();
        assert_eq!(kinds.len(), FixtureKind::ALL.len());
    }

    #[tokio::test]
    async fn test_test_upload_serves_fixture() {
        let request = Request::post("/api/test-upload")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"response_type": "cool_winter"}"#))
            .unwrap();
        let response = app_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["provider"], "test_mode");
        assert_eq!(payload["response_type"], "cool_winter");
        let expected = serde_json::to_value(generate(FixtureKind::CoolWinter).parsed_sections).unwrap();
        assert_eq!(payload["parsed_analysis"], expected);
    }

    #[tokio::test]
    async fn test_analyze_in_test_mode_skips_providers() {
        let boundary = "xBOUNDARYx";
        let body = multipart_body(
            boundary,
            &[("test_mode", "true"), ("test_response_type", "soft_summer")],
        );
        let request = Request::post("/api/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload["success"], true);
        assert_eq!(payload["response_type"], "soft_summer");
        assert_eq!(
            payload["parsed_analysis"]["observations"]["overall_type"],
            "Soft Summer"
        );
    }

    #[tokio::test]
    async fn test_analyze_without_image_is_rejected() {
        let boundary = "xBOUNDARYx";
        let body = multipart_body(boundary, &[("provider", "gemini")]);
        let request = Request::post("/api/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = body_json(response).await;
        assert!(payload["error"].as_str().unwrap().contains("no image"));
    }

    #[test]
    fn test_extension_allowlist() {
        assert!(has_allowed_extension("selfie.JPG"));
        assert!(has_allowed_extension("photo.webp"));
        assert!(!has_allowed_extension("document.pdf"));
        assert!(!has_allowed_extension("no_extension"));
    }
}
