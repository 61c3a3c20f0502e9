use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_derive::Deserialize;

use crate::errors::Result;
use crate::json_api::{convert_json, presets};
use crate::{to_clip_path, to_polygon, PolygonConfig, Quality};

// Responses are data only; nothing should be executed or framed.
const CSP: &str = "default-src 'none'; frame-ancestors 'none'";

#[derive(Debug, Default, Deserialize)]
struct RequestConfig {
    #[serde(default)]
    quality: Quality,
    curve_segments: Option<u32>,
    arc_segments: Option<u32>,
}

impl From<RequestConfig> for PolygonConfig {
    fn from(config: RequestConfig) -> Self {
        PolygonConfig::with_overrides(config.quality, config.curve_segments, config.arc_segments)
    }
}

fn convert_json_handler(input: &str) -> Response {
    let response = convert_json(input);
    let status = if response.error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (
        status,
        [(header::CONTENT_SECURITY_POLICY, CSP)],
        Json(response),
    )
        .into_response()
}

/// Raw CSS text on success, or a 400 with a plain-text error.
fn css_response(result: Result<String>) -> Response {
    match result {
        Ok(css) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/css"),
                (header::CONTENT_SECURITY_POLICY, CSP),
            ],
            css,
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain")],
            format!("Error: {e}"),
        )
            .into_response(),
    }
}

async fn convert(input: String) -> impl IntoResponse {
    convert_json_handler(&input)
}

async fn clip_path(input: String) -> impl IntoResponse {
    css_response(to_clip_path(&input))
}

async fn polygon(config: Query<RequestConfig>, input: String) -> impl IntoResponse {
    let Query(config) = config;
    css_response(to_polygon(&input, &config.into()))
}

async fn quality_presets() -> impl IntoResponse {
    Json(presets())
}

pub fn router() -> Router {
    Router::new()
        .route("/api/convert", post(convert))
        .route("/api/clip-path", post(clip_path))
        .route("/api/polygon", post(polygon))
        .route("/api/presets", get(quality_presets))
}

pub async fn start_server(listen_addr: Option<&str>) -> Result<()> {
    let addr = listen_addr.unwrap_or("127.0.0.1:3004");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("Listening on: http://{addr}");
    axum::serve(listener, router()).await?;
    Ok(())
}
