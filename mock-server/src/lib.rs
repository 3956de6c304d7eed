//! In-memory shortening backend used by the client's tests and local runs.
//!
//! Serves `POST /shorten`, `GET /qr` and `GET /{code}` with the same JSON
//! shapes as the production service. Links live in a `RwLock`-guarded map
//! and are lost on restart.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use qrcode::{render::svg, QrCode};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub mod config;

pub use config::{Config, ConfigError};

const CODE_LEN: usize = 6;
const CODE_ALPHABET: [char; 62] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

#[derive(Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct QrQuery {
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL must start with http:// or https://")]
    InvalidUrl,

    #[error("Short code not found")]
    NotFound,

    #[error("Failed to generate QR code")]
    QrGeneration,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidUrl | AppError::QrGeneration => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Both directions of the code <-> long URL mapping.
#[derive(Default)]
pub struct Links {
    by_code: HashMap<String, String>,
    by_url: HashMap<String, String>,
}

pub type Db = Arc<RwLock<Links>>;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub public_base_url: Arc<str>,
}

pub fn app(public_base_url: &str) -> Router {
    let state = AppState {
        db: Db::default(),
        public_base_url: public_base_url.trim_end_matches('/').into(),
    };
    Router::new()
        .route("/shorten", post(shorten_url))
        .route("/qr", get(generate_qr))
        .route("/{code}", get(redirect_url))
        .with_state(state)
}

pub async fn run(listener: TcpListener, public_base_url: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(public_base_url)).await
}

fn is_web_url(candidate: &str) -> bool {
    (candidate.starts_with("http://") || candidate.starts_with("https://"))
        && url::Url::parse(candidate).is_ok()
}

fn generate_code() -> String {
    nanoid::nanoid!(CODE_LEN, &CODE_ALPHABET)
}

async fn shorten_url(
    State(state): State<AppState>,
    Json(input): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    if !is_web_url(&input.long_url) {
        tracing::debug!(long_url = %input.long_url, "rejected url");
        return Err(AppError::InvalidUrl);
    }

    let mut links = state.db.write().await;
    let code = match links.by_url.get(&input.long_url) {
        Some(existing) => existing.clone(),
        None => {
            let mut code = generate_code();
            while links.by_code.contains_key(&code) {
                code = generate_code();
            }
            links.by_code.insert(code.clone(), input.long_url.clone());
            links.by_url.insert(input.long_url.clone(), code.clone());
            tracing::info!(%code, long_url = %input.long_url, "created short link");
            code
        }
    };

    Ok(Json(ShortenResponse {
        short_url: format!("{}/{code}", state.public_base_url),
    }))
}

async fn redirect_url(State(state): State<AppState>, Path(code): Path<String>) -> Result<Redirect, AppError> {
    let links = state.db.read().await;
    links
        .by_code
        .get(&code)
        .map(|long_url| Redirect::permanent(long_url))
        .ok_or(AppError::NotFound)
}

async fn generate_qr(Query(query): Query<QrQuery>) -> Result<Json<String>, AppError> {
    qr_data_uri(&query.url).map(Json)
}

/// Render `text` as an SVG QR code wrapped in a base64 `data:` URI.
pub fn qr_data_uri(text: &str) -> Result<String, AppError> {
    if text.is_empty() {
        return Err(AppError::QrGeneration);
    }
    let code = QrCode::new(text.as_bytes()).map_err(|e| {
        tracing::warn!(error = %e, "QR encoding failed");
        AppError::QrGeneration
    })?;
    let image = code.render::<svg::Color>().min_dimensions(200, 200).build();
    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(image)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_request_rejects_missing_field() {
        let result: Result<ShortenRequest, _> = serde_json::from_str(r#"{"url":"https://a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse {
            error: AppError::InvalidUrl.to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"error": "URL must start with http:// or https://"}));
    }

    #[test]
    fn web_urls_only() {
        assert!(is_web_url("http://example.com"));
        assert!(is_web_url("https://example.com/a?b=c"));
        assert!(!is_web_url("ftp://example.com"));
        assert!(!is_web_url("example.com"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("https://"));
    }

    #[test]
    fn codes_are_six_alphanumerics() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.chars().count(), CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn qr_is_a_base64_svg() {
        let uri = qr_data_uri("https://example.com").unwrap();
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn qr_rejects_empty_text() {
        assert!(matches!(qr_data_uri(""), Err(AppError::QrGeneration)));
    }
}
