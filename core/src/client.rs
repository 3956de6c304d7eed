//! Stateless HTTP request builder and response parser for the shortening API.
//!
//! # Design
//! `ShortenClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, QrImage, QrRequest, ShortenRequest, ShortenResponse};

#[derive(Debug, Clone)]
pub struct ShortenClient {
    base_url: String,
}

impl ShortenClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_shorten(&self, long_url: &str) -> Result<HttpRequest, ApiError> {
        let input = ShortenRequest {
            long_url: long_url.to_string(),
        };
        let body = serde_json::to_string(&input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/shorten", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_qr(&self, url: &str) -> HttpRequest {
        let query = QrRequest { url: url.to_string() };
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/qr?url={}", self.base_url, urlencoding::encode(&query.url)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_shorten(&self, response: HttpResponse) -> Result<ShortenResponse, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_qr(&self, response: HttpResponse) -> Result<QrImage, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }
}

/// Map non-2xx responses to `ApiError::Http`, keeping the server's `error`
/// message when the body carries one.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.error)
        .filter(|msg| !msg.is_empty());
    Err(ApiError::Http {
        status: response.status,
        message,
    })
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
