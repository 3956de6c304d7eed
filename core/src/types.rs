//! Wire DTOs for the shortening API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Success body of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// Error body of any endpoint. The field is optional because servers and
/// proxies in between do not always send it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Query of `GET /qr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrRequest {
    pub url: String,
}

/// Image reference returned by `GET /qr`, usable directly as an image source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrImage(pub String);

impl QrImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a base64 `data:` URI into its media type and decoded bytes.
    pub fn decode(&self) -> Result<(String, Vec<u8>), ApiError> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| ApiError::Deserialization("QR image is not a data URI".to_string()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| ApiError::Deserialization("data URI has no payload".to_string()))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| ApiError::Deserialization("data URI is not base64 encoded".to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok((mime.to_string(), bytes))
    }

    /// File extension matching the image's media type, if known.
    pub fn extension(&self) -> Option<&'static str> {
        let mime = self.0.strip_prefix("data:")?.split([';', ',']).next()?;
        match mime {
            "image/png" => Some("png"),
            "image/svg+xml" => Some("svg"),
            "image/jpeg" => Some("jpg"),
            "image/gif" => Some("gif"),
            _ => None,
        }
    }
}
