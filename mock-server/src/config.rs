use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT {raw:?}: {source}")]
    InvalidPort {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Server settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Prefix of every short URL handed out, without trailing slash.
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 3000,
        };
        let public_base_url = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| {
            let fallback = format!("http://127.0.0.1:{port}");
            tracing::warn!("PUBLIC_BASE_URL not set, using default: {fallback}");
            fallback
        });

        Ok(Self {
            port,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|source| ConfigError::InvalidPort {
        raw: raw.to_string(),
        source,
    })
}
