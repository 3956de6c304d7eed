use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Shorten URLs typed on stdin, one per line.
#[derive(Debug, Clone, Parser)]
#[command(name = "shorten", version)]
pub struct Args {
    /// Base URL of the shortening service.
    #[arg(long, env = "SHORTEN_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Give up on a request after this many seconds.
    #[arg(long, env = "SHORTEN_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Write each fetched QR code image to this path.
    #[arg(long, value_name = "PATH")]
    pub save_qr: Option<PathBuf>,

    /// Do not request QR codes.
    #[arg(long)]
    pub no_qr: bool,
}

impl Args {
    /// Parse the command line after loading `.env`, so its values act as
    /// environment fallbacks.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
