use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = mock_server::Config::from_env()?;
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, public_base_url = %config.public_base_url, "listening");
    mock_server::run(listener, &config.public_base_url).await?;
    Ok(())
}
