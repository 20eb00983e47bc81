mod config;
mod routes;

use leptos::config::get_configuration;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "conceptday failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let host = HostConfig::from_env()?;
    let mut leptos_options = get_configuration(None)
        .map_err(|e| HostError::Leptos(e.to_string()))?
        .leptos_options;
    leptos_options.site_addr = host.site_addr(leptos_options.site_addr);
    if let Some(root) = &host.site_root {
        leptos_options.site_root = root.to_string_lossy().as_ref().into();
    }

    let addr = leptos_options.site_addr;
    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "conceptday listening");
    axum::serve(listener, app).await?;
    Ok(())
}
