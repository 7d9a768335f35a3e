pub mod api;
pub mod state;

use crate::error::{Result, ServeError};
use crate::store::AudioStore;
use api::create_router;
use axum::Router;
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tagalog_speech::TTSProvider;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where generated audio files are written
    pub audio_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            audio_dir: std::env::temp_dir(),
        }
    }
}

/// Router with every endpoint, without middleware.
pub fn router(provider: Arc<dyn TTSProvider>, store: AudioStore) -> Router {
    create_router(Arc::new(AppState::new(provider, store)))
}

/// Start the HTTP server around an already loaded provider
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tagalog_serve::{serve, ServerConfig};
/// use tagalog_speech::providers::tone::ToneTTS;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     serve(ServerConfig::default(), Arc::new(ToneTTS::default())).await?;
///     Ok(())
/// }
/// ```
pub async fn serve(config: ServerConfig, provider: Arc<dyn TTSProvider>) -> Result<()> {
    log::info!("Initializing Tagalog TTS HTTP server");
    log::debug!("Server configuration: {:?}", config);

    tokio::fs::create_dir_all(&config.audio_dir).await?;
    log::info!("Audio files go to {}", config.audio_dir.display());

    let model = provider.get_current_model();
    log::info!(
        "Serving model '{}' via provider '{}'",
        model.id,
        provider.provider_name()
    );

    let app = router(provider, AudioStore::new(&config.audio_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    log::info!("Starting HTTP server on {}", addr);
    log::info!("Available endpoints:");
    log::info!("  - GET  http://{}/", addr);
    log::info!("  - GET  http://{}/health", addr);
    log::info!("  - POST http://{}/generate_tts", addr);
    log::info!("  - GET  http://{}/audio/{{filename}}", addr);
    log::info!("  - GET  http://{}/cleanup/{{filename}}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        log::error!("Failed to bind to {}: {}", addr, e);
        ServeError::Bind {
            addr: addr.clone(),
            source: e,
        }
    })?;

    log::info!("Server started successfully!");

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        return Err(ServeError::Server(e.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.audio_dir, std::env::temp_dir());
    }
}
