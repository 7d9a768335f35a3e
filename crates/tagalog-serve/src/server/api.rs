use super::state::AppState;
use axum::{
    Router,
    body::Body,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tagalog_speech::{ModelInfo, SpeechRate, synthesis};
use tokio_util::io::ReaderStream;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_rate: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub audio_file: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CleanupResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: ModelInfo,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/generate_tts", post(generate_tts))
        .route("/audio/{filename}", get(serve_audio))
        .route("/cleanup/{filename}", get(cleanup_audio))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    log::debug!("Health check endpoint called");
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.provider.get_current_model(),
    })
}

async fn generate_tts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        log::warn!("Rejected generate request: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("Please provide text input".to_string()));
    }

    let rate = payload
        .speech_rate
        .map(SpeechRate::new)
        .unwrap_or(SpeechRate::NORMAL);

    let start = Instant::now();
    log::info!("Generating speech at rate {} for: '{}'", rate, text);

    let output = synthesis::synthesize_to_file(
        state.provider.as_ref(),
        text,
        rate,
        state.store.dir(),
        &state.store.naming(),
    )
    .await
    .map_err(|e| {
        log::error!("Generation failed after {:.2}s: {}", start.elapsed().as_secs_f64(), e);
        if e.is_invalid_input() {
            AppError::BadRequest(e.to_string())
        } else {
            AppError::Internal(format!("Error generating audio: {e}"))
        }
    })?;

    let audio_file = output.file_name();
    log::info!(
        "Generated '{}' ({} ms) in {:.2}s",
        audio_file,
        output.audio.duration_ms(),
        start.elapsed().as_secs_f64()
    );

    Ok(Json(GenerateResponse {
        success: true,
        audio_file,
        message: format!("Generated audio for: \"{text}\""),
    }))
}

async fn serve_audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    match state.store.open(&filename).await {
        Ok(Some(file)) => {
            let body = Body::from_stream(ReaderStream::new(file));
            Ok(([(header::CONTENT_TYPE, "audio/wav")], body).into_response())
        }
        Ok(None) => {
            log::debug!("Audio file '{}' not found", filename);
            Err(AppError::NotFound("Audio file not found".to_string()))
        }
        Err(e) => {
            log::error!("Failed to read audio file '{}': {}", filename, e);
            Err(AppError::Internal(format!("Error serving audio: {e}")))
        }
    }
}

async fn cleanup_audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<CleanupResponse>, AppError> {
    match state.store.remove(&filename).await {
        Ok(true) => {
            log::info!("Cleaned up '{}'", filename);
            Ok(Json(CleanupResponse {
                success: true,
                message: "Audio file cleaned up".to_string(),
            }))
        }
        Ok(false) => Err(AppError::NotFound("Audio file not found".to_string())),
        Err(e) => {
            log::error!("Failed to delete audio file '{}': {}", filename, e);
            Err(AppError::Internal(format!("Error cleaning up file: {e}")))
        }
    }
}

// Error handling
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
