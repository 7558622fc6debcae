use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{ApiAnalyzeRequest, ApiAnalyzeResponse, ApiTextsRequest};
use mood_engine::{BatchItem, EngineConfig, MoodEngine, Statistics};

#[derive(Clone)]
struct AppState {
    engine: Arc<MoodEngine>,
}

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let state = AppState {
        engine: Arc::new(MoodEngine::new(config)),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/batch", post(batch_handler))
        .route("/api/stats", post(stats_handler))
        .route("/api/cache", delete(clear_cache_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    info!(%addr, "mood server listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, (StatusCode, String)> {
    let config = state.engine.config();
    let (text, sensitivity) = request
        .into_parts(config.sensitivity.level)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let threshold = config.sensitivity.threshold(sensitivity);
    let result = state.engine.analyze(&text);
    Ok(Json(ApiAnalyzeResponse::new(result, sensitivity, threshold)))
}

async fn batch_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiTextsRequest>,
) -> Json<Vec<BatchItem>> {
    Json(state.engine.analyze_batch(&request.texts))
}

async fn stats_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiTextsRequest>,
) -> Json<Statistics> {
    Json(state.engine.get_statistics(&request.texts))
}

async fn clear_cache_handler(State(state): State<AppState>) -> StatusCode {
    state.engine.clear_cache();
    StatusCode::NO_CONTENT
}
