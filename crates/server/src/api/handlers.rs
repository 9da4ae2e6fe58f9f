//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::media::MediaMocks;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use searchlab_core::config;
use searchlab_core::document::Document;
use searchlab_core::engine::SearchEngine;
use searchlab_core::store::StrategyEngine;
use searchlab_core::strategy::Strategy;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    pub engine: StrategyEngine,
    pub media: MediaMocks,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

fn parse_strategy(name: &str) -> Result<Strategy, ApiError> {
    name.parse::<Strategy>().map_err(ApiError::from)
}

fn validate_document(index: usize, doc: &DocumentBody) -> Result<(), ApiError> {
    if doc.id.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Document {}: id must not be empty",
            index
        )));
    }
    if doc.content.len() > config::MAX_CONTENT_LEN {
        return Err(ApiError::BadRequest(format!(
            "Document {}: content exceeds maximum length of {} bytes",
            index,
            config::MAX_CONTENT_LEN
        )));
    }
    Ok(())
}

/// Milliseconds elapsed since `start`, rounded to 2 decimals for the wire.
fn elapsed_ms(start: Instant) -> f64 {
    (start.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        document_count: state.engine.document_count(),
        default_strategy: state.engine.default_strategy().to_string(),
    })
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// `POST /api/search/:strategy`
pub async fn search(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponseBody>, ApiError> {
    let strategy = parse_strategy(&strategy)?;
    let start = Instant::now();
    let response = state.engine.search_with(strategy, &req.query, req.top_k)?;
    let latency = elapsed_ms(start);

    metrics::record_search_operation(strategy.as_str(), "text");
    tracing::info!(
        strategy = %strategy,
        query = %req.query,
        results = response.results.len(),
        "Search completed"
    );
    Ok(Json(SearchResponseBody::from_core(
        response,
        strategy.as_str(),
        latency,
    )))
}

/// `POST /api/search/all`
pub async fn search_all(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchAllResponseBody>, ApiError> {
    let start = Instant::now();
    let comparison = state.engine.search_all(&req.query, req.top_k)?;
    let latency = elapsed_ms(start);

    for strategy in Strategy::ALL {
        metrics::record_search_operation(strategy.as_str(), "text");
    }
    tracing::info!(query = %req.query, "Comparison search completed");
    Ok(Json(SearchAllResponseBody {
        keyword: SearchResponseBody::from_core(comparison.keyword, "keyword", latency),
        fuzzy: SearchResponseBody::from_core(comparison.fuzzy, "fuzzy", latency),
        semantic: SearchResponseBody::from_core(comparison.semantic, "semantic", latency),
        total_latency_ms: latency,
    }))
}

/// Pulls the named field out of a multipart upload.
async fn read_upload_field(multipart: &mut Multipart, name: &str) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart upload: {}", e)))?
    {
        if field.name() == Some(name) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(ApiError::BadRequest(format!(
        "Missing multipart field '{}'",
        name
    )))
}

/// `POST /api/search/:strategy/audio`
pub async fn search_audio(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<SearchResponseBody>, ApiError> {
    let strategy = parse_strategy(&strategy)?;
    let start = Instant::now();

    let audio = read_upload_field(&mut multipart, "audio").await?;
    let transcription = state.media.transcribe(&audio);

    let response = state
        .engine
        .search_with(strategy, &transcription, config::DEFAULT_TOP_K)?;
    let latency = elapsed_ms(start);

    metrics::record_search_operation(strategy.as_str(), "audio");
    tracing::info!(
        strategy = %strategy,
        transcription = %transcription,
        "Audio search completed"
    );
    let mut body = SearchResponseBody::from_core(response, strategy.as_str(), latency);
    body.transcription = Some(transcription);
    Ok(Json(body))
}

/// `POST /api/search/:strategy/image`
pub async fn search_image(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<SearchResponseBody>, ApiError> {
    let strategy = parse_strategy(&strategy)?;
    let start = Instant::now();

    let image = read_upload_field(&mut multipart, "image").await?;
    let features = state.media.detect_features(&image);
    let query = features.join(" ");

    let response = state
        .engine
        .search_with(strategy, &query, config::DEFAULT_TOP_K)?;
    let latency = elapsed_ms(start);

    metrics::record_search_operation(strategy.as_str(), "image");
    tracing::info!(
        strategy = %strategy,
        features = ?features,
        "Image search completed"
    );
    let mut body = SearchResponseBody::from_core(response, strategy.as_str(), latency);
    body.detected_features = Some(features);
    Ok(Json(body))
}

/// `POST /api/documents`
pub async fn index_documents(
    State(state): State<AppState>,
    Json(req): Json<IndexRequest>,
) -> Result<Json<IndexResponse>, ApiError> {
    if req.documents.is_empty() {
        return Err(ApiError::BadRequest("Batch must not be empty".into()));
    }
    if req.documents.len() > config::MAX_BATCH_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Batch size exceeds maximum of {}",
            config::MAX_BATCH_SIZE
        )));
    }

    let mut docs = Vec::with_capacity(req.documents.len());
    for (i, body) in req.documents.into_iter().enumerate() {
        validate_document(i, &body)?;
        docs.push(Document::with_metadata(
            body.id,
            body.content,
            json_to_metadata(body.metadata),
        ));
    }

    let indexed = docs.len();
    state.engine.index(docs);
    metrics::record_write_operation("index");
    tracing::info!(count = indexed, "Documents indexed");
    Ok(Json(IndexResponse { indexed }))
}

/// `DELETE /api/documents`
pub async fn delete_documents(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.engine.delete(&req.ids);
    metrics::record_write_operation("delete");
    tracing::info!(requested = req.ids.len(), deleted, "Documents deleted");
    Ok(Json(DeleteResponse { deleted }))
}

/// `POST /api/documents/clear`
pub async fn clear_documents(State(state): State<AppState>) -> Json<MessageResponse> {
    state.engine.clear();
    metrics::record_write_operation("clear");
    tracing::info!("Store cleared");
    Json(MessageResponse {
        message: "All documents cleared".to_string(),
    })
}

/// `GET /api/documents/count`
pub async fn document_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.engine.document_count(),
    })
}
