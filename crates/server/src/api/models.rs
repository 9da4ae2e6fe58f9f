//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via
//! Axum. Core `MetadataValue` maps convert to/from untagged JSON here, at the
//! HTTP boundary.

use searchlab_core::config;
use searchlab_core::document::MetadataValue;
use searchlab_core::search::SearchResponse;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Convert JSON metadata (from API requests) to core MetadataValue.
pub fn json_to_metadata(map: HashMap<String, serde_json::Value>) -> HashMap<String, MetadataValue> {
    map.into_iter()
        .filter_map(|(k, v)| {
            let mv = match v {
                serde_json::Value::Bool(b) => MetadataValue::Boolean(b),
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        MetadataValue::Integer(i)
                    } else {
                        MetadataValue::Float(n.as_f64().unwrap_or(0.0))
                    }
                }
                serde_json::Value::String(s) => MetadataValue::String(s),
                _ => return None,
            };
            Some((k, mv))
        })
        .collect()
}

/// Convert core MetadataValue to JSON (for API responses).
pub fn metadata_to_json(
    map: &HashMap<String, MetadataValue>,
) -> HashMap<String, serde_json::Value> {
    map.iter()
        .map(|(k, v)| {
            let jv = match v {
                MetadataValue::Boolean(b) => serde_json::Value::Bool(*b),
                MetadataValue::Integer(i) => serde_json::json!(*i),
                MetadataValue::Float(f) => serde_json::json!(*f),
                MetadataValue::String(s) => serde_json::Value::String(s.clone()),
            };
            (k.clone(), jv)
        })
        .collect()
}

/// Request body for `POST /api/search/:strategy` and `/api/search/all`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    config::DEFAULT_TOP_K
}

/// A single ranked result on the wire.
#[derive(Debug, Serialize)]
pub struct ResultBody {
    pub doc_id: String,
    pub score: f32,
    pub content: String,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Response body for single-strategy search routes.
#[derive(Debug, Serialize)]
pub struct SearchResponseBody {
    pub results: Vec<ResultBody>,
    pub method: String,
    pub query: String,
    pub total_hits: usize,
    pub latency_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_features: Option<Vec<String>>,
}

impl SearchResponseBody {
    /// Flattens a core response into the wire shape, hoisting the rewritten
    /// query out of the response metadata.
    pub fn from_core(response: SearchResponse, method: &str, latency_ms: f64) -> Self {
        let rewritten_query = response.rewritten_query().map(|s| s.to_string());
        Self {
            results: response
                .results
                .into_iter()
                .map(|r| ResultBody {
                    doc_id: r.doc_id,
                    score: r.score,
                    content: r.content,
                    metadata: metadata_to_json(&r.metadata),
                })
                .collect(),
            method: method.to_string(),
            query: response.query,
            total_hits: response.total_hits,
            latency_ms,
            transcription: None,
            rewritten_query,
            detected_features: None,
        }
    }
}

/// Response body for `POST /api/search/all`.
#[derive(Debug, Serialize)]
pub struct SearchAllResponseBody {
    pub keyword: SearchResponseBody,
    pub fuzzy: SearchResponseBody,
    pub semantic: SearchResponseBody,
    pub total_latency_ms: f64,
}

/// One document in an index request.
#[derive(Debug, Deserialize)]
pub struct DocumentBody {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Request body for `POST /api/documents`.
#[derive(Debug, Deserialize)]
pub struct IndexRequest {
    pub documents: Vec<DocumentBody>,
}

/// Response body for `POST /api/documents`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub indexed: usize,
}

/// Request body for `DELETE /api/documents`.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<String>,
}

/// Response body for `DELETE /api/documents`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: usize,
}

/// Response body for `GET /api/documents/count`.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

/// Generic success message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub document_count: usize,
    pub default_strategy: String,
}
