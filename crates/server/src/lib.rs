//! searchlab-server — HTTP comparison lab for searchlab.
//!
//! Exposes one search route per retrieval strategy plus an aggregate route,
//! with mock audio transcription and image feature detection at the upload
//! boundary. Engine logic lives in `searchlab-core`.

/// REST API layer: Axum router, HTTP handlers, models, metrics.
pub mod api;
/// Demo product corpus seeded at startup.
pub mod catalog;
/// Mock transcription and vision collaborators.
pub mod media;
