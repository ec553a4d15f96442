//! Server crate for the genre-filtered recommendation front-end.
//!
//! Wires the catalog, the encoding tables, and the predictor into an axum
//! application. The heart of the crate is [`service::RecommendationService`],
//! which runs the per-request scoring flow.

pub mod render;
pub mod routes;
pub mod service;
pub mod state;

pub use routes::create_router;
pub use service::{RecommendOutcome, RecommendationResult, RecommendationService, WARNING_PREFIX};
pub use state::AppState;
