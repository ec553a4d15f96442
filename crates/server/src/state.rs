//! Shared application state.
//!
//! Everything in here is loaded once at startup and read-only afterwards,
//! so the state is plain `Arc`s with no locking. Nothing is ever reloaded
//! per request.

use std::sync::Arc;

use catalog::Catalog;
use encodings::EncodingTables;
use predictor::Predictor;

use crate::service::RecommendationService;

/// Process-wide read-only state shared across all requests.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        encodings: Arc<EncodingTables>,
        predictor: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            service: Arc::new(RecommendationService::new(catalog, encodings, predictor)),
        }
    }
}
