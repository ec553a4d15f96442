//! The recommendation service: the per-request scoring flow.
//!
//! Per request:
//! 1. Select a user (explicit override, or uniformly at random from the
//!    known users)
//! 2. Filter the catalog by the genre text (case-insensitive substring)
//! 3. Encode the filter into the fixed-width genre vector
//! 4. Score every surviving movie with a known dense index
//! 5. Sort by (predicted rating desc, historical score desc)
//!
//! Any error anywhere in the flow abandons partial results and collapses
//! into a single human-readable failure message.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Catalog, Movie, MovieId, UserId};
use encodings::EncodingTables;
use predictor::Predictor;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, warn};

/// Prefix carried by every request-time failure message.
pub const WARNING_PREFIX: &str = "\u{26a0}\u{fe0f}";

/// One ranked entry of the response page.
///
/// Scores are carried as their 2-decimal display strings: the historical
/// mean on the original 0-5 scale, and the predicted rating scaled from the
/// model's [0, 1] output to 0-5.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
    pub score: String,
    pub pred_rating: String,
}

/// Outcome of one request: a ranked list, or a single collapsed failure
/// message with no partial results.
#[derive(Debug)]
pub enum RecommendOutcome {
    Ranked(Vec<RecommendationResult>),
    Failed(String),
}

impl RecommendOutcome {
    pub fn results(&self) -> &[RecommendationResult] {
        match self {
            RecommendOutcome::Ranked(results) => results,
            RecommendOutcome::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RecommendOutcome::Ranked(_) => None,
            RecommendOutcome::Failed(message) => Some(message),
        }
    }
}

/// Scores a filtered slice of the catalog against the trained model.
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    encodings: Arc<EncodingTables>,
    predictor: Arc<dyn Predictor>,
}

/// A scored movie before display formatting.
struct Scored<'a> {
    movie: &'a Movie,
    pred_rating: f32,
    score: f32,
}

/// Sort key at the displayed 2-decimal precision: predicted rating first,
/// historical score as tie-breaker, both descending.
fn sort_key(scored: &Scored<'_>) -> (i64, i64) {
    (
        (scored.pred_rating * 100.0).round() as i64,
        (scored.score * 100.0).round() as i64,
    )
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<Catalog>,
        encodings: Arc<EncodingTables>,
        predictor: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            catalog,
            encodings,
            predictor,
        }
    }

    /// Run the full flow, collapsing every failure kind into one prefixed
    /// message. This is the only entry point the HTTP layer calls.
    pub fn recommend(&self, genres_input: &str, user_override: Option<UserId>) -> RecommendOutcome {
        match self.try_recommend(genres_input.trim(), user_override) {
            Ok(results) => RecommendOutcome::Ranked(results),
            Err(e) => {
                warn!("Recommendation request failed: {e:#}");
                RecommendOutcome::Failed(format!("{WARNING_PREFIX} Something went wrong: {e}"))
            }
        }
    }

    fn try_recommend(
        &self,
        genres_input: &str,
        user_override: Option<UserId>,
    ) -> Result<Vec<RecommendationResult>> {
        let user_id = match user_override {
            Some(id) => id,
            None => self.pick_random_user()?,
        };
        let user_index = self
            .encodings
            .user_index(user_id)
            .with_context(|| format!("User {user_id} missing from the encoding table"))?;

        let candidates = self.catalog.filter_by_genre(genres_input);
        debug!(
            "User {} (index {}): {} candidates for filter {:?}",
            user_id,
            user_index,
            candidates.len(),
            genres_input
        );

        let genre_vector = if genres_input.is_empty() {
            self.encodings.genre_encoder().zero_vector()
        } else {
            let tokens: Vec<&str> = genres_input.split('|').collect();
            self.encodings.genre_encoder().transform(&tokens)
        };

        let mut scored = Vec::with_capacity(candidates.len());
        for movie in candidates {
            // Movies the model was never trained on have no dense index;
            // they are silently skipped, never scored.
            let Some(movie_index) = self.encodings.movie_index(movie.id) else {
                continue;
            };

            let prediction = self
                .predictor
                .predict(user_index, movie_index, &genre_vector)
                .with_context(|| format!("Scoring movie {} failed", movie.id))?;

            scored.push(Scored {
                movie,
                pred_rating: prediction * 5.0,
                score: self.catalog.mean_rating(movie.id).unwrap_or(0.0),
            });
        }

        scored.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));

        Ok(scored
            .into_iter()
            .map(|s| RecommendationResult {
                movie_id: s.movie.id,
                title: s.movie.title.clone(),
                genres: s.movie.genres.clone(),
                score: format!("{:.2}", s.score),
                pred_rating: format!("{:.2}", s.pred_rating),
            })
            .collect())
    }

    /// Pick a user uniformly at random from the encoding table. The table
    /// is validated non-empty at load, so this only fails on a bundle that
    /// bypassed validation.
    fn pick_random_user(&self) -> Result<UserId> {
        self.encodings
            .known_users()
            .choose(&mut rand::thread_rng())
            .copied()
            .context("No known users to pick from")
    }
}
