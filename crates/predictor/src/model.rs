//! The hybrid model artifact and its scoring function.
//!
//! The model is opaque at this boundary: the front-end only needs a
//! function from (user index, movie index, genre vector) to a predicted
//! rating in [0, 1]. `HybridModel` implements that function over latent
//! factor tables exported from the training pipeline.

use crate::error::{PredictorError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Opaque scoring function over dense indices.
///
/// Implementations must return a value in [0, 1]; the request handler
/// scales it to the 0-5 display range. `Send + Sync` so one instance can be
/// shared across requests behind an `Arc`.
pub trait Predictor: Send + Sync {
    /// Predicted rating in [0, 1] for a (user, movie, genre filter) triple.
    fn predict(&self, user_index: u32, movie_index: u32, genre_vector: &[f32]) -> Result<f32>;

    /// Width of the genre vector this predictor expects.
    fn genre_width(&self) -> usize;
}

/// Hybrid collaborative/content model: latent factors per user and movie,
/// bias terms, and a linear weight per genre column.
///
/// score = sigmoid(user · movie + user_bias + movie_bias
///                 + genre_vector · genre_weights + global_bias)
#[derive(Debug, Deserialize)]
pub struct HybridModel {
    user_factors: Vec<Vec<f32>>,
    movie_factors: Vec<Vec<f32>>,
    user_bias: Vec<f32>,
    movie_bias: Vec<f32>,
    genre_weights: Vec<f32>,
    global_bias: f32,
}

impl HybridModel {
    /// Load the artifact from a JSON file and validate its shape.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let model: HybridModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;

        info!(
            "Loaded hybrid model: {} users, {} movies, {} latent dims, {} genre columns",
            model.user_factors.len(),
            model.movie_factors.len(),
            model.latent_dim(),
            model.genre_weights.len()
        );
        Ok(model)
    }

    /// Build a model from in-memory tables, validating the shape. Used by
    /// artifact tooling and test fixtures.
    pub fn from_parts(
        user_factors: Vec<Vec<f32>>,
        movie_factors: Vec<Vec<f32>>,
        user_bias: Vec<f32>,
        movie_bias: Vec<f32>,
        genre_weights: Vec<f32>,
        global_bias: f32,
    ) -> Result<Self> {
        let model = Self {
            user_factors,
            movie_factors,
            user_bias,
            movie_bias,
            genre_weights,
            global_bias,
        };
        model.validate()?;
        Ok(model)
    }

    fn latent_dim(&self) -> usize {
        self.user_factors.first().map(|f| f.len()).unwrap_or(0)
    }

    /// Shape invariants: non-empty factor tables, one latent dim across
    /// all rows of both tables, bias length matching each table.
    fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(PredictorError::InvalidArtifact(msg));

        if self.user_factors.is_empty() || self.movie_factors.is_empty() {
            return invalid("empty factor table".to_string());
        }

        let dim = self.latent_dim();
        if dim == 0 {
            return invalid("zero latent dimension".to_string());
        }
        for (name, table) in [
            ("user_factors", &self.user_factors),
            ("movie_factors", &self.movie_factors),
        ] {
            if let Some(row) = table.iter().find(|row| row.len() != dim) {
                return invalid(format!(
                    "{} row has dimension {}, expected {}",
                    name,
                    row.len(),
                    dim
                ));
            }
        }

        if self.user_bias.len() != self.user_factors.len() {
            return invalid(format!(
                "user_bias length {} does not match {} users",
                self.user_bias.len(),
                self.user_factors.len()
            ));
        }
        if self.movie_bias.len() != self.movie_factors.len() {
            return invalid(format!(
                "movie_bias length {} does not match {} movies",
                self.movie_bias.len(),
                self.movie_factors.len()
            ));
        }
        Ok(())
    }
}

impl Predictor for HybridModel {
    fn predict(&self, user_index: u32, movie_index: u32, genre_vector: &[f32]) -> Result<f32> {
        let user = self.user_factors.get(user_index as usize).ok_or_else(|| {
            PredictorError::IndexOutOfRange {
                kind: "user",
                index: user_index,
                len: self.user_factors.len(),
            }
        })?;
        let movie = self.movie_factors.get(movie_index as usize).ok_or_else(|| {
            PredictorError::IndexOutOfRange {
                kind: "movie",
                index: movie_index,
                len: self.movie_factors.len(),
            }
        })?;

        if genre_vector.len() != self.genre_weights.len() {
            return Err(PredictorError::GenreWidthMismatch {
                got: genre_vector.len(),
                expected: self.genre_weights.len(),
            });
        }

        let interaction: f32 = user.iter().zip(movie).map(|(u, m)| u * m).sum();
        let genre_term: f32 = genre_vector
            .iter()
            .zip(&self.genre_weights)
            .map(|(g, w)| g * w)
            .sum();

        let logit = interaction
            + self.user_bias[user_index as usize]
            + self.movie_bias[movie_index as usize]
            + genre_term
            + self.global_bias;

        Ok(sigmoid(logit))
    }

    fn genre_width(&self) -> usize {
        self.genre_weights.len()
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
