//! Multi-label genre encoder.
//!
//! Encodes a list of genre tokens into the fixed-width binary vector the
//! predictor expects, against a vocabulary fixed when the model was trained.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed-vocabulary multi-label encoder for genre tokens.
///
/// The vocabulary order matters: position `i` of every encoded vector
/// corresponds to `classes[i]`, and must match the column order the model
/// was trained with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreEncoder {
    classes: Vec<String>,
}

impl GenreEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Width of every encoded vector.
    pub fn width(&self) -> usize {
        self.classes.len()
    }

    /// The vocabulary, in encoding order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode a list of genre tokens into a fixed-width 0/1 vector.
    ///
    /// Tokens outside the vocabulary are ignored with a warning rather than
    /// rejected: the filter text is free-form user input, and a substring
    /// like "Com" should still produce a usable (zero) vector. Matching is
    /// exact on the vocabulary tokens.
    pub fn transform(&self, tokens: &[&str]) -> Vec<f32> {
        let mut vector = self.zero_vector();
        for token in tokens {
            match self.classes.iter().position(|c| c == token) {
                Some(pos) => vector[pos] = 1.0,
                None => warn!("Ignoring unknown genre token {:?}", token),
            }
        }
        vector
    }

    /// The all-zeros vector used when no genre filter is supplied.
    pub fn zero_vector(&self) -> Vec<f32> {
        vec![0.0; self.classes.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> GenreEncoder {
        GenreEncoder::new(vec![
            "Action".to_string(),
            "Comedy".to_string(),
            "Drama".to_string(),
        ])
    }

    #[test]
    fn test_transform_marks_known_tokens() {
        let vector = encoder().transform(&["Comedy", "Action"]);
        assert_eq!(vector, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_transform_ignores_unknown_tokens() {
        // Free-form filter text that is not an exact vocabulary token
        let vector = encoder().transform(&["Com", "Western"]);
        assert_eq!(vector, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_transform_is_case_sensitive_on_tokens() {
        let vector = encoder().transform(&["comedy"]);
        assert_eq!(vector, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_vector_has_vocabulary_width() {
        let enc = encoder();
        assert_eq!(enc.zero_vector().len(), enc.width());
        assert!(enc.zero_vector().iter().all(|&v| v == 0.0));
    }
}
