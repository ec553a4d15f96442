//! Core domain types for the movie catalog.
//!
//! The catalog mirrors the two flat MovieLens-style tables the front-end
//! serves from: the movie table (id, title, genre string) and the ratings
//! table, reduced at load time to per-movie statistics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a user as it appears in the ratings table.
pub type UserId = u32;

/// Unique identifier for a movie as it appears in both tables.
pub type MovieId = u32;

/// A row of the movie table.
///
/// Genres are kept as the raw pipe-delimited string from the data file
/// (e.g. "Animation|Children's|Comedy"): the request handler filters on it
/// as a substring, and the genre encoder has its own token vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: String,
}

/// A row of the ratings table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value from 1.0 to 5.0
    pub rating: f32,
    /// Unix timestamp when the rating was made
    pub timestamp: i64,
}

/// Per-movie statistics derived from the ratings table at load time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovieStats {
    /// Mean of all recorded ratings for the movie (the "historical score").
    pub avg_rating: f32,
    pub rating_count: u32,
}

/// In-memory movie catalog: the movie table plus derived rating statistics.
///
/// Built once at startup and treated as immutable afterwards; the server
/// shares it across requests behind an `Arc` without locking.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) stats: HashMap<MovieId, MovieStats>,
}

impl Catalog {
    /// Creates an empty catalog. Mostly useful for tests; production code
    /// goes through [`Catalog::load_from_files`].
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            stats: HashMap::new(),
        }
    }

    /// All movies, in file order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Statistics for a movie, if it has any ratings.
    pub fn stats(&self, movie_id: MovieId) -> Option<&MovieStats> {
        self.stats.get(&movie_id)
    }

    /// Mean historical rating for a movie. `None` if the movie has no
    /// ratings; callers that need the original table semantics substitute
    /// 0.0.
    pub fn mean_rating(&self, movie_id: MovieId) -> Option<f32> {
        self.stats.get(&movie_id).map(|s| s.avg_rating)
    }

    /// Movies whose genre string contains `pattern` case-insensitively.
    ///
    /// This is a substring match on the raw pipe-delimited genre string,
    /// not a token match: the pattern "Com" matches "Comedy" and
    /// "Action|Comedy" alike. An empty pattern matches every movie.
    pub fn filter_by_genre(&self, pattern: &str) -> Vec<&Movie> {
        if pattern.is_empty() {
            return self.movies.iter().collect();
        }
        let needle = pattern.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.genres.to_lowercase().contains(&needle))
            .collect()
    }

    /// (movie count, rated-movie count) for logging and validation.
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.stats.len())
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Insert a movie row. Used by the loader and by test fixtures.
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str, genres: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genres: genres.to_string(),
        }
    }

    #[test]
    fn test_filter_by_genre_is_case_insensitive_substring() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, "Toy Story (1995)", "Animation|Children's|Comedy"));
        catalog.insert_movie(movie(2, "Heat (1995)", "Action|Crime|Thriller"));
        catalog.insert_movie(movie(3, "Sabrina (1995)", "Comedy|Romance"));

        let hits = catalog.filter_by_genre("comedy");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|m| m.genres.to_lowercase().contains("comedy")));

        // Substring, not token: "rime" hits "Crime"
        let hits = catalog.filter_by_genre("RIME");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_filter_by_genre_empty_pattern_matches_all() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, "A", "Drama"));
        catalog.insert_movie(movie(2, "B", "Horror"));

        assert_eq!(catalog.filter_by_genre("").len(), 2);
    }

    #[test]
    fn test_mean_rating_absent_for_unrated_movie() {
        let catalog = Catalog::new();
        assert!(catalog.mean_rating(42).is_none());
    }
}
