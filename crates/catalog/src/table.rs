//! Catalog construction: parse both tables and derive per-movie statistics.

use crate::error::Result;
use crate::parser;
use crate::types::{Catalog, Movie, MovieId, MovieStats, Rating};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the catalog from a data directory containing `movies.dat` and
    /// `ratings.dat`.
    ///
    /// This runs once at process start; any error here is fatal to the
    /// caller. The two files parse in parallel.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let movies_path = data_dir.join("movies.dat");
        let ratings_path = data_dir.join("ratings.dat");

        let (movies, ratings) = rayon::join(
            || parser::parse_movies(&movies_path),
            || parser::parse_ratings(&ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;

        info!(
            "Loaded {} movies and {} ratings from {:?}",
            movies.len(),
            ratings.len(),
            data_dir
        );

        Ok(Self::build(movies, &ratings))
    }

    /// Build a catalog from already-parsed rows.
    ///
    /// Group the ratings by movie, then reduce each group to its mean and
    /// count in parallel. Ratings for movies absent from the movie table are
    /// kept in the stats map; they are harmless, the movie list drives every
    /// query.
    pub fn build(movies: Vec<Movie>, ratings: &[Rating]) -> Self {
        let mut grouped: HashMap<MovieId, Vec<f32>> = HashMap::new();
        for rating in ratings {
            grouped
                .entry(rating.movie_id)
                .or_default()
                .push(rating.rating);
        }

        let stats: HashMap<MovieId, MovieStats> = grouped
            .par_iter()
            .map(|(&movie_id, values)| {
                let count = values.len() as u32;
                let avg = values.iter().sum::<f32>() / count as f32;
                (
                    movie_id,
                    MovieStats {
                        avg_rating: avg,
                        rating_count: count,
                    },
                )
            })
            .collect();

        Self { movies, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: u32, movie_id: MovieId, value: f32) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating: value,
            timestamp: 978300760,
        }
    }

    #[test]
    fn test_build_computes_mean_per_movie() {
        let movies = vec![
            Movie {
                id: 1,
                title: "Toy Story (1995)".to_string(),
                genres: "Animation|Children's|Comedy".to_string(),
            },
            Movie {
                id: 2,
                title: "Jumanji (1995)".to_string(),
                genres: "Adventure|Children's|Fantasy".to_string(),
            },
        ];
        let ratings = vec![
            rating(1, 1, 5.0),
            rating(2, 1, 3.0),
            rating(3, 1, 4.0),
            rating(1, 2, 2.0),
        ];

        let catalog = Catalog::build(movies, &ratings);

        assert_eq!(catalog.mean_rating(1), Some(4.0));
        assert_eq!(catalog.mean_rating(2), Some(2.0));
        assert_eq!(catalog.stats(1).unwrap().rating_count, 3);
    }

    #[test]
    fn test_build_leaves_unrated_movies_without_stats() {
        let movies = vec![Movie {
            id: 7,
            title: "Unseen (1999)".to_string(),
            genres: "Horror".to_string(),
        }];

        let catalog = Catalog::build(movies, &[]);

        assert!(catalog.mean_rating(7).is_none());
        assert_eq!(catalog.counts(), (1, 0));
    }

    #[test]
    fn test_load_from_files_missing_directory_is_an_error() {
        let result = Catalog::load_from_files(Path::new("/definitely/not/here"));
        assert!(result.is_err());
    }
}
