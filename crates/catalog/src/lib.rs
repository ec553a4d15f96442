//! # Catalog Crate
//!
//! Loads the two flat data tables the recommendation front-end serves from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, MovieStats, Catalog)
//! - **parser**: Parse the `::`-delimited .dat files into Rust structs
//! - **table**: Build the catalog and derive per-movie rating statistics
//! - **error**: Error types for table loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/ml-1m"))?;
//!
//! for movie in catalog.filter_by_genre("Comedy") {
//!     let score = catalog.mean_rating(movie.id).unwrap_or(0.0);
//!     println!("{} ({:.2})", movie.title, score);
//! }
//! ```

pub mod error;
pub mod parser;
pub mod table;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie, MovieId, MovieStats, Rating, UserId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.counts(), (0, 0));
        assert!(catalog.filter_by_genre("Drama").is_empty());
    }
}
