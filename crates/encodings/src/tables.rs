//! The encoding tables bundle.
//!
//! Bidirectional mappings between raw user/movie identifiers and the dense
//! integer indices the predictor expects, plus the genre encoder. The
//! bundle is exported as JSON alongside the trained model artifact and
//! loaded once at startup.

use crate::error::{EncodingError, Result};
use crate::genre::GenreEncoder;
use catalog::{MovieId, UserId};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// On-disk shape of the encodings bundle.
#[derive(Debug, Deserialize)]
struct EncodingsFile {
    user_index: HashMap<UserId, u32>,
    movie_index: HashMap<MovieId, u32>,
    genre_classes: Vec<String>,
}

/// Encoding tables, fixed after load.
///
/// `user_index` is allowed to be many-to-one; `movie_index` must be
/// invertible (the inverse map is built and checked at load time).
#[derive(Debug)]
pub struct EncodingTables {
    user_index: HashMap<UserId, u32>,
    movie_index: HashMap<MovieId, u32>,
    index_movie: HashMap<u32, MovieId>,
    genres: GenreEncoder,
    /// Raw ids of all known users, sorted for deterministic iteration.
    known_users: Vec<UserId>,
}

impl EncodingTables {
    /// Assemble tables from their parts, validating the invariants the
    /// request handler relies on.
    pub fn new(
        user_index: HashMap<UserId, u32>,
        movie_index: HashMap<MovieId, u32>,
        genres: GenreEncoder,
    ) -> Result<Self> {
        if user_index.is_empty() {
            return Err(EncodingError::EmptyUserTable);
        }

        let mut index_movie = HashMap::with_capacity(movie_index.len());
        for (&movie_id, &index) in &movie_index {
            if index_movie.insert(index, movie_id).is_some() {
                return Err(EncodingError::DuplicateMovieIndex { index });
            }
        }

        let mut known_users: Vec<UserId> = user_index.keys().copied().collect();
        known_users.sort_unstable();

        Ok(Self {
            user_index,
            movie_index,
            index_movie,
            genres,
            known_users,
        })
    }

    /// Load the bundle from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let parsed: EncodingsFile = serde_json::from_reader(BufReader::new(file))?;

        let tables = Self::new(
            parsed.user_index,
            parsed.movie_index,
            GenreEncoder::new(parsed.genre_classes),
        )?;

        info!(
            "Loaded encodings: {} users, {} movies, {} genre classes",
            tables.known_users.len(),
            tables.movie_index.len(),
            tables.genres.width()
        );
        Ok(tables)
    }

    /// Dense index for a raw user id.
    pub fn user_index(&self, user_id: UserId) -> Option<u32> {
        self.user_index.get(&user_id).copied()
    }

    /// Dense index for a raw movie id. Movies absent here are skipped by
    /// the request handler, never scored.
    pub fn movie_index(&self, movie_id: MovieId) -> Option<u32> {
        self.movie_index.get(&movie_id).copied()
    }

    /// Raw movie id for a dense index.
    pub fn movie_for_index(&self, index: u32) -> Option<MovieId> {
        self.index_movie.get(&index).copied()
    }

    /// All known raw user ids, sorted. Never empty.
    pub fn known_users(&self) -> &[UserId] {
        &self.known_users
    }

    pub fn genre_encoder(&self) -> &GenreEncoder {
        &self.genres
    }
}
