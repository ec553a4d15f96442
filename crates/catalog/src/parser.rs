//! Parser for the flat data tables.
//!
//! Two `::`-delimited files, both ISO-8859-1 encoded:
//! - movies.dat:  movieId::title::genres
//! - ratings.dat: userId::movieId::rating::timestamp
//!
//! Movie rows with missing or unparseable fields are dropped with a warning
//! (the catalog tolerates gaps in its metadata); malformed rating rows are
//! an error, since a bad ratings table would silently skew every historical
//! score computed from it.

use crate::error::{CatalogError, Result};
use crate::types::{Movie, Rating};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Read a file with ISO-8859-1 (Latin-1) encoding.
///
/// The MovieLens-style tables are not UTF-8. ISO-8859-1 is a single-byte
/// encoding where each byte maps directly to the same Unicode code point.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();
    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse one movie row. Returns `None` when the row is incomplete or the
/// id is not numeric; such rows are dropped from the catalog.
pub(crate) fn parse_movie_line(line: &str) -> Option<Movie> {
    let mut parts = line.split("::");

    let id = parts.next()?.trim();
    let title = parts.next()?.trim();
    let genres = parts.next()?.trim();

    if title.is_empty() || genres.is_empty() {
        return None;
    }

    Some(Movie {
        id: id.parse().ok()?,
        title: title.to_string(),
        genres: genres.to_string(),
    })
}

/// Parse the movie table.
///
/// Incomplete rows are dropped, not fatal: the original table carries the
/// occasional ragged line and the catalog only needs the well-formed ones.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let lines = read_lines_latin1(path)?;
    let mut movies = Vec::new();
    let mut dropped = 0usize;

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_movie_line(trimmed) {
            Some(movie) => movies.push(movie),
            None => {
                warn!("Dropping malformed movie row at line {}", idx + 1);
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {} malformed movie rows", dropped);
    }
    Ok(movies)
}

/// Parse one ratings row. Malformed rows are an error here, unlike movie
/// rows: historical scores are averaged over this table.
pub(crate) fn parse_rating_line(line: &str, file: &str, line_no: usize) -> Result<Rating> {
    let mut parts = line.split("::");

    let mut next_field = |name: &str| {
        parts.next().ok_or_else(|| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Missing {}", name),
        })
    };

    let user_id = next_field("userId")?;
    let movie_id = next_field("movieId")?;
    let rating = next_field("rating")?;
    let timestamp = next_field("timestamp")?;

    let parse_err = |field: &str, err: &dyn std::fmt::Display| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid {}: {}", field, err),
    };

    Ok(Rating {
        user_id: user_id.parse().map_err(|e| parse_err("userId", &e))?,
        movie_id: movie_id.parse().map_err(|e| parse_err("movieId", &e))?,
        rating: rating.parse().map_err(|e| parse_err("rating", &e))?,
        timestamp: timestamp.parse().map_err(|e| parse_err("timestamp", &e))?,
    })
}

/// Parse the ratings table.
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ratings.dat".to_string());

    let lines = read_lines_latin1(path)?;
    let mut ratings = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        ratings.push(parse_rating_line(trimmed, &file_name, idx + 1)?);
    }
    Ok(ratings)
}
