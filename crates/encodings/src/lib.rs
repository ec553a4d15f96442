//! # Encodings Crate
//!
//! Categorical encodings for the trained recommendation model.
//!
//! The model never sees raw identifiers: users and movies are substituted
//! with the dense integer indices they were assigned at training time, and
//! genre lists become fixed-width binary vectors. This crate loads and
//! serves those mappings.
//!
//! ## Main Components
//!
//! - **tables**: `EncodingTables` — user/movie index maps plus the encoder
//! - **genre**: `GenreEncoder` — multi-label genre vector encoding
//! - **error**: Error types for bundle loading

pub mod error;
pub mod genre;
pub mod tables;

pub use error::{EncodingError, Result};
pub use genre::GenreEncoder;
pub use tables::EncodingTables;
