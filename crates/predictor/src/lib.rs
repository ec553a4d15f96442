//! # Predictor Crate
//!
//! The pre-trained hybrid recommendation model, loaded from a filesystem
//! artifact at startup.
//!
//! ## Main Components
//!
//! - **model**: the `Predictor` trait and the `HybridModel` implementation
//! - **error**: load-time and predict-time error types
//!
//! The front-end only depends on the `Predictor` trait; tests substitute
//! deterministic implementations.

pub mod error;
pub mod model;

pub use error::{PredictorError, Result};
pub use model::{HybridModel, Predictor};
