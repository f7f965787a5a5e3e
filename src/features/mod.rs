//! Feature extraction modules
//!
//! This module contains the learned text-to-vector stages of the
//! training pipeline:
//! - TF-IDF vectorization (vocabulary + inverse document frequency)
//! - Variance scaling (sparse-safe, no centering)

pub mod scaling;
pub mod tfidf;

pub use scaling::VarianceScaler;
pub use tfidf::TfidfVectorizer;
