//! Text preprocessing modules
//!
//! This module contains utilities for preparing raw text for analysis:
//! - Input normalization (lowercasing, whitespace trimming)
//! - Tokenization (alphanumeric-boundary word extraction)

pub mod text;

pub use text::{normalize, tokenize, whitespace_token_count};
