//! # Afecto
//!
//! A multi-modal emotion analysis engine. The heart of the crate is a
//! text-emotion classification service: a TF-IDF + linear-classifier
//! pipeline trained once, at startup, from a small labeled corpus, and
//! served as an immutable, thread-safe inference handle. Voice and image
//! analyzers with the same result shape are included as fixed-heuristic
//! placeholders.
//!
//! ## Quick Start
//!
//! ```
//! use afecto::{AnalysisConfig, TextEmotionService};
//!
//! // One-time, blocking fit; the service is immutable afterwards.
//! let service = TextEmotionService::new(AnalysisConfig::default())?;
//!
//! let result = service.analyze("estoy muy feliz hoy")?;
//! println!("dominant: {}", result.dominant_emotion);
//! for score in &result.emotions {
//!     println!("  {}: {:.1}%", score.emotion, score.percent);
//! }
//! # Ok::<(), afecto::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The text pipeline follows this flow:
//!
//! ```text
//! Corpus ── fit (once) ──▶ TF-IDF ──▶ Scaler ──▶ Classifier
//! Input text ──▶ Normalize ──▶ Short-circuit? ──▶ Pipeline ──▶ Ranked result
//! ```
//!
//! Construction performs the entire fit; a service you can call is by
//! definition READY, and no inference call mutates it; share one
//! instance behind `Arc` for concurrent use.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod image;
pub mod pipeline;
pub mod preprocessing;
pub mod voice;

// Re-export main types
pub use analysis::result::{AnalysisResult, EmotionScore};
pub use analysis::service::TextEmotionService;
pub use config::AnalysisConfig;
pub use corpus::{Corpus, LabeledExample, NEUTRAL_LABEL};
pub use error::AnalysisError;
pub use image::analyze_image;
pub use pipeline::EmotionPipeline;
pub use voice::analyze_voice;
