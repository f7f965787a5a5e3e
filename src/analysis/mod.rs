//! Analysis and result modules
//!
//! Turns raw class probabilities into user-facing results:
//! - Result types (ranked emotion distribution, dominant emotion)
//! - The fit-once inference service

pub mod result;
pub mod service;

pub use result::{AnalysisResult, EmotionScore};
pub use service::TextEmotionService;
