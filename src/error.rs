//! Error types for the emotion analysis engine

use std::fmt;

/// Errors that can occur during training or analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Training corpus is malformed or insufficient (fatal at startup)
    CorpusError(String),

    /// Processing error during feature extraction or scoring
    ProcessingError(String),

    /// Numerical error (overflow, underflow, non-finite values)
    NumericalError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::CorpusError(msg) => write!(f, "Corpus error: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
