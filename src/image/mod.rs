//! Placeholder image emotion analyzer
//!
//! Returns a fixed distribution for any non-empty image payload. Like the
//! voice analyzer, this is a collaborator with a stable response contract
//! rather than a real model; it exists so image input shares the
//! [`AnalysisResult`] surface, and it reports failures as errors instead
//! of encoding them into the distribution.

use crate::analysis::result::{AnalysisResult, EmotionScore};
use crate::error::AnalysisError;

/// Analyze image bytes and return the placeholder distribution
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty payload.
pub fn analyze_image(bytes: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    if bytes.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty image payload".to_string(),
        ));
    }

    log::debug!("Analyzing image payload of {} bytes", bytes.len());

    Ok(AnalysisResult {
        dominant_emotion: "feliz".to_string(),
        emotions: vec![
            EmotionScore {
                emotion: "feliz".to_string(),
                percent: 70.0,
            },
            EmotionScore {
                emotion: "neutral".to_string(),
                percent: 20.0,
            },
            EmotionScore {
                emotion: "sorpresa".to_string(),
                percent: 10.0,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_rejected() {
        assert!(matches!(
            analyze_image(&[]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fixed_distribution() {
        let result = analyze_image(&[0xFF, 0xD8, 0xFF]).unwrap();
        assert_eq!(result.dominant_emotion, "feliz");
        assert_eq!(result.emotions.len(), 3);
        assert_eq!(result.total_percent(), 100.0);
    }
}
