//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::corpus::NEUTRAL_LABEL;

/// One entry of a ranked emotion distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Emotion label
    pub emotion: String,

    /// Probability as a percentage (0.0-100.0, one decimal place)
    pub percent: f32,
}

/// Complete analysis result
///
/// `emotions` holds one entry per known class, sorted by descending
/// percentage; ties keep the canonical class order captured at fit time.
/// `dominant_emotion` is always the first entry's label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Label with the highest percentage
    pub dominant_emotion: String,

    /// Ranked emotion distribution (percentages sum to ~100)
    pub emotions: Vec<EmotionScore>,
}

impl AnalysisResult {
    /// The fixed result emitted by the short-input rule
    pub fn neutral() -> Self {
        Self {
            dominant_emotion: NEUTRAL_LABEL.to_string(),
            emotions: vec![EmotionScore {
                emotion: NEUTRAL_LABEL.to_string(),
                percent: 100.0,
            }],
        }
    }

    /// Sum of all percentages in the distribution
    pub fn total_percent(&self) -> f32 {
        self.emotions.iter().map(|s| s.percent).sum()
    }
}

/// Convert a probability to a percentage rounded to one decimal place
pub(crate) fn to_percent(probability: f32) -> f32 {
    (probability * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_result_shape() {
        let result = AnalysisResult::neutral();
        assert_eq!(result.dominant_emotion, "neutral");
        assert_eq!(result.emotions.len(), 1);
        assert_eq!(result.emotions[0].percent, 100.0);
        assert_eq!(result.total_percent(), 100.0);
    }

    #[test]
    fn test_to_percent_rounds_to_one_decimal() {
        assert_eq!(to_percent(0.12345), 12.3);
        assert_eq!(to_percent(0.9999), 100.0);
        assert_eq!(to_percent(0.0), 0.0);
        assert_eq!(to_percent(0.05), 5.0);
    }

    #[test]
    fn test_result_serializes() {
        let result = AnalysisResult::neutral();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("dominant_emotion"));
        assert!(json.contains("neutral"));

        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
