//! Heuristic voice emotion analyzer
//!
//! A placeholder analyzer with a fixed response contract: it computes a
//! handful of audio descriptors (see [`features`]) and maps them to one
//! of three canned emotion distributions with a threshold rule. It makes
//! no accuracy claim and trains nothing; it exists so voice input shares
//! the same [`AnalysisResult`] surface as the text service. Failures are
//! reported as errors, never encoded into the distribution itself.

pub mod features;

pub use features::{extract_descriptors, VoiceDescriptors};

use crate::analysis::result::{AnalysisResult, EmotionScore};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// RMS below which a signal counts as quiet
const QUIET_RMS: f32 = 0.01;

/// Zero-crossing rate below which a signal counts as tonally flat
const QUIET_ZCR: f32 = 0.1;

/// Spectral centroid (Hz) above which a signal counts as bright
const BRIGHT_CENTROID_HZ: f32 = 2000.0;

/// RMS above which a signal counts as loud
const LOUD_RMS: f32 = 0.05;

/// Analyze a voice recording and return a ranked emotion distribution
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis configuration (frame/hop sizes)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for empty samples or a zero
/// sample rate.
///
/// # Example
///
/// ```
/// use afecto::{analyze_voice, AnalysisConfig};
///
/// let samples = vec![0.0f32; 22050];
/// let result = analyze_voice(&samples, 22050, &AnalysisConfig::default())?;
/// println!("dominant: {}", result.dominant_emotion);
/// # Ok::<(), afecto::AnalysisError>(())
/// ```
pub fn analyze_voice(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let descriptors = extract_descriptors(samples, sample_rate, config.frame_size, config.hop_size)?;

    log::debug!(
        "Voice descriptors: rms={:.4}, zcr={:.4}, centroid={:.1} Hz",
        descriptors.rms,
        descriptors.zero_crossing_rate,
        descriptors.spectral_centroid
    );

    let result = if descriptors.rms < QUIET_RMS && descriptors.zero_crossing_rate < QUIET_ZCR {
        distribution("tranquilo", &[("tranquilo", 85.0), ("neutral", 15.0)])
    } else if descriptors.spectral_centroid > BRIGHT_CENTROID_HZ && descriptors.rms > LOUD_RMS {
        distribution(
            "enojado",
            &[("enojado", 75.0), ("frustrado", 15.0), ("neutral", 10.0)],
        )
    } else {
        distribution(
            "neutral",
            &[("neutral", 60.0), ("triste", 20.0), ("feliz", 20.0)],
        )
    };

    Ok(result)
}

fn distribution(dominant: &str, entries: &[(&str, f32)]) -> AnalysisResult {
    AnalysisResult {
        dominant_emotion: dominant.to_string(),
        emotions: entries
            .iter()
            .map(|(emotion, percent)| EmotionScore {
                emotion: emotion.to_string(),
                percent: *percent,
            })
            .collect(),
    }
}
