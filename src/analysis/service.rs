//! Text emotion inference service
//!
//! The service owns the fitted pipeline. Its lifecycle is deliberately
//! simple: construction performs the one-time corpus fit, and a
//! successfully constructed service is READY for the rest of the process
//! lifetime. There is no way to obtain a service whose model is not
//! trained, and nothing mutates after construction, so a single instance
//! may be shared read-only (e.g. behind `Arc`) across threads.

use crate::analysis::result::{to_percent, AnalysisResult, EmotionScore};
use crate::config::AnalysisConfig;
use crate::corpus::Corpus;
use crate::error::AnalysisError;
use crate::pipeline::EmotionPipeline;
use crate::preprocessing::{normalize, whitespace_token_count};

/// Fit-once text emotion analysis service
#[derive(Debug, Clone)]
pub struct TextEmotionService {
    pipeline: EmotionPipeline,
    config: AnalysisConfig,
}

impl TextEmotionService {
    /// Build the service from the built-in corpus
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::CorpusError` if the corpus cannot train a
    /// multi-class model; no partially-initialized service is ever
    /// returned.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        Self::with_corpus(&Corpus::builtin(), config)
    }

    /// Build the service from a caller-supplied corpus
    ///
    /// # Errors
    ///
    /// See [`TextEmotionService::new`].
    pub fn with_corpus(corpus: &Corpus, config: AnalysisConfig) -> Result<Self, AnalysisError> {
        let pipeline = EmotionPipeline::fit(corpus, &config)?;
        log::debug!(
            "Text emotion service ready: {} classes",
            pipeline.labels().len()
        );
        Ok(Self { pipeline, config })
    }

    /// Canonical class labels in probability-emission order
    pub fn labels(&self) -> &[String] {
        self.pipeline.labels()
    }

    /// Analyze input text and return a ranked emotion distribution
    ///
    /// Steps:
    /// 1. Normalize (lowercase, trim).
    /// 2. Short-circuit: inputs below the configured token threshold get
    ///    a fixed neutral result without consulting the model. This is a
    ///    normal, successful result; the classifier is unreliable on
    ///    near-empty input.
    /// 3. Otherwise run the fitted pipeline, convert probabilities to
    ///    one-decimal percentages, sort descending (stable: equal
    ///    percentages keep class order), and pick the first entry as
    ///    dominant.
    ///
    /// # Errors
    ///
    /// Internal failures past the short-circuit boundary propagate as
    /// `AnalysisError`; they are never converted into a fabricated
    /// distribution. Translating them into user-facing messages is the
    /// caller's responsibility.
    ///
    /// # Example
    ///
    /// ```
    /// use afecto::{AnalysisConfig, TextEmotionService};
    ///
    /// let service = TextEmotionService::new(AnalysisConfig::default())?;
    /// let result = service.analyze("estoy muy feliz hoy")?;
    ///
    /// println!("dominant: {}", result.dominant_emotion);
    /// # Ok::<(), afecto::AnalysisError>(())
    /// ```
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let normalized = normalize(text);

        if normalized.is_empty() || whitespace_token_count(&normalized) < self.config.min_tokens {
            log::debug!("Input below token threshold; returning neutral without inference");
            return Ok(AnalysisResult::neutral());
        }

        let probabilities = self.pipeline.predict(&normalized)?;

        let mut emotions: Vec<EmotionScore> = self
            .pipeline
            .labels()
            .iter()
            .zip(probabilities.iter())
            .map(|(label, &p)| EmotionScore {
                emotion: label.clone(),
                percent: to_percent(p),
            })
            .collect();

        // Stable sort: equal percentages retain the canonical class order
        emotions.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(std::cmp::Ordering::Equal));

        let dominant_emotion = emotions[0].emotion.clone();

        Ok(AnalysisResult {
            dominant_emotion,
            emotions,
        })
    }
}
