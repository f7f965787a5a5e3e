//! Training pipeline
//!
//! Composes the TF-IDF vectorizer, the variance scaler and the
//! one-vs-rest classifier into one fit/predict unit. The pipeline is
//! fitted exactly once, at service startup, and is immutable afterwards;
//! every inference call threads its text through the same fitted stages.

use crate::classifier::{LogisticOvr, TrainParams};
use crate::config::AnalysisConfig;
use crate::corpus::Corpus;
use crate::error::AnalysisError;
use crate::features::{TfidfVectorizer, VarianceScaler};

/// Fitted text-emotion pipeline
///
/// Holds the fitted feature stages, the trained classifier and the
/// canonical class-label order captured at fit time.
#[derive(Debug, Clone)]
pub struct EmotionPipeline {
    vectorizer: TfidfVectorizer,
    scaler: VarianceScaler,
    classifier: LogisticOvr,
    labels: Vec<String>,
}

impl EmotionPipeline {
    /// Fit the pipeline on a labeled corpus
    ///
    /// This is the one-time, blocking training step. The corpus is
    /// validated first; an invalid corpus is fatal (the caller cannot
    /// obtain a pipeline, and therefore no service can reach READY).
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::CorpusError` if the corpus is empty, has
    /// fewer than 2 distinct labels, or yields an empty vocabulary;
    /// other variants propagate from the individual stages.
    pub fn fit(corpus: &Corpus, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        corpus.validate()?;

        let labels = corpus.labels();
        log::debug!(
            "Fitting emotion pipeline: {} examples, {} classes",
            corpus.len(),
            labels.len()
        );

        let label_index = |label: &str| labels.iter().position(|l| l == label);

        let texts = corpus.texts();
        let vectorizer = TfidfVectorizer::fit(&texts)?;

        let train_vectors: Vec<Vec<f32>> =
            texts.iter().map(|text| vectorizer.transform(text)).collect();
        let scaler = VarianceScaler::fit(&train_vectors)?;

        let mut scaled = train_vectors;
        for vector in scaled.iter_mut() {
            scaler.transform(vector)?;
        }

        let targets: Vec<usize> = corpus
            .iter()
            .map(|ex| {
                label_index(&ex.label).ok_or_else(|| {
                    AnalysisError::ProcessingError(format!(
                        "Label {:?} missing from captured label set",
                        ex.label
                    ))
                })
            })
            .collect::<Result<_, _>>()?;

        let params = TrainParams {
            learning_rate: config.learning_rate,
            iterations: config.train_iterations,
            l2_penalty: config.l2_penalty,
        };
        let classifier = LogisticOvr::fit(&scaled, &targets, labels.len(), params)?;

        log::debug!("Pipeline fit complete: vocabulary of {} terms", vectorizer.n_features());

        Ok(Self {
            vectorizer,
            scaler,
            classifier,
            labels,
        })
    }

    /// Canonical class labels in the order probabilities are emitted
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Class probabilities for a normalized input text
    ///
    /// The returned vector is indexed by [`EmotionPipeline::labels`] and
    /// sums to 1.
    ///
    /// # Errors
    ///
    /// Propagates `AnalysisError` from the fitted stages; this indicates
    /// an internal failure, never a merely-unusual input.
    pub fn predict(&self, text: &str) -> Result<Vec<f32>, AnalysisError> {
        let mut vector = self.vectorizer.transform(text);
        self.scaler.transform(&mut vector)?;
        self.classifier.predict_proba(&vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::LabeledExample;

    #[test]
    fn test_fit_builtin_corpus() {
        let pipeline = EmotionPipeline::fit(&Corpus::builtin(), &AnalysisConfig::default())
            .expect("builtin corpus must fit");
        assert_eq!(pipeline.labels().len(), 7);
    }

    #[test]
    fn test_predict_returns_simplex() {
        let pipeline =
            EmotionPipeline::fit(&Corpus::builtin(), &AnalysisConfig::default()).unwrap();
        let probs = pipeline.predict("estoy muy feliz hoy").unwrap();

        assert_eq!(probs.len(), 7);
        let total: f32 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-4, "probabilities sum to {}", total);
    }

    #[test]
    fn test_fit_rejects_single_label() {
        let corpus = Corpus::new(vec![
            LabeledExample::new("todo está bien", "neutral"),
            LabeledExample::new("nada especial hoy", "neutral"),
        ]);
        let result = EmotionPipeline::fit(&corpus, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::CorpusError(_))));
    }

    #[test]
    fn test_fit_rejects_empty_corpus() {
        let result = EmotionPipeline::fit(&Corpus::new(vec![]), &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::CorpusError(_))));
    }

    #[test]
    fn test_verbatim_training_text_recovers_its_label() {
        let pipeline =
            EmotionPipeline::fit(&Corpus::builtin(), &AnalysisConfig::default()).unwrap();
        let probs = pipeline.predict("estoy muy feliz hoy").unwrap();

        let best = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(pipeline.labels()[best], "feliz");
    }
}
