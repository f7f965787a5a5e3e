//! Training corpus types and the built-in labeled corpus
//!
//! The corpus is the sole source of supervision for the text classifier.
//! Its label set is derived entirely from the labels present in the
//! examples; no label list is declared independently.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Label emitted for inputs too short to classify
pub const NEUTRAL_LABEL: &str = "neutral";

/// A single labeled training example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Raw example text
    pub text: String,

    /// Emotion label
    pub label: String,
}

impl LabeledExample {
    /// Create a labeled example
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Ordered sequence of labeled examples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    examples: Vec<LabeledExample>,
}

impl Corpus {
    /// Create a corpus from caller-supplied examples
    ///
    /// The corpus is not validated here; validation happens when a
    /// pipeline is fitted (see [`Corpus::validate`]).
    pub fn new(examples: Vec<LabeledExample>) -> Self {
        Self { examples }
    }

    /// The built-in Spanish emotion corpus (20 examples, 7 labels)
    pub fn builtin() -> Self {
        let examples = [
            ("estoy muy feliz hoy", "feliz"),
            ("me siento alegre y contento", "feliz"),
            ("qué día tan maravilloso", "feliz"),
            ("me encanta esto", "feliz"),
            ("estoy triste y deprimido", "triste"),
            ("me siento solo y abandonado", "triste"),
            ("qué día tan horrible", "triste"),
            ("no tengo ganas de nada", "triste"),
            ("estoy enojado y furioso", "enojado"),
            ("esto me molesta mucho", "enojado"),
            ("qué rabia me da esta situación", "enojado"),
            ("no puedo creer lo que hicieron", "sorpresa"),
            ("vaya sorpresa tan inesperada", "sorpresa"),
            ("tengo miedo de lo que pueda pasar", "miedo"),
            ("esto me asusta mucho", "miedo"),
            ("me da pánico pensar en eso", "miedo"),
            ("no sé qué hacer ahora", "confundido"),
            ("estoy indeciso sobre esto", "confundido"),
            ("todo está bien", "neutral"),
            ("nada especial hoy", "neutral"),
        ];

        Self {
            examples: examples
                .iter()
                .map(|(text, label)| LabeledExample::new(*text, *label))
                .collect(),
        }
    }

    /// Number of examples in the corpus
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// True if the corpus has no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Iterate over the examples in corpus order
    pub fn iter(&self) -> impl Iterator<Item = &LabeledExample> {
        self.examples.iter()
    }

    /// Example texts in corpus order
    pub fn texts(&self) -> Vec<&str> {
        self.examples.iter().map(|ex| ex.text.as_str()).collect()
    }

    /// Distinct labels in deterministic (lexicographic) order
    ///
    /// This order is captured once at fit time and becomes the canonical
    /// class iteration order for the rest of the process lifetime.
    pub fn labels(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.examples.iter().map(|ex| ex.label.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Validate that the corpus can train a multi-class model
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::CorpusError` if:
    /// - The corpus is empty
    /// - Any example has blank text or an empty label
    /// - Fewer than 2 distinct labels are present (multi-class training
    ///   requires at least 2 classes)
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.examples.is_empty() {
            return Err(AnalysisError::CorpusError(
                "Training corpus is empty".to_string(),
            ));
        }

        for (i, ex) in self.examples.iter().enumerate() {
            if ex.text.trim().is_empty() {
                return Err(AnalysisError::CorpusError(format!(
                    "Example at index {} has blank text",
                    i
                )));
            }
            if ex.label.is_empty() {
                return Err(AnalysisError::CorpusError(format!(
                    "Example at index {} has an empty label",
                    i
                )));
            }
        }

        let n_labels = self.labels().len();
        if n_labels < 2 {
            return Err(AnalysisError::CorpusError(format!(
                "Multi-class training requires at least 2 distinct labels, got {}",
                n_labels
            )));
        }

        Ok(())
    }
}
