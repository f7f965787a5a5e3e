//! TF-IDF vectorization
//!
//! Converts text into a fixed-dimensional numeric vector using
//! term-frequency–inverse-document-frequency weighting over the
//! vocabulary observed at fit time. Uses smoothed document frequencies
//! (`idf(t) = ln((1 + n) / (1 + df(t))) + 1`) and L2-normalizes each
//! output vector, so a document's weight profile is independent of its
//! length.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::AnalysisError;
use crate::preprocessing::tokenize;

/// Fitted TF-IDF vectorizer
///
/// Vocabulary and IDF weights are learned once via [`TfidfVectorizer::fit`]
/// and are immutable afterwards. Terms not seen during fit contribute zero
/// weight at transform time; they are never an error.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term -> feature index (indices assigned in lexicographic term order)
    vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature index
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and IDF weights from the corpus texts
    ///
    /// # Arguments
    ///
    /// * `texts` - Training documents (raw or normalized; tokenization
    ///   lowercases internally)
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::CorpusError` if no document yields any
    /// token, i.e. the learned vocabulary would be empty.
    pub fn fit(texts: &[&str]) -> Result<Self, AnalysisError> {
        log::debug!("Fitting TF-IDF vectorizer on {} documents", texts.len());

        // Document frequency per term. BTreeMap keeps term iteration
        // deterministic so feature indices are stable across runs.
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for text in texts {
            let terms: BTreeSet<String> = tokenize(text).into_iter().collect();
            for term in terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(AnalysisError::CorpusError(
                "Training corpus produced an empty vocabulary".to_string(),
            ));
        }

        let n_docs = texts.len() as f32;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());

        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            // Smoothed IDF: behaves as if every term occurred in one
            // extra document, keeping weights finite and positive.
            let weight = ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0;
            vocabulary.insert(term, index);
            idf.push(weight);
        }

        log::debug!("Learned vocabulary of {} terms", idf.len());

        Ok(Self { vocabulary, idf })
    }

    /// Number of features (vocabulary size)
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Transform text into an L2-normalized TF-IDF vector
    ///
    /// Unknown terms are ignored. A document with no in-vocabulary terms
    /// maps to the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        // L2 normalization
        let norm: f32 = vector.iter().map(|&x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit_small() -> TfidfVectorizer {
        TfidfVectorizer::fit(&[
            "estoy muy feliz hoy",
            "qué día tan horrible",
            "todo está bien",
        ])
        .unwrap()
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let vectorizer = fit_small();
        // 11 distinct terms of >= 2 chars across the three documents
        assert_eq!(vectorizer.n_features(), 11);
    }

    #[test]
    fn test_fit_empty_vocabulary_rejected() {
        let result = TfidfVectorizer::fit(&["!", "?"]);
        assert!(matches!(result, Err(AnalysisError::CorpusError(_))));
    }

    #[test]
    fn test_transform_is_unit_length() {
        let vectorizer = fit_small();
        let vector = vectorizer.transform("estoy muy feliz hoy");
        let norm: f32 = vector.iter().map(|&x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {}", norm);
    }

    #[test]
    fn test_transform_unknown_terms_ignored() {
        let vectorizer = fit_small();
        let vector = vectorizer.transform("palabras completamente desconocidas");
        assert!(vector.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_transform_deterministic() {
        let vectorizer = fit_small();
        let a = vectorizer.transform("qué día tan horrible");
        let b = vectorizer.transform("qué día tan horrible");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rare_terms_outweigh_common_ones() {
        // "día" appears in one document, as does "horrible"; both occur
        // once in the query, so their weights tie. A term from another
        // document must not appear at all.
        let vectorizer = fit_small();
        let vector = vectorizer.transform("día horrible feliz");
        let nonzero = vector.iter().filter(|&&x| x > 0.0).count();
        assert_eq!(nonzero, 3);
    }
}
