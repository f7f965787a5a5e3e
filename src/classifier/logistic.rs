//! One-vs-rest logistic regression
//!
//! Trains one L2-regularized binary logistic regressor per class with
//! full-batch gradient descent and combines the per-class sigmoid scores
//! into a normalized probability simplex. The training schedule is fully
//! deterministic: zero initialization, fixed learning rate, fixed
//! iteration count, no shuffling. Identical inputs always produce an
//! identical model.
//!
//! The linear decision boundary is a deliberate fit for small,
//! near-linearly-separable corpora; the class count and ordering are
//! fixed at fit time and never change afterwards.

use rayon::prelude::*;

use crate::error::AnalysisError;

/// Score floor below which the simplex normalization falls back to a
/// uniform distribution
const SCORE_FLOOR: f32 = 1e-12;

/// Training hyperparameters for the one-vs-rest fit
#[derive(Debug, Clone, Copy)]
pub struct TrainParams {
    /// Gradient descent learning rate
    pub learning_rate: f32,

    /// Full-batch iterations per class
    pub iterations: usize,

    /// L2 regularization strength
    pub l2_penalty: f32,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            iterations: 600,
            l2_penalty: 1e-3,
        }
    }
}

/// Fitted one-vs-rest logistic regression model
#[derive(Debug, Clone)]
pub struct LogisticOvr {
    /// Per-class weight vectors, indexed by class
    weights: Vec<Vec<f32>>,

    /// Per-class bias terms, indexed by class
    biases: Vec<f32>,

    /// Input dimensionality
    n_features: usize,
}

impl LogisticOvr {
    /// Train the model
    ///
    /// # Arguments
    ///
    /// * `vectors` - Scaled training feature vectors
    /// * `targets` - Class index per vector (0-based, dense)
    /// * `n_classes` - Total number of classes
    /// * `params` - Training hyperparameters
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` on empty/mismatched training
    /// data or `n_classes < 2`, and `AnalysisError::NumericalError` if
    /// training diverges to non-finite weights.
    pub fn fit(
        vectors: &[Vec<f32>],
        targets: &[usize],
        n_classes: usize,
        params: TrainParams,
    ) -> Result<Self, AnalysisError> {
        if vectors.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "No training vectors".to_string(),
            ));
        }
        if vectors.len() != targets.len() {
            return Err(AnalysisError::InvalidInput(format!(
                "Got {} vectors but {} targets",
                vectors.len(),
                targets.len()
            )));
        }
        if n_classes < 2 {
            return Err(AnalysisError::InvalidInput(format!(
                "One-vs-rest training requires at least 2 classes, got {}",
                n_classes
            )));
        }
        if let Some(&bad) = targets.iter().find(|&&t| t >= n_classes) {
            return Err(AnalysisError::InvalidInput(format!(
                "Target class {} out of range for {} classes",
                bad, n_classes
            )));
        }

        let n_features = vectors[0].len();
        for (i, v) in vectors.iter().enumerate() {
            if v.len() != n_features {
                return Err(AnalysisError::InvalidInput(format!(
                    "Vector at index {} has {} features, expected {}",
                    i,
                    v.len(),
                    n_features
                )));
            }
        }

        log::debug!(
            "Training one-vs-rest logistic regression: {} examples, {} features, {} classes",
            vectors.len(),
            n_features,
            n_classes
        );

        // Each binary problem is independent, so the per-class fits run
        // in parallel.
        let fits: Vec<(Vec<f32>, f32)> = (0..n_classes)
            .into_par_iter()
            .map(|class| {
                let labels: Vec<f32> = targets
                    .iter()
                    .map(|&t| if t == class { 1.0 } else { 0.0 })
                    .collect();
                fit_binary(vectors, &labels, params)
            })
            .collect();

        let mut weights = Vec::with_capacity(n_classes);
        let mut biases = Vec::with_capacity(n_classes);
        for (w, b) in fits {
            if !b.is_finite() || w.iter().any(|x| !x.is_finite()) {
                return Err(AnalysisError::NumericalError(
                    "Training produced non-finite weights; reduce the learning rate".to_string(),
                ));
            }
            weights.push(w);
            biases.push(b);
        }

        Ok(Self {
            weights,
            biases,
            n_features,
        })
    }

    /// Number of classes the model was trained on
    pub fn n_classes(&self) -> usize {
        self.biases.len()
    }

    /// Class probabilities for a scaled feature vector
    ///
    /// Evaluates each per-class sigmoid and normalizes the scores to sum
    /// to 1. If every score underflows (e.g. a zero vector far from all
    /// classes) the distribution degrades to uniform rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ProcessingError` on dimensionality
    /// mismatch.
    pub fn predict_proba(&self, vector: &[f32]) -> Result<Vec<f32>, AnalysisError> {
        if vector.len() != self.n_features {
            return Err(AnalysisError::ProcessingError(format!(
                "Model trained on {} features, got vector of {}",
                self.n_features,
                vector.len()
            )));
        }

        let scores: Vec<f32> = self
            .weights
            .iter()
            .zip(self.biases.iter())
            .map(|(w, &b)| sigmoid(dot(w, vector) + b))
            .collect();

        let total: f32 = scores.iter().sum();
        if total <= SCORE_FLOOR {
            log::warn!("All class scores underflowed; returning uniform distribution");
            let uniform = 1.0 / scores.len() as f32;
            return Ok(vec![uniform; scores.len()]);
        }

        Ok(scores.iter().map(|s| s / total).collect())
    }
}

/// Fit a single binary logistic regressor with full-batch gradient descent
fn fit_binary(vectors: &[Vec<f32>], labels: &[f32], params: TrainParams) -> (Vec<f32>, f32) {
    let n_features = vectors[0].len();
    let n = vectors.len() as f32;

    let mut w = vec![0.0f32; n_features];
    let mut b = 0.0f32;

    for _ in 0..params.iterations {
        let mut grad_w = vec![0.0f32; n_features];
        let mut grad_b = 0.0f32;

        for (x, &y) in vectors.iter().zip(labels.iter()) {
            let error = sigmoid(dot(&w, x) + b) - y;
            for (g, &xi) in grad_w.iter_mut().zip(x.iter()) {
                *g += error * xi;
            }
            grad_b += error;
        }

        for (wi, g) in w.iter_mut().zip(grad_w.iter()) {
            *wi -= params.learning_rate * (g / n + params.l2_penalty * *wi);
        }
        b -= params.learning_rate * grad_b / n;
    }

    (w, b)
}

/// Numerically-stable logistic sigmoid
fn sigmoid(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Dot product between two equal-length vectors
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
