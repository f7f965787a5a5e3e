//! Feature vector scaling
//!
//! Scales each feature dimension by its standard deviation measured over
//! the training vectors. Centering (mean subtraction) is deliberately not
//! performed: TF-IDF vectors are sparse, and subtracting a per-dimension
//! mean would turn every zero entry into a non-zero one.

use crate::error::AnalysisError;

/// Numerical stability epsilon for divisions
const EPSILON: f32 = 1e-10;

/// Fitted per-dimension variance scaler (no centering)
#[derive(Debug, Clone)]
pub struct VarianceScaler {
    /// Per-dimension divisor (standard deviation, or 1.0 where variance
    /// is effectively zero)
    scale: Vec<f32>,
}

impl VarianceScaler {
    /// Fit the scaler on the training feature vectors
    ///
    /// # Arguments
    ///
    /// * `vectors` - Training vectors, all of the same dimensionality
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `vectors` is empty or the
    /// vectors disagree on dimensionality.
    pub fn fit(vectors: &[Vec<f32>]) -> Result<Self, AnalysisError> {
        if vectors.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "No vectors to fit scaler on".to_string(),
            ));
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
            "Fitting variance scaler on {} vectors of {} features",
            vectors.len(),
            n_features
        );

        let n = vectors.len() as f32;
        let mut scale = Vec::with_capacity(n_features);

        for dim in 0..n_features {
            let mean: f32 = vectors.iter().map(|v| v[dim]).sum::<f32>() / n;
            let var: f32 = vectors
                .iter()
                .map(|v| {
                    let d = v[dim] - mean;
                    d * d
                })
                .sum::<f32>()
                / n;
            let std = var.sqrt();

            // Constant dimensions pass through unchanged
            scale.push(if std > EPSILON { std } else { 1.0 });
        }

        Ok(Self { scale })
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.scale.len()
    }

    /// Scale a feature vector in place
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ProcessingError` on dimensionality
    /// mismatch; this indicates an internal wiring bug, not bad user
    /// input.
    pub fn transform(&self, vector: &mut [f32]) -> Result<(), AnalysisError> {
        if vector.len() != self.scale.len() {
            return Err(AnalysisError::ProcessingError(format!(
                "Scaler fitted on {} features, got vector of {}",
                self.scale.len(),
                vector.len()
            )));
        }

        for (value, &s) in vector.iter_mut().zip(self.scale.iter()) {
            *value /= s;
        }

        Ok(())
    }
}
