//! Configuration parameters for emotion analysis

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Text analysis
    /// Minimum number of whitespace-delimited tokens required before the
    /// trained model is consulted (default: 2)
    ///
    /// Inputs below this threshold short-circuit to a neutral result. This
    /// is the single authoritative short-input policy; callers do not need
    /// a length check of their own.
    pub min_tokens: usize,

    // Classifier training
    /// Gradient descent learning rate (default: 0.5)
    pub learning_rate: f32,

    /// Number of full-batch gradient descent iterations per class
    /// (default: 600)
    pub train_iterations: usize,

    /// L2 regularization strength (default: 1e-3)
    pub l2_penalty: f32,

    // Voice analysis
    /// Frame size for voice descriptor extraction (default: 2048)
    pub frame_size: usize,

    /// Hop size for voice descriptor extraction (default: 512)
    pub hop_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_tokens: 2,
            learning_rate: 0.5,
            train_iterations: 600,
            l2_penalty: 1e-3,
            frame_size: 2048,
            hop_size: 512,
        }
    }
}
