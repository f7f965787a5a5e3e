//! Classification modules
//!
//! Supervised multi-class probability estimation:
//! - One-vs-rest logistic regression (linear decision boundary)

pub mod logistic;

pub use logistic::{LogisticOvr, TrainParams};
