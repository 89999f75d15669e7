/// The clean-then-tokenize preprocessing pipeline
pub mod pipeline;

/// Bag-of-words and TF-IDF features
pub mod vectorizer;

/// Linear classifiers
pub mod classifier;

/// Fitted models and artifacts
pub mod model;

/// Inference
pub mod inference;

pub use classifier::LogisticRegression;
pub use inference::infer;
pub use model::{Artifact, FittedModel, LoadableModel, Model, ModelError, Prediction};
pub use pipeline::{Config, Pipeline};
pub use vectorizer::Vectorizer;
