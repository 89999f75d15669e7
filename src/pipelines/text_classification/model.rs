use std::path::Path;

use async_trait::async_trait;
use derive_new::new;
use log::info;
use serde::{Deserialize, Serialize};

use crate::preprocessing::{Corpus, Label, Transformer};

use super::{
    classifier::LogisticRegression,
    pipeline::{self, Pipeline},
    vectorizer::Vectorizer,
};

/// A prediction for a single document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct Prediction {
    /// The most probable class
    pub label: Label,

    /// The probability of each class, in class order
    pub probabilities: Vec<f64>,
}

/// A trait for read-only models that classify batches of raw text
pub trait Model: Send + Sync {
    /// Classify a batch of raw documents, returning one prediction per document in input order
    fn predict(&self, reviews: Vec<String>) -> anyhow::Result<Vec<Prediction>>;
}

/// A model that can be loaded from a file
#[async_trait]
pub trait LoadableModel: Model {
    /// Load the model
    async fn load(path: &Path) -> Result<Self, ModelError>
    where
        Self: std::marker::Sized;
}

/// The serialized form of a fitted model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct Artifact {
    /// How to rebuild the preprocessing stages
    #[serde(default)]
    pub preprocessing: pipeline::Config,

    /// The fitted vectorizer state
    pub vectorizer: Vectorizer,

    /// The fitted classifier weights
    pub classifier: LogisticRegression,
}

impl Artifact {
    /// Check that the vectorizer and classifier agree with each other
    pub fn validate(&self) -> Result<(), ModelError> {
        self.vectorizer.validate().map_err(ModelError::Invalid)?;
        self.classifier
            .validate(self.vectorizer.width())
            .map_err(ModelError::Invalid)
    }

    /// Fit the vectorizer on raw training documents run through this artifact's preprocessing
    ///
    /// The classifier weights are reset to zero at the new vocabulary width, ready for an
    /// external trainer to fill in.
    pub fn fit_vectorizer(
        &mut self,
        corpus: Corpus,
        labels: Option<&[Label]>,
    ) -> anyhow::Result<()> {
        let mut pipeline = self.preprocessing.init();
        pipeline.fit(&corpus, labels)?;

        let docs: Vec<String> = pipeline
            .transform(corpus)
            .iter()
            .map(|doc| doc.to_string())
            .collect();

        self.vectorizer.fit(&docs);

        let width = self.vectorizer.width();
        for row in self.classifier.coef.iter_mut() {
            *row = vec![0.0; width];
        }
        self.classifier.intercept.iter_mut().for_each(|bias| *bias = 0.0);

        Ok(())
    }

    /// Write the artifact as JSON
    pub async fn save(&self, path: &Path) -> Result<(), ModelError> {
        let json = serde_json::to_vec_pretty(self)?;

        tokio::fs::write(path, json).await?;

        Ok(())
    }
}

/// A fitted preprocessing, vectorizer, and classifier chain, ready to serve predictions
pub struct FittedModel {
    pipeline: Pipeline,
    vectorizer: Vectorizer,
    classifier: LogisticRegression,
}

impl FittedModel {
    /// Build a model from a validated artifact
    pub fn from_artifact(artifact: Artifact) -> Result<Self, ModelError> {
        artifact.validate()?;

        let Artifact {
            preprocessing,
            vectorizer,
            classifier,
        } = artifact;

        Ok(Self {
            pipeline: preprocessing.init(),
            vectorizer,
            classifier,
        })
    }

    /// The class labels this model predicts
    pub fn classes(&self) -> &[Label] {
        &self.classifier.classes
    }
}

impl Model for FittedModel {
    fn predict(&self, reviews: Vec<String>) -> anyhow::Result<Vec<Prediction>> {
        self.pipeline
            .normalize(reviews)
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                let features = self.vectorizer.transform(doc);
                let probabilities = self.classifier.predict_proba(&features);

                if probabilities.iter().any(|p| !p.is_finite()) {
                    return Err(anyhow!("Non-finite class probabilities for review {}", index));
                }

                Ok(Prediction::new(
                    self.classifier.label_for(&probabilities),
                    probabilities,
                ))
            })
            .collect()
    }
}

#[async_trait]
impl LoadableModel for FittedModel {
    async fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = tokio::fs::read(path).await?;
        let artifact: Artifact = serde_json::from_slice(&bytes)?;

        let model = Self::from_artifact(artifact)?;

        info!(
            "Loaded model from {}: {} terms, classes {:?}",
            path.display(),
            model.vectorizer.width(),
            model.classes()
        );

        Ok(model)
    }
}

/// Model Error
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// The artifact could not be read or written
    #[error("unable to access the model artifact: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact is not valid JSON for a fitted model
    #[error("unable to parse the model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact parsed but its parts do not fit together
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}
