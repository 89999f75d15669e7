use std::path::Path;

use log::info;

use super::{FittedModel, LoadableModel, Model, Prediction};

/// Load a fitted model from an artifact and classify a batch of text samples
pub async fn infer(
    artifact_path: &Path, // JSON artifact holding the fitted model
    samples: Vec<String>, // Raw text samples for inference
) -> anyhow::Result<Vec<Prediction>> {
    info!("Loading model...");

    let model = FittedModel::load(artifact_path)
        .await
        .map_err(|e| anyhow!("Unable to load model artifact: {}", e))?;

    info!("Running inference on {} samples...", samples.len());

    model.predict(samples)
}
