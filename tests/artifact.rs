use std::path::Path;

use pretty_assertions::assert_eq;
use review_classifier::{
    datasets::{reviews::Dataset, LoadableDataset},
    pipelines::text_classification::{FittedModel, LoadableModel, Model},
    preprocessing::Label,
    server::Config,
};

async fn bundled_model() -> FittedModel {
    FittedModel::load(&Config::default().model_path)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_bundled_artifact_labels_bundled_reviews() {
    let model = bundled_model().await;

    let dataset = Dataset::load(Path::new("data/datasets/imdb/test.csv"))
        .await
        .unwrap();

    let reviews: Vec<String> = dataset.items().iter().map(|item| item.text.clone()).collect();

    let predictions = model.predict(reviews).unwrap();

    let predicted: Vec<Label> = predictions.iter().map(|p| p.label).collect();

    assert_eq!(predicted, dataset.labels());

    for prediction in predictions {
        assert!((prediction.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_bundled_artifact_uses_sentiment_words() {
    let model = bundled_model().await;

    let predictions = model
        .predict(vec!["great movie".to_string(), "movie".to_string()])
        .unwrap();

    assert_eq!(predictions[0].label, 1);
    assert!(predictions[0].probabilities[1] > predictions[1].probabilities[1] + 0.2);
}
