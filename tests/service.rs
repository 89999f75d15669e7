use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use review_classifier::{
    pipelines::text_classification::{Artifact, FittedModel, Model, Prediction},
    server::{router, ClassificationService},
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// A small fitted sentiment model in its serialized form
fn artifact() -> Value {
    json!({
        "preprocessing": { "language": "english", "stop_words": ["the", "a"], "stem": true },
        "vectorizer": {
            "vocabulary": { "great": 0, "terribl": 1, "movi": 2, "film": 3 },
            "idf": null,
            "normalize": false
        },
        "classifier": {
            "coef": [[2.5, -2.5, 0.1, -0.1]],
            "intercept": [0.0],
            "classes": [0, 1]
        }
    })
}

fn app() -> Router {
    let artifact: Artifact = serde_json::from_value(artifact()).unwrap();
    let model = FittedModel::from_artifact(artifact).unwrap();

    router(ClassificationService::new(Arc::new(model)))
}

async fn post(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::post("/classify")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();

    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_classify_preserves_order() {
    let body = json!({ "reviews": ["A great movie", "The most terrible film!"] });

    let (status, resp) = post(app(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let predictions: Vec<Prediction> =
        serde_json::from_value(resp["predictions"].clone()).unwrap();

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].label, 1);
    assert_eq!(predictions[1].label, 0);

    for prediction in &predictions {
        assert_eq!(prediction.probabilities.len(), 2);
        assert!((prediction.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_classify_empty_batch() {
    let (status, resp) = post(app(), json!({ "reviews": [] }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({ "predictions": [] }));
}

#[tokio::test]
async fn test_classify_accepts_text_field() {
    let (status, resp) = post(app(), json!({ "text": ["great"] }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["predictions"][0]["label"], json!(1));
}

#[tokio::test]
async fn test_missing_field_is_a_client_error() {
    let (status, resp) = post(app(), json!({ "comments": ["great"] }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], json!("missing required field: reviews"));
}

#[tokio::test]
async fn test_wrong_shape_is_a_client_error() {
    let (status, resp) = post(app(), json!({ "reviews": "great" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].as_str().unwrap().contains("list of strings"));
}

#[tokio::test]
async fn test_non_string_review_is_a_client_error() {
    let (status, _) = post(app(), json!({ "reviews": ["great", null] }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let (status, resp) = post(app(), "{\"reviews\": [").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("malformed input: request body is not valid JSON"));
}

#[tokio::test]
async fn test_large_batch_is_accepted() {
    let review = "A great movie, the film of the year. ".repeat(60);
    let reviews = vec![review; 1500];

    let body = json!({ "reviews": reviews }).to_string();
    assert!(body.len() > 2 * 1024 * 1024);

    let (status, resp) = post(app(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["predictions"].as_array().unwrap().len(), 1500);
    assert_eq!(resp["predictions"][1499]["label"], json!(1));
}

#[tokio::test]
async fn test_only_post_is_routed() {
    let req = Request::get("/classify").body(Body::empty()).unwrap();

    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Always fails, to check that model errors do not take the service down
struct Broken;

impl Model for Broken {
    fn predict(&self, _reviews: Vec<String>) -> anyhow::Result<Vec<Prediction>> {
        Err(anyhow::anyhow!("weights went missing"))
    }
}

#[tokio::test]
async fn test_model_failure_is_a_server_error() {
    let app = router(ClassificationService::new(Arc::new(Broken)));

    let (status, resp) = post(app, json!({ "reviews": ["great"] }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["error"], json!("internal error: weights went missing"));
}

#[tokio::test]
async fn test_corrupt_artifact_does_not_load() {
    let mut value = artifact();
    value["classifier"]["classes"] = json!([0]);

    let artifact: Artifact = serde_json::from_value(value).unwrap();

    assert!(FittedModel::from_artifact(artifact).is_err());
}
