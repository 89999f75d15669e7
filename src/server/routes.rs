use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::post,
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pipelines::text_classification::Prediction;

use super::{ApiError, ClassificationService};

/// The request field holding the reviews
pub static REVIEWS_FIELD: &str = "reviews";

/// An older name for the same field, still accepted
pub static TEXT_FIELD: &str = "text";

/// Response body for `POST /classify`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// One prediction per review, in request order
    pub predictions: Vec<Prediction>,
}

/// Build the router with the single classification route
///
/// Batches are unbounded, so the default request body limit is lifted.
pub fn router(service: ClassificationService) -> Router {
    Router::new()
        .route("/classify", post(classify))
        .layer(DefaultBodyLimit::disable())
        .with_state(service)
}

async fn classify(
    State(service): State<ClassificationService>,
    body: Bytes,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedInput(format!("request body is not valid JSON: {}", e)))?;

    let reviews = parse_reviews(&payload)?;

    info!("Classifying {} reviews", reviews.len());

    let predictions = service.predict_batch(reviews)?;

    Ok(Json(ClassifyResponse { predictions }))
}

/// Pull the list of reviews out of a request payload
pub fn parse_reviews(payload: &Value) -> Result<Vec<String>, ApiError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ApiError::MalformedInput("request body must be a JSON object".to_string()))?;

    let (field, value) = object
        .get(REVIEWS_FIELD)
        .map(|value| (REVIEWS_FIELD, value))
        .or_else(|| object.get(TEXT_FIELD).map(|value| (TEXT_FIELD, value)))
        .ok_or(ApiError::MissingField(REVIEWS_FIELD))?;

    let items = value
        .as_array()
        .ok_or_else(|| ApiError::MalformedInput(format!("`{}` must be a list of strings", field)))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ApiError::MalformedInput(format!(
                    "`{}[{}]` must be a string, found {}",
                    field, index, item
                ))
            })
        })
        .collect()
}
