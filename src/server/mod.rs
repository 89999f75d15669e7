use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use crate::pipelines::text_classification::{Model, Prediction};

/// Service configuration
pub mod config;

/// API errors
pub mod error;

/// Route handlers
pub mod routes;

pub use config::Config;
pub use error::ApiError;
pub use routes::{router, ClassifyResponse};

/// Answers batch prediction requests with a model loaded once at startup
///
/// The model handle is read-only and shared by every request, so no locking is needed.
#[derive(Clone)]
pub struct ClassificationService {
    model: Arc<dyn Model>,
}

impl ClassificationService {
    /// Wrap a loaded model
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model }
    }

    /// Classify a batch of reviews, returning one prediction per review in input order
    pub fn predict_batch(&self, reviews: Vec<String>) -> Result<Vec<Prediction>, ApiError> {
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let expected = reviews.len();

        let predictions = self
            .model
            .predict(reviews)
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        if predictions.len() != expected {
            return Err(ApiError::Internal(format!(
                "model returned {} predictions for {} reviews",
                predictions.len(),
                expected
            )));
        }

        Ok(predictions)
    }
}

/// Bind the configured address and serve the classification route until the process exits
pub async fn serve(config: &Config, service: ClassificationService) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(service)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes each review's length as its label
    struct Lengths;

    impl Model for Lengths {
        fn predict(&self, reviews: Vec<String>) -> anyhow::Result<Vec<Prediction>> {
            Ok(reviews
                .iter()
                .map(|review| Prediction::new(review.len() as i64, vec![]))
                .collect())
        }
    }

    /// Drops the last prediction
    struct Lossy;

    impl Model for Lossy {
        fn predict(&self, mut reviews: Vec<String>) -> anyhow::Result<Vec<Prediction>> {
            reviews.pop();

            Lengths.predict(reviews)
        }
    }

    #[test]
    fn test_empty_batch() {
        let service = ClassificationService::new(Arc::new(Lengths));

        assert!(service.predict_batch(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let service = ClassificationService::new(Arc::new(Lengths));

        let predictions = service
            .predict_batch(vec!["great movie".to_string(), "terrible film!".to_string()])
            .unwrap();

        let labels: Vec<i64> = predictions.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec![11, 14]);
    }

    #[test]
    fn test_length_mismatch_is_an_internal_error() {
        let service = ClassificationService::new(Arc::new(Lossy));

        assert!(matches!(
            service.predict_batch(vec!["a".to_string(), "b".to_string()]),
            Err(ApiError::Internal(_))
        ));
    }
}
