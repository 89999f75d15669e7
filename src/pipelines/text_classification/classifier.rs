use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{preprocessing::Label, utils::classes::invert_map};

use super::vectorizer::Features;

/// A fitted linear classifier scored with the logistic function
///
/// Binary models carry a single coefficient row scoring the second class against the first.
/// Multi-class models carry one row per class and are scored with a softmax.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight vector per decision function, each as wide as the vocabulary
    pub coef: Vec<Vec<f64>>,

    /// One bias per decision function
    pub intercept: Vec<f64>,

    /// The class labels, in probability order
    pub classes: Vec<Label>,
}

impl LogisticRegression {
    /// Raw decision function values for one feature vector
    ///
    /// Scores that overflow saturate at the largest finite value, so very large weights still
    /// give usable probabilities.
    pub fn decision_function(&self, features: &Features) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| {
                let score = features
                    .iter()
                    .map(|(column, value)| weights.get(*column).copied().unwrap_or(0.0) * value)
                    .sum::<f64>()
                    + bias;

                score.clamp(f64::MIN, f64::MAX)
            })
            .collect()
    }

    /// Class probabilities for one feature vector, in the order of `classes`
    pub fn predict_proba(&self, features: &Features) -> Vec<f64> {
        let scores = self.decision_function(features);

        if self.is_binary() {
            let positive = sigmoid(scores[0]);

            vec![1.0 - positive, positive]
        } else {
            softmax(&scores)
        }
    }

    /// The label with the highest probability, preferring the earlier class on ties
    pub fn label_for(&self, probabilities: &[f64]) -> Label {
        let mut best = 0;

        for (index, probability) in probabilities.iter().enumerate() {
            if *probability > probabilities[best] {
                best = index;
            }
        }

        self.classes[best]
    }

    fn is_binary(&self) -> bool {
        self.classes.len() == 2 && self.coef.len() == 1
    }

    /// Check that the weights agree with each other and with the vocabulary width
    pub fn validate(&self, width: usize) -> Result<(), String> {
        if self.classes.len() < 2 {
            return Err(format!(
                "at least two classes are required, found {}",
                self.classes.len()
            ));
        }

        let class_index: BTreeMap<Label, usize> =
            invert_map(self.classes.iter().copied().enumerate());

        if class_index.len() != self.classes.len() {
            return Err("class labels must be unique".to_string());
        }

        if !self.is_binary() && self.coef.len() != self.classes.len() {
            return Err(format!(
                "expected 1 or {} coefficient rows, found {}",
                self.classes.len(),
                self.coef.len()
            ));
        }

        if self.intercept.len() != self.coef.len() {
            return Err(format!(
                "expected {} intercepts, found {}",
                self.coef.len(),
                self.intercept.len()
            ));
        }

        if let Some(row) = self.coef.iter().find(|row| row.len() != width) {
            return Err(format!(
                "coefficient rows must have {} weights, found {}",
                width,
                row.len()
            ));
        }

        let weights = self.coef.iter().flatten().chain(&self.intercept);

        if weights.copied().any(|weight| !weight.is_finite()) {
            return Err("weights must be finite".to_string());
        }

        Ok(())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> LogisticRegression {
        LogisticRegression {
            coef: vec![vec![-2.0, 2.0]],
            intercept: vec![0.0],
            classes: vec![0, 1],
        }
    }

    #[test]
    fn test_binary_probabilities() {
        let model = binary();

        let positive = model.predict_proba(&vec![(1, 1.0)]);
        assert!(positive[1] > 0.8);
        assert!((positive.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(model.label_for(&positive), 1);

        let negative = model.predict_proba(&vec![(0, 1.0)]);
        assert_eq!(model.label_for(&negative), 0);
    }

    #[test]
    fn test_empty_features_use_the_intercept() {
        let probabilities = binary().predict_proba(&Vec::new());

        assert_eq!(probabilities, vec![0.5, 0.5]);
        assert_eq!(binary().label_for(&probabilities), 0);
    }

    #[test]
    fn test_multiclass_softmax() {
        let model = LogisticRegression {
            coef: vec![vec![1.0], vec![0.0], vec![-1.0]],
            intercept: vec![0.0, 0.0, 0.0],
            classes: vec![10, 20, 30],
        };

        let probabilities = model.predict_proba(&vec![(0, 3.0)]);

        assert_eq!(probabilities.len(), 3);
        assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(model.label_for(&probabilities), 10);
    }

    #[test]
    fn test_overflowing_scores_saturate() {
        let binary = LogisticRegression {
            coef: vec![vec![1e308, 1e308]],
            intercept: vec![0.0],
            classes: vec![0, 1],
        };

        let probabilities = binary.predict_proba(&vec![(0, 1.0), (1, 1.0)]);
        assert_eq!(probabilities, vec![0.0, 1.0]);

        let multiclass = LogisticRegression {
            coef: vec![vec![1e308, 1e308], vec![1e308, 1e308], vec![0.0, 0.0]],
            intercept: vec![0.0, 0.0, 0.0],
            classes: vec![0, 1, 2],
        };

        let probabilities = multiclass.predict_proba(&vec![(0, 1.0), (1, 1.0)]);
        assert_eq!(probabilities, vec![0.5, 0.5, 0.0]);
        assert_eq!(multiclass.label_for(&probabilities), 0);
    }

    #[test]
    fn test_validate_rejects_non_finite_weights() {
        let mut model = binary();
        model.coef[0][1] = f64::INFINITY;
        assert!(model.validate(2).is_err());

        let mut model = binary();
        model.intercept[0] = f64::NAN;
        assert!(model.validate(2).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(binary().validate(2).is_ok());
        assert!(binary().validate(3).is_err());

        let mut duplicate = binary();
        duplicate.classes = vec![1, 1];
        assert!(duplicate.validate(2).is_err());

        let mut missing_bias = binary();
        missing_bias.intercept.clear();
        assert!(missing_bias.validate(2).is_err());

        let mut single = binary();
        single.classes = vec![1];
        assert!(single.validate(2).is_err());
    }
}
