use std::collections::{BTreeMap, BTreeSet};

use log::info;
use serde::{Deserialize, Serialize};

use crate::utils::classes::invert_map;

/// A sparse feature vector as `(column, weight)` pairs, sorted by column
pub type Features = Vec<(usize, f64)>;

/// Bag-of-words features over normalized documents, with optional TF-IDF weighting
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vectorizer {
    /// A mapping from terms to feature columns
    pub vocabulary: BTreeMap<String, usize>,

    /// Inverse document frequency for each column, if TF-IDF weighting is enabled
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    /// Whether to scale each feature vector to unit length
    #[serde(default)]
    pub normalize: bool,
}

impl Vectorizer {
    /// Raw term counts
    pub fn counts() -> Self {
        Self::default()
    }

    /// TF-IDF weights scaled to unit length
    pub fn tfidf() -> Self {
        Self {
            idf: Some(Vec::new()),
            normalize: true,
            ..Self::default()
        }
    }

    /// The number of feature columns
    pub fn width(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature column names, indexed by column
    pub fn feature_names(&self) -> Vec<String> {
        let by_column: BTreeMap<usize, String> = invert_map(self.vocabulary.clone());

        by_column.into_values().collect()
    }

    /// Learn the vocabulary, and the IDF weights when enabled, from normalized documents
    pub fn fit(&mut self, docs: &[String]) {
        let terms: BTreeSet<&str> = docs.iter().flat_map(|doc| doc.split_whitespace()).collect();

        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        if self.idf.is_some() {
            let mut doc_freq = vec![0usize; self.width()];

            for doc in docs {
                let seen: BTreeSet<usize> = doc
                    .split_whitespace()
                    .filter_map(|term| self.vocabulary.get(term).copied())
                    .collect();

                for column in seen {
                    doc_freq[column] += 1;
                }
            }

            let n_docs = docs.len() as f64;

            self.idf = Some(
                doc_freq
                    .into_iter()
                    .map(|df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
                    .collect(),
            );
        }

        info!(
            "Fit vectorizer on {} documents, {} terms",
            docs.len(),
            self.width()
        );
    }

    /// Convert one normalized document into sparse features. Unknown terms are ignored.
    pub fn transform(&self, doc: &str) -> Features {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();

        for term in doc.split_whitespace() {
            if let Some(column) = self.vocabulary.get(term) {
                *counts.entry(*column).or_insert(0.0) += 1.0;
            }
        }

        if let Some(idf) = &self.idf {
            for (column, weight) in counts.iter_mut() {
                *weight *= idf.get(*column).copied().unwrap_or(1.0);
            }
        }

        if self.normalize {
            let norm = counts.values().map(|w| w * w).sum::<f64>().sqrt();

            if norm > 0.0 {
                counts.values_mut().for_each(|w| *w /= norm);
            }
        }

        counts.into_iter().collect()
    }

    /// Check that the saved state is self-consistent
    pub fn validate(&self) -> Result<(), String> {
        let width = self.width();

        if let Some(column) = self.vocabulary.values().find(|column| **column >= width) {
            return Err(format!(
                "vocabulary column {} is out of range for {} terms",
                column, width
            ));
        }

        if let Some(idf) = &self.idf {
            if idf.len() != width {
                return Err(format!(
                    "expected {} idf weights, found {}",
                    width,
                    idf.len()
                ));
            }
        }

        Ok(())
    }
}
