use derive_new::new;
use log::info;

use super::reviews::{Dataset, Item};

/// Drops rows whose word count falls outside the given bounds
///
/// This is the only stage allowed to change the number of rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, new)]
pub struct LengthFilter {
    /// Rows with fewer words are dropped
    pub min_words: usize,

    /// Rows with more words are dropped, if set
    pub max_words: Option<usize>,
}

impl LengthFilter {
    /// Whether a single row is kept
    pub fn keeps(&self, item: &Item) -> bool {
        let words = item.text.split_whitespace().count();

        words >= self.min_words && self.max_words.map_or(true, |max| words <= max)
    }

    /// Apply the filter, keeping the surviving rows in their original order
    pub fn apply(&self, dataset: Dataset) -> Dataset {
        let before = dataset.len();

        let items: Vec<Item> = dataset
            .items()
            .iter()
            .filter(|item| self.keeps(item))
            .cloned()
            .collect();

        info!(
            "Length filter kept {} of {} rows ({} dropped)",
            items.len(),
            before,
            before - items.len()
        );

        Dataset::new(items)
    }
}
