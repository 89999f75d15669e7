use std::path::Path;

use async_trait::async_trait;
use derive_new::new;
use log::info;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::preprocessing::{Corpus, Document, IntoCorpus, Label};

use super::{DatasetError, LoadableDataset};

/// The name of the review dataset
pub static DATASET: &str = "imdb";

/// A single labeled review
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct Item {
    /// The review text
    pub text: String,

    /// The sentiment label: 0 for negative, 1 for positive
    pub label: Label,
}

/// An in-memory review dataset backed by a `text,label` CSV file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    items: Vec<Item>,
}

impl Dataset {
    /// Wrap a list of items
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Constructs the dataset for a split (either "train" or "test") under the data directory
    pub async fn load_split(data_dir: &str, mode: &str) -> Result<Self, DatasetError> {
        let path = format!("{}/datasets/{}/{}.csv", data_dir, DATASET, mode);

        Self::load(Path::new(&path)).await
    }

    /// Returns a specific item from the dataset
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Returns the length of the dataset
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The rows of the dataset
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The label column, parallel to the text column
    pub fn labels(&self) -> Vec<Label> {
        self.items.iter().map(|item| item.label).collect()
    }

    /// Replace the text column with a transformed corpus of the same length
    pub fn with_texts(self, corpus: Corpus) -> Result<Self, DatasetError> {
        if corpus.len() != self.items.len() {
            return Err(DatasetError::Length {
                expected: self.items.len(),
                found: corpus.len(),
            });
        }

        let items = self
            .items
            .into_iter()
            .zip(corpus)
            .map(|(item, doc)| Item::new(doc.to_string(), item.label))
            .collect();

        Ok(Self { items })
    }

    /// Returns up to `n` random rows, without repeats
    pub fn samples(&self, n: usize) -> Vec<Item> {
        let mut rng = rand::thread_rng();

        self.items
            .choose_multiple(&mut rng, n)
            .cloned()
            .collect()
    }

    /// Write the dataset as a `text,label` CSV file
    pub async fn save(&self, path: &Path) -> Result<(), DatasetError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for item in &self.items {
            writer.serialize(item)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DatasetError::Io(e.into_error()))?;

        tokio::fs::write(path, bytes).await?;

        info!("Wrote {} rows to {}", self.items.len(), path.display());

        Ok(())
    }
}

#[async_trait]
impl LoadableDataset for Dataset {
    async fn load(path: &Path) -> Result<Self, DatasetError> {
        let bytes = tokio::fs::read(path).await?;
        let mut reader = csv::ReaderBuilder::new().from_reader(bytes.as_slice());

        let items = reader
            .deserialize()
            .collect::<Result<Vec<Item>, csv::Error>>()?;

        info!("Loaded {} rows from {}", items.len(), path.display());

        Ok(Self { items })
    }
}

impl IntoCorpus for &Dataset {
    /// The text column, in row order
    fn into_corpus(self) -> Corpus {
        self.items
            .iter()
            .map(|item| Document::Text(item.text.clone()))
            .collect()
    }
}
