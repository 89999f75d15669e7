use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A class label, e.g. 0 for a negative review and 1 for a positive one
pub type Label = i64;

/// An ordered batch of documents
pub type Corpus = Vec<Document>;

/// A single value flowing through the preprocessing stages
///
/// Most documents are plain text, but partially processed data can show up as token lists, and
/// dataset columns may carry numbers or missing values. Stages only rewrite the shapes they
/// understand and hand everything else back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// Raw or cleaned text
    Text(String),

    /// Text that has already been split into words
    Tokens(Vec<String>),

    /// A numeric cell
    Number(f64),

    /// A missing cell
    Missing,
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::Text(text) => write!(f, "{}", text),
            Document::Tokens(tokens) => write!(f, "{}", tokens.join(" ")),
            Document::Number(value) => write!(f, "{}", value),
            Document::Missing => Ok(()),
        }
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::Text(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::Text(text.to_string())
    }
}

impl From<Vec<String>> for Document {
    fn from(tokens: Vec<String>) -> Self {
        Document::Tokens(tokens)
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Number(value)
    }
}

impl<T: Into<Document>> From<Option<T>> for Document {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Document::Missing)
    }
}

/// Batch containers that can be normalized to a plain, ordered Corpus
pub trait IntoCorpus {
    /// Convert into a Corpus, preserving order
    fn into_corpus(self) -> Corpus;
}

impl IntoCorpus for Corpus {
    fn into_corpus(self) -> Corpus {
        self
    }
}

impl IntoCorpus for Vec<String> {
    fn into_corpus(self) -> Corpus {
        self.into_iter().map(Document::Text).collect()
    }
}

impl IntoCorpus for Vec<&str> {
    fn into_corpus(self) -> Corpus {
        self.into_iter().map(Document::from).collect()
    }
}

impl IntoCorpus for &[String] {
    fn into_corpus(self) -> Corpus {
        self.iter().map(|text| Document::Text(text.clone())).collect()
    }
}

impl IntoCorpus for &[&str] {
    fn into_corpus(self) -> Corpus {
        self.iter().map(|text| Document::from(*text)).collect()
    }
}
