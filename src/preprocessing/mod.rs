/// Documents, corpora, and labels
pub mod document;

/// The text cleaning stage
pub mod cleaner;

/// The tokenization stage
pub mod tokenizer;

/// Stemming capabilities
pub mod stemmer;

/// Stop-word sets
pub mod stopwords;

/// Supported languages
pub mod language;

pub use cleaner::TextCleaner;
pub use document::{Corpus, Document, IntoCorpus, Label};
pub use language::{Language, LanguageError};
pub use stemmer::Stemmer;
pub use stopwords::StopWordSet;
pub use tokenizer::Tokenizer;

/// A pipeline stage that can be fit to a corpus and then used to transform corpora
///
/// Rule-based stages have nothing to learn, so `fit` defaults to a no-op.
pub trait Transformer {
    /// Learn any state the stage needs from a training corpus
    fn fit(&mut self, _corpus: &[Document], _labels: Option<&[Label]>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Transform a corpus, preserving its length and order
    fn transform(&self, corpus: Corpus) -> Corpus;
}
