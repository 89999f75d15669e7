use derive_new::new;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::preprocessing::{
    stemmer::{snowball, Identity},
    Corpus, Document, IntoCorpus, Label, Language, StopWordSet, TextCleaner, Tokenizer,
    Transformer,
};

/// Settings for rebuilding the preprocessing stages from a saved artifact
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct Config {
    /// Language for the stemmer and the built-in stop-word list
    #[serde(default)]
    pub language: Language,

    /// An explicit stop-word list, replacing the built-in one when present
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,

    /// Whether to stem tokens
    #[serde(default = "default_stem")]
    pub stem: bool,
}

fn default_stem() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Language::default(), None, default_stem())
    }
}

impl Config {
    /// Build the tokenizer these settings describe
    pub fn tokenizer(&self) -> Tokenizer {
        let stop_words = match &self.stop_words {
            Some(words) => StopWordSet::from_list(words),
            None => StopWordSet::for_language(self.language),
        };

        if self.stem {
            Tokenizer::new(Box::new(snowball(self.language)), stop_words)
        } else {
            Tokenizer::new(Box::new(Identity), stop_words)
        }
    }

    /// Build the full preprocessing pipeline these settings describe
    pub fn init(&self) -> Pipeline {
        Pipeline::new(TextCleaner, self.tokenizer())
    }
}

/// The two-stage preprocessing pipeline: clean, then tokenize
pub struct Pipeline {
    cleaner: TextCleaner,
    tokenizer: Tokenizer,
}

impl Pipeline {
    /// Compose a cleaner and a tokenizer. The order of the stages is fixed.
    pub fn new(cleaner: TextCleaner, tokenizer: Tokenizer) -> Self {
        Self { cleaner, tokenizer }
    }

    /// Normalize any supported batch container and run it through both stages
    pub fn run<C: IntoCorpus>(&self, input: C) -> Corpus {
        self.transform(input.into_corpus())
    }

    /// Run raw strings through both stages, returning the normalized text of each
    ///
    /// Text in always produces text out, so the result lines up with the input.
    pub fn normalize(&self, texts: Vec<String>) -> Vec<String> {
        self.run(texts)
            .into_iter()
            .map(|doc| doc.to_string())
            .collect()
    }
}

impl Transformer for Pipeline {
    fn fit(&mut self, corpus: &[Document], labels: Option<&[Label]>) -> anyhow::Result<()> {
        self.cleaner.fit(corpus, labels)?;
        self.tokenizer.fit(corpus, labels)
    }

    fn transform(&self, corpus: Corpus) -> Corpus {
        debug!("Preprocessing {} documents", corpus.len());

        let cleaned = self.cleaner.transform(corpus);

        self.tokenizer.transform(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pipeline() -> Pipeline {
        Config::new(
            Language::English,
            Some(vec!["the".to_string(), "was".to_string()]),
            false,
        )
        .init()
    }

    #[test]
    fn test_clean_then_tokenize() {
        let corpus = pipeline().run(vec!["<p>The PLOT was thin/weak!</p>"]);

        assert_eq!(corpus, vec![Document::from("plot thin weak")]);
    }

    #[test]
    fn test_accepts_borrowed_slices() {
        let reviews = vec!["The End.".to_string(), "Was it?".to_string()];

        let corpus = pipeline().run(reviews.as_slice());

        assert_eq!(corpus, vec![Document::from("end"), Document::from("it")]);
    }

    #[test]
    fn test_fit_is_a_noop() {
        let mut pipeline = pipeline();
        let corpus: Corpus = vec!["The film".into()];

        pipeline.fit(&corpus, Some(&[1][..])).unwrap();

        assert_eq!(pipeline.transform(corpus), vec![Document::from("film")]);
    }

    #[test]
    fn test_normalize_preserves_length() {
        let texts = vec!["".to_string(), "the the".to_string(), "Great!".to_string()];

        assert_eq!(pipeline().normalize(texts), vec!["", "", "great"]);
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.stem);
        assert_eq!(config.language, Language::English);
    }
}
