use super::{stemmer::Identity, Corpus, Document, Stemmer, StopWordSet, Transformer};

/// The second stage: split cleaned documents into words, drop stop words, stem what remains, and
/// join the words back together with single spaces
pub struct Tokenizer {
    /// Reduces each surviving word to its root
    stemmer: Box<dyn Stemmer>,

    /// Words to drop before stemming
    stop_words: StopWordSet,
}

impl Tokenizer {
    /// Creates a new tokenizer
    pub fn new(stemmer: Box<dyn Stemmer>, stop_words: StopWordSet) -> Self {
        Self {
            stemmer,
            stop_words,
        }
    }

    /// A tokenizer that only splits and rejoins, normalizing whitespace
    pub fn passthrough() -> Self {
        Self::new(Box::new(Identity), StopWordSet::empty())
    }

    /// Split text into whitespace-delimited words
    ///
    /// Anything that is not text is handed back unchanged, so partially processed rows can be
    /// run through again.
    pub fn to_words(doc: Document) -> Document {
        match doc {
            Document::Text(text) => {
                Document::Tokens(text.split_whitespace().map(str::to_string).collect())
            }
            other => other,
        }
    }

    /// Keep only the words that are not stop words
    pub fn remove_stop_words(&self, doc: Document) -> Document {
        match doc {
            Document::Tokens(words) => Document::Tokens(
                words
                    .into_iter()
                    .filter(|word| !self.stop_words.contains(word))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Stem every word
    pub fn stem(&self, doc: Document) -> Document {
        match doc {
            Document::Tokens(words) => Document::Tokens(
                words
                    .iter()
                    .map(|word| self.stemmer.stem(word))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Join words back into a single space-separated string
    pub fn join(doc: Document) -> Document {
        match doc {
            Document::Tokens(words) => Document::Text(words.join(" ")),
            other => other,
        }
    }

    /// Run every step on a single document
    pub fn tokenize(&self, doc: Document) -> Document {
        let doc = Self::to_words(doc);
        let doc = self.remove_stop_words(doc);
        let doc = self.stem(doc);

        Self::join(doc)
    }
}

impl Transformer for Tokenizer {
    fn transform(&self, corpus: Corpus) -> Corpus {
        corpus.into_iter().map(|doc| self.tokenize(doc)).collect()
    }
}
