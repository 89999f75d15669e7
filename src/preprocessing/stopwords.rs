use std::collections::HashSet;

use crate::utils::files::read_file;

use super::Language;

/// A set of words to drop during tokenization, used for membership tests only
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// An empty set, which removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in NLTK stop-word list for a language
    ///
    /// These lists hold function words only. Sentiment-bearing words like "great" or "best" are
    /// kept for the classifier.
    pub fn for_language(language: Language) -> Self {
        ::stop_words::get(language.stop_words())
            .into_iter()
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Build a set from an explicit list of words
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| w.as_ref().to_string()).collect()
    }

    /// Read a newline-delimited list of words, skipping blank lines and `#` comments
    pub async fn from_file(path: &str) -> std::io::Result<Self> {
        let words = read_file(path)
            .await?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        Ok(words)
    }

    /// Check whether a word is in the set
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Add more words to the set
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        self.words.extend(words);
    }

    /// The number of words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
