use rust_stemmers::Stemmer as Snowball;

use super::Language;

/// Reduces a word to its root form
pub trait Stemmer: Send + Sync {
    /// Stem a single word
    fn stem(&self, word: &str) -> String;
}

impl Stemmer for Snowball {
    fn stem(&self, word: &str) -> String {
        Snowball::stem(self, word).into_owned()
    }
}

/// Leaves every word as it is
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Stemmer for Identity {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Build the Snowball stemmer for a language
pub fn snowball(language: Language) -> Snowball {
    Snowball::create(language.algorithm())
}
