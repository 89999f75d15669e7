use lazy_static::lazy_static;
use regex::Regex;

use super::{Corpus, Document, Transformer};

lazy_static! {
    /// Anything that looks like an opening or closing HTML tag
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();

    /// Runs of ASCII whitespace: space, tab, newline, carriage return, vertical tab, form feed
    static ref WHITESPACE: Regex = Regex::new(r"[ \t\n\r\x0B\x0C]+").unwrap();
}

/// Collapse every whitespace run to a single space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Remove every ASCII punctuation character
///
/// This mangles tokens that carry meaning in their punctuation: `$1,234.61` becomes `123461`, and
/// email addresses and URLs lose their markers. Downstream stemming and stop-word matching expect
/// tokens in exactly this shape.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Replace every HTML tag with a single space
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, " ").into_owned()
}

/// Replace every forward slash with a space
pub fn strip_forward_slashes(text: &str) -> String {
    text.replace('/', " ")
}

/// Clean a single piece of text
pub fn clean(text: &str) -> String {
    let cleaned = text.to_lowercase();
    let cleaned = strip_html(&cleaned);
    let cleaned = strip_forward_slashes(&cleaned);
    let cleaned = remove_punctuation(&cleaned);

    collapse_whitespace(&cleaned).trim().to_string()
}

/// The rule-based first stage: lowercase, drop HTML tags, slashes and punctuation, then collapse
/// whitespace. Non-text documents pass through untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCleaner;

impl TextCleaner {
    /// Clean a single document
    pub fn clean_document(&self, doc: Document) -> Document {
        match doc {
            Document::Text(text) => Document::Text(clean(&text)),
            other => other,
        }
    }
}

impl Transformer for TextCleaner {
    fn transform(&self, corpus: Corpus) -> Corpus {
        corpus
            .into_iter()
            .map(|doc| self.clean_document(doc))
            .collect()
    }
}
