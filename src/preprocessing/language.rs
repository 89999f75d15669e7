use std::fmt::Display;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};
use ::stop_words::LANGUAGE;

/// Languages with both a Snowball stemmer and a built-in stop-word list
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    English,
    /// German
    German,
    /// French
    French,
    /// Spanish
    Spanish,
    /// Italian
    Italian,
    /// Portuguese
    Portuguese,
    /// Dutch
    Dutch,
    /// Russian
    Russian,
    /// Swedish
    Swedish,
}

impl Language {
    /// The Snowball stemming algorithm for this language
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::German => Algorithm::German,
            Language::French => Algorithm::French,
            Language::Spanish => Algorithm::Spanish,
            Language::Italian => Algorithm::Italian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Dutch => Algorithm::Dutch,
            Language::Russian => Algorithm::Russian,
            Language::Swedish => Algorithm::Swedish,
        }
    }

    /// The stop-word list identifier for this language
    pub fn stop_words(&self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
            Language::Swedish => LANGUAGE::Swedish,
        }
    }

    /// The canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
            Language::Russian => "russian",
            Language::Swedish => "swedish",
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = LanguageError;

    /// Accepts full names and ISO 639-1 codes, case-insensitively
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "german" => Ok(Language::German),
            "fr" | "french" => Ok(Language::French),
            "es" | "spanish" => Ok(Language::Spanish),
            "it" | "italian" => Ok(Language::Italian),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            "nl" | "dutch" => Ok(Language::Dutch),
            "ru" | "russian" => Ok(Language::Russian),
            "sv" | "swedish" => Ok(Language::Swedish),
            _ => Err(LanguageError::Unknown(value.to_string())),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language Error
#[derive(thiserror::Error, Debug)]
pub enum LanguageError {
    /// No language found for the given string
    #[error("no language found for {0}")]
    Unknown(String),
}
