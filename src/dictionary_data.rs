use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::errors::LexiconResult;
use crate::language::conjugation_d::{FormSet, WordGroup, WordType};

/// One page of results from the word lookup service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub data: Vec<RawEntry>,
}

impl RawPage {
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A word record as returned by the lookup service.
/// Only the fields the lexicon needs are kept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub japanese: Vec<RawJapanese>,
    #[serde(default)]
    pub senses: Vec<RawSense>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawJapanese {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSense {
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub english_definitions: Vec<String>,
}

impl RawEntry {
    fn primary(&self) -> Option<&RawJapanese> {
        self.japanese.first()
    }

    /// NFC-normalized reading of the primary form; empty if absent.
    pub fn reading(&self) -> String {
        self.primary()
            .and_then(|j| j.reading.as_deref())
            .map(|reading| reading.nfc().collect())
            .unwrap_or_default()
    }

    /// Display form of the primary form, falling back to the reading.
    pub fn display_form(&self) -> String {
        match self.primary().and_then(|j| j.word.as_deref()) {
            Some(word) => word.nfc().collect(),
            None => self.reading(),
        }
    }

    /// Parts of speech across all senses, in order.
    pub fn parts_of_speech(&self) -> impl Iterator<Item = &str> {
        self.senses
            .iter()
            .flat_map(|sense| sense.parts_of_speech.iter().map(String::as_str))
    }

    /// The first two definitions of the first sense that has any.
    pub fn meaning(&self) -> String {
        self.senses
            .iter()
            .find(|sense| !sense.english_definitions.is_empty())
            .map(|sense| {
                sense
                    .english_definitions
                    .iter()
                    .take(2)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryForm {
    pub kanji: String,
    pub kana: String,
    pub romaji: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    pub level: String,
    pub group: WordGroup,
    pub word_type: WordType,
    pub dictionary_form: DictionaryForm,
    pub meaning: String,
    pub conjugations: FormSet,
}

/// The generated lexicon document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub version: String,
    pub words: Vec<WordEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DictionarySummary {
    pub by_word_type: IndexMap<WordType, usize>,
    pub by_level: IndexMap<String, usize>,
}

impl Dictionary {
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON; non-ASCII text is written as-is.
    pub fn to_json(&self) -> LexiconResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> LexiconResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&WordEntry> {
        self.words.iter().find(|word| word.id == id)
    }

    pub fn find_by_kana(&self, kana: &str) -> Option<&WordEntry> {
        self.words
            .iter()
            .find(|word| word.dictionary_form.kana == kana)
    }

    pub fn summary(&self) -> DictionarySummary {
        let mut summary = DictionarySummary::default();
        for word in &self.words {
            *summary.by_word_type.entry(word.word_type).or_default() += 1;
            *summary.by_level.entry(word.level.clone()).or_default() += 1;
        }
        summary
    }
}
