use getset::{Getters, Setters};
use serde::{Deserialize, Serialize};

use crate::errors::LexiconResult;

/// Version string written into every generated lexicon.
pub const LEXICON_FORMAT_VERSION: &str = "2.0";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct TransliterationOptions {
    /// Shift katakana into hiragana before romanizing.
    /// `ー` survives the shift and is dropped as usual.
    fold_katakana: bool,
}

impl TransliterationOptions {
    pub fn new(fold_katakana: bool) -> Self {
        Self { fold_katakana }
    }
}

/// Options for building a lexicon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct LexiconOptions {
    version: String,
    /// Generate form sets on the rayon pool.
    parallel: bool,
    transliteration: TransliterationOptions,
}

impl Default for LexiconOptions {
    fn default() -> Self {
        Self {
            version: LEXICON_FORMAT_VERSION.to_string(),
            parallel: true,
            transliteration: TransliterationOptions::default(),
        }
    }
}

impl LexiconOptions {
    /// Reads options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> LexiconResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
