//! Conjugation tables and romanized identifiers for a Japanese learner's lexicon.
//!
//! A [`Lexeme`] (display form, reading and [`ConjugationClass`]) is turned into
//! a fixed [`FormSet`] by the [`Conjugator`]; readings are romanized by
//! [`kana_to_romaji`]. Both are pure functions over static tables.
//!
//! ```
//! use katachi_rs::{Conjugator, FormName, Lexeme, WordGroup};
//!
//! let lexeme = Lexeme::new("帰る", "かえる", WordGroup::Godan).unwrap();
//! let forms = Conjugator::new().generate(&lexeme).unwrap();
//! assert_eq!(forms.form(FormName::TeForm), Some("かえって"));
//! assert_eq!(katachi_rs::kana_to_romaji("かえる"), "kaeru");
//! ```
pub mod classifier;
pub mod conjugator;
pub mod dictionary_data;
pub mod distractors;
pub mod errors;
pub mod language;
pub mod lexicon;
pub mod settings;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

pub use classifier::classify;
pub use conjugator::Conjugator;
pub use dictionary_data::{Dictionary, DictionaryForm, RawEntry, RawPage, WordEntry};
pub use distractors::{distractor_candidates, pick_distractors, Distractor, DistractorRule};
pub use errors::{ConjugationError, ConjugationResult, LexiconError, LexiconResult};
pub use language::conjugation_d::{ConjugationClass, FormName, FormSet, Lexeme, WordGroup, WordType};
pub use language::ja::exceptions::{ExceptionEntry, ExceptionTable};
pub use language::ja::romaji::{kana_to_romaji, Transliterator};
pub use language::ja::stems::GodanRow;
pub use lexicon::{LevelBatch, LexiconBuilder, LexiconReport, Rejection};
pub use settings::{LexiconOptions, TransliterationOptions};
