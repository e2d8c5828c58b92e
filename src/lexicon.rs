use std::collections::HashSet;

use rayon::prelude::*;
use wana_kana::IsJapaneseStr;

use crate::classifier::classify;
use crate::conjugator::Conjugator;
use crate::dictionary_data::{Dictionary, DictionaryForm, RawEntry, WordEntry};
use crate::errors::{ConjugationError, ConjugationResult, LexiconError, LexiconResult};
use crate::language::conjugation_d::{FormSet, Lexeme, WordGroup};
use crate::language::ja::romaji::Transliterator;
use crate::language::ja::stems::SURU_ENDING;
use crate::settings::LexiconOptions;

/// Raw entries fetched for one level (e.g. `"N5"`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelBatch {
    pub level: String,
    pub entries: Vec<RawEntry>,
}

impl LevelBatch {
    pub fn new(level: impl Into<String>, entries: Vec<RawEntry>) -> Self {
        Self {
            level: level.into(),
            entries,
        }
    }
}

/// A classified entry that failed generation and was left out of the lexicon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub level: String,
    pub kanji: String,
    pub kana: String,
    pub error: ConjugationError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]: {}", self.kanji, self.kana, self.level, self.error)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconReport {
    pub dictionary: Dictionary,
    pub rejections: Vec<Rejection>,
}

/// A classified entry waiting for its form set.
#[derive(Clone, Debug)]
struct Candidate {
    level: String,
    group: WordGroup,
    kanji: String,
    kana: String,
    meaning: String,
}

impl Candidate {
    fn from_raw(level: &str, raw: &RawEntry) -> Option<Self> {
        let Some(group) = classify(raw) else {
            log::debug!("skipping unclassified entry {}", raw.display_form());
            return None;
        };
        let mut kana = raw.reading();
        if kana.is_empty() {
            log::debug!("skipping {} without a reading", raw.display_form());
            return None;
        }
        let mut kanji = raw.display_form();
        if group == WordGroup::Suru {
            if !kana.ends_with(SURU_ENDING) {
                kana.push_str(SURU_ENDING);
            }
            if !kanji.ends_with(SURU_ENDING) {
                kanji.push_str(SURU_ENDING);
            }
        }
        Some(Self {
            level: level.to_string(),
            group,
            kanji,
            kana,
            meaning: raw.meaning(),
        })
    }

    fn generate(&self, conjugator: &Conjugator) -> ConjugationResult<FormSet> {
        let lexeme = Lexeme::new(self.kanji.as_str(), self.kana.as_str(), self.group)?;
        conjugator.generate(&lexeme)
    }
}

/// Turns classified lookup results into a [`Dictionary`].
#[derive(Clone, Debug, Default)]
pub struct LexiconBuilder {
    options: LexiconOptions,
    conjugator: Conjugator,
}

impl LexiconBuilder {
    pub fn new(options: LexiconOptions) -> Self {
        Self {
            options,
            conjugator: Conjugator::new(),
        }
    }

    pub fn with_conjugator(mut self, conjugator: Conjugator) -> Self {
        self.conjugator = conjugator;
        self
    }

    pub fn options(&self) -> &LexiconOptions {
        &self.options
    }

    /// Builds the lexicon from batches in order.
    ///
    /// Entries are deduplicated by reading (first success wins) and get
    /// identifiers in acceptance order. Lexemes that fail generation are
    /// reported in [`LexiconReport::rejections`]; an inconsistent exception
    /// table aborts the whole build.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(batches = batches.len())))]
    pub fn build(&self, batches: &[LevelBatch]) -> LexiconResult<LexiconReport> {
        if let Err(error) = self.conjugator.exceptions().validate() {
            log::error!("refusing to build with an inconsistent exception table: {error}");
            return Err(error.into());
        }

        let candidates: Vec<Candidate> = batches
            .iter()
            .flat_map(|batch| {
                batch
                    .entries
                    .iter()
                    .filter_map(|raw| Candidate::from_raw(&batch.level, raw))
            })
            .collect();

        let conjugator = &self.conjugator;
        let generated: Vec<ConjugationResult<FormSet>> = if *self.options.parallel() {
            candidates
                .par_iter()
                .map(|candidate| candidate.generate(conjugator))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| candidate.generate(conjugator))
                .collect()
        };

        let transliterator = Transliterator::new(self.options.transliteration().clone());
        let mut seen_kana: HashSet<String> = HashSet::new();
        let mut used_ids: HashSet<String> = HashSet::new();
        let mut words = Vec::new();
        let mut rejections = Vec::new();

        for (candidate, result) in candidates.into_iter().zip(generated) {
            if let Err(error) = &result {
                if error.is_fatal() {
                    log::error!("aborting lexicon build at {}: {error}", candidate.kanji);
                    return Err(LexiconError::Conjugation(error.clone()));
                }
            }
            if seen_kana.contains(&candidate.kana) {
                log::debug!("skipping duplicate {} ({})", candidate.kanji, candidate.kana);
                continue;
            }
            let conjugations = match result {
                Ok(conjugations) => conjugations,
                Err(error) => {
                    let rejection = Rejection {
                        level: candidate.level,
                        kanji: candidate.kanji,
                        kana: candidate.kana,
                        error,
                    };
                    log::warn!("rejected {rejection}");
                    rejections.push(rejection);
                    continue;
                }
            };

            if !candidate.kana.as_str().is_kana() {
                log::warn!(
                    "reading {} is not pure kana; its identifier keeps the other characters",
                    candidate.kana
                );
            }
            let romaji = transliterator.transliterate(&candidate.kana);
            let word_type = candidate.group.word_type();
            let id = unique_id(&mut used_ids, &format!("{}_{romaji}", word_type.id_prefix()));
            seen_kana.insert(candidate.kana.clone());
            words.push(WordEntry {
                id,
                level: candidate.level,
                group: candidate.group,
                word_type,
                dictionary_form: DictionaryForm {
                    kanji: candidate.kanji,
                    kana: candidate.kana,
                    romaji,
                },
                meaning: candidate.meaning,
                conjugations,
            });
        }

        let dictionary = Dictionary {
            version: self.options.version().clone(),
            words,
        };
        let summary = dictionary.summary();
        log::info!(
            "built lexicon with {} entries ({} rejected); by word type: {:?}; by level: {:?}",
            dictionary.words.len(),
            rejections.len(),
            summary.by_word_type,
            summary.by_level
        );
        Ok(LexiconReport {
            dictionary,
            rejections,
        })
    }
}

/// Returns `base`, or `base_2`, `base_3`, ... if taken, and records it.
fn unique_id(used: &mut HashSet<String>, base: &str) -> String {
    let mut id = base.to_string();
    let mut counter = 2;
    while used.contains(&id) {
        id = format!("{base}_{counter}");
        counter += 1;
    }
    used.insert(id.clone());
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unique_ids_count_from_two() {
        let mut used = HashSet::new();
        assert_eq!(unique_id(&mut used, "v_kaeru"), "v_kaeru");
        assert_eq!(unique_id(&mut used, "v_kaeru"), "v_kaeru_2");
        assert_eq!(unique_id(&mut used, "v_kaeru"), "v_kaeru_3");
        assert_eq!(unique_id(&mut used, "v_kau"), "v_kau");
    }
}
