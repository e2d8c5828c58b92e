//! Stem derivation for each [`ConjugationClass`].
//!
//! Every class checks its reading against the class precondition before a
//! stem is handed to the suffix rules, so a mismatched lexeme fails here and
//! never yields a partial [`FormSet`](crate::language::conjugation_d::FormSet).

use serde::{Deserialize, Serialize};

use super::japanese::split_last_char;
use crate::errors::{ConjugationError, ConjugationResult};
use crate::language::conjugation_d::{ConjugationClass, WordGroup};

pub const ICHIDAN_ENDING: &str = "る";
pub const SURU_ENDING: &str = "する";
pub const KURU_ENDING: &str = "くる";
pub const I_ADJECTIVE_ENDING: &str = "い";

/// Consonant row of a godan verb, named after its dictionary-form ending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GodanRow {
    U,
    K,
    G,
    S,
    T,
    N,
    B,
    M,
    R,
}

impl GodanRow {
    #[rustfmt::skip]
    pub const ALL: [GodanRow; 9] = [
        GodanRow::U, GodanRow::K, GodanRow::G, GodanRow::S, GodanRow::T,
        GodanRow::N, GodanRow::B, GodanRow::M, GodanRow::R,
    ];

    pub fn from_ending(ending: char) -> Option<Self> {
        GodanRow::ALL.into_iter().find(|row| row.ending() == ending)
    }

    /// The `u`-column kana a dictionary form of this row ends in.
    pub fn ending(&self) -> char {
        match self {
            GodanRow::U => 'う',
            GodanRow::K => 'く',
            GodanRow::G => 'ぐ',
            GodanRow::S => 'す',
            GodanRow::T => 'つ',
            GodanRow::N => 'ぬ',
            GodanRow::B => 'ぶ',
            GodanRow::M => 'む',
            GodanRow::R => 'る',
        }
    }
}

/// The invariant part of a reading, as the suffix rules consume it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stem<'a> {
    /// The unmodified reading.
    pub dictionary: &'a str,
    /// Stem for ichidan/godan/i-adjectives, prefix for suru/kuru compounds,
    /// the whole reading for na-adjectives.
    pub base: &'a str,
    pub row: Option<GodanRow>,
}

fn invalid(kana: &str, group: WordGroup, reason: impl Into<String>) -> ConjugationError {
    ConjugationError::InvalidLexeme {
        kana: kana.to_string(),
        group,
        reason: reason.into(),
    }
}

fn godan_row(kana: &str) -> ConjugationResult<(&str, GodanRow)> {
    let (stem, ending) =
        split_last_char(kana).ok_or_else(|| invalid(kana, WordGroup::Godan, "reading is empty"))?;
    let row = GodanRow::from_ending(ending).ok_or_else(|| ConjugationError::UnsupportedGodanRow {
        kana: kana.to_string(),
        ending,
    })?;
    Ok((stem, row))
}

fn strip_ending<'a>(kana: &'a str, ending: &str, group: WordGroup) -> ConjugationResult<&'a str> {
    kana.strip_suffix(ending)
        .ok_or_else(|| invalid(kana, group, format!("reading must end in {ending}")))
}

impl ConjugationClass {
    /// Derives the class of a reading from its classifier group.
    pub fn resolve(group: WordGroup, kana: &str) -> ConjugationResult<Self> {
        if kana.is_empty() {
            return Err(invalid(kana, group, "reading is empty"));
        }
        let class = match group {
            WordGroup::Ichidan => {
                strip_ending(kana, ICHIDAN_ENDING, group)?;
                ConjugationClass::Ichidan
            }
            WordGroup::Godan => ConjugationClass::Godan(godan_row(kana)?.1),
            WordGroup::Suru => ConjugationClass::SuruCompound {
                prefix: strip_ending(kana, SURU_ENDING, group)?.to_string(),
            },
            WordGroup::Kuru => ConjugationClass::Kuru {
                prefix: strip_ending(kana, KURU_ENDING, group)?.to_string(),
            },
            WordGroup::IAdjective => {
                strip_ending(kana, I_ADJECTIVE_ENDING, group)?;
                ConjugationClass::IAdjective
            }
            WordGroup::NaAdjective => ConjugationClass::NaAdjective,
        };
        Ok(class)
    }

    /// Splits `kana` into the stem this class conjugates from, failing when
    /// the reading does not satisfy the class precondition.
    pub fn stem<'a>(&self, kana: &'a str) -> ConjugationResult<Stem<'a>> {
        let group = self.group();
        if kana.is_empty() {
            return Err(invalid(kana, group, "reading is empty"));
        }
        let (base, row) = match self {
            ConjugationClass::Ichidan => (strip_ending(kana, ICHIDAN_ENDING, group)?, None),
            ConjugationClass::Godan(declared) => {
                let (stem, row) = godan_row(kana)?;
                if row != *declared {
                    return Err(invalid(
                        kana,
                        group,
                        format!("declared row {} but reading ends in {}", declared.ending(), row.ending()),
                    ));
                }
                (stem, Some(row))
            }
            ConjugationClass::SuruCompound { prefix } | ConjugationClass::Kuru { prefix } => {
                let ending = match self {
                    ConjugationClass::Kuru { .. } => KURU_ENDING,
                    _ => SURU_ENDING,
                };
                let stripped = strip_ending(kana, ending, group)?;
                if stripped != prefix {
                    return Err(invalid(
                        kana,
                        group,
                        format!("declared prefix {prefix} does not match the reading"),
                    ));
                }
                (stripped, None)
            }
            ConjugationClass::IAdjective => (strip_ending(kana, I_ADJECTIVE_ENDING, group)?, None),
            ConjugationClass::NaAdjective => (kana, None),
        };
        Ok(Stem {
            dictionary: kana,
            base,
            row,
        })
    }
}
