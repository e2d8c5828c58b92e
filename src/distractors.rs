//! Plausible wrong answers for a conjugation drill.
//!
//! Candidates come from mistakes learners actually make: conjugating in the
//! wrong verb class, picking another te-form sound change, mixing up the two
//! adjective types, gluing an ending onto the dictionary form, and applying
//! the regular rule to an irregular word. The correct answer never appears,
//! and the order is deterministic; callers wanting variety shuffle it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::conjugator::Conjugator;
use crate::dictionary_data::WordEntry;
use crate::language::conjugation_d::{FormName, Lexeme, WordGroup};
use crate::language::ja::exceptions::ExceptionTable;
use crate::language::ja::japanese::split_last_char;
use crate::language::ja::stems::{GodanRow, Stem, ICHIDAN_ENDING};
use crate::language::ja::transforms::{
    realize_form, RuleTable, GODAN_RULES, ICHIDAN_RULES, I_ADJECTIVE_RULES, NA_ADJECTIVE_RULES,
};

pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// Other correct forms of the word are only added until this many
/// candidates exist.
pub const CANDIDATE_LIMIT: usize = 10;

/// Endings learners glue directly onto the dictionary form.
const NAIVE_ENDINGS: [(FormName, &str); 4] = [
    (FormName::Polite, "ます"),
    (FormName::NegativePlain, "ない"),
    (FormName::PastPlain, "た"),
    (FormName::TeForm, "て"),
];

/// The mistake a distractor imitates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistractorRule {
    /// godan-る conjugated as ichidan, or ichidan as godan-る.
    GroupConfusion,
    /// Another godan te-form sound change.
    TeSoundSwap,
    /// i-adjective endings on a na-adjective and vice versa.
    AdjectiveSwap,
    NaiveConcatenation,
    /// The regular rule applied to a word with an exception entry.
    RegularizedException,
    /// A correct surface of a different form.
    OtherForm,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distractor {
    pub surface: String,
    pub rule: DistractorRule,
}

struct Candidates<'a> {
    correct: &'a str,
    found: IndexMap<String, DistractorRule>,
}

impl Candidates<'_> {
    /// Keeps the first rule that produced a surface.
    fn push(&mut self, surface: Option<String>, rule: DistractorRule) {
        if let Some(surface) = surface.filter(|surface| surface.as_str() != self.correct) {
            self.found.entry(surface).or_insert(rule);
        }
    }
}

/// Every distractor for `form` of `word`, in rule order.
///
/// Empty when the word has no such form (e.g. the potential of an adjective).
pub fn distractor_candidates(word: &WordEntry, form: FormName) -> Vec<Distractor> {
    let Some(correct) = word.conjugations.form(form) else {
        log::debug!("{} has no {form} form", word.id);
        return Vec::new();
    };
    let kana = word.dictionary_form.kana.as_str();
    let mut candidates = Candidates {
        correct,
        found: IndexMap::new(),
    };

    candidates.push(
        as_confused_group(word.group, kana, form),
        DistractorRule::GroupConfusion,
    );
    if form == FormName::TeForm && word.group == WordGroup::Godan {
        if let Some((stem, _)) = split_last_char(kana) {
            for row in GodanRow::ALL {
                let te = row.te_ta().0;
                candidates.push(Some(format!("{stem}{te}")), DistractorRule::TeSoundSwap);
            }
        }
    }
    candidates.push(
        as_other_adjective(word.group, kana, form),
        DistractorRule::AdjectiveSwap,
    );
    let naive = NAIVE_ENDINGS
        .iter()
        .find(|(name, _)| *name == form)
        .map(|(_, ending)| format!("{kana}{ending}"));
    candidates.push(naive, DistractorRule::NaiveConcatenation);
    candidates.push(regularized(word, form), DistractorRule::RegularizedException);

    for surface in word.conjugations.values() {
        if candidates.found.len() >= CANDIDATE_LIMIT {
            break;
        }
        candidates.push(Some(surface.clone()), DistractorRule::OtherForm);
    }

    candidates
        .found
        .into_iter()
        .map(|(surface, rule)| Distractor { surface, rule })
        .collect()
}

/// The first `count` distractor surfaces for `form` of `word`.
pub fn pick_distractors(word: &WordEntry, form: FormName, count: usize) -> Vec<String> {
    distractor_candidates(word, form)
        .into_iter()
        .take(count)
        .map(|distractor| distractor.surface)
        .collect()
}

fn as_confused_group(group: WordGroup, kana: &str, form: FormName) -> Option<String> {
    let base = kana.strip_suffix(ICHIDAN_ENDING)?;
    let (table, row): (&RuleTable, Option<GodanRow>) = match group {
        WordGroup::Godan => (&ICHIDAN_RULES[..], None),
        WordGroup::Ichidan => (&GODAN_RULES[..], Some(GodanRow::R)),
        _ => return None,
    };
    let stem = Stem {
        dictionary: kana,
        base,
        row,
    };
    realize_form(table, &stem, base, form)
}

/// Na-adjective endings on the whole i-adjective reading, or i-adjective
/// endings on the na-adjective reading.
fn as_other_adjective(group: WordGroup, kana: &str, form: FormName) -> Option<String> {
    let table: &RuleTable = match group {
        WordGroup::IAdjective => &NA_ADJECTIVE_RULES[..],
        WordGroup::NaAdjective => &I_ADJECTIVE_RULES[..],
        _ => return None,
    };
    let stem = Stem {
        dictionary: kana,
        base: kana,
        row: None,
    };
    realize_form(table, &stem, kana, form)
}

fn regularized(word: &WordEntry, form: FormName) -> Option<String> {
    let lexeme = Lexeme::new(
        word.dictionary_form.kanji.as_str(),
        word.dictionary_form.kana.as_str(),
        word.group,
    )
    .ok()?;
    ExceptionTable::builtin().lookup(&lexeme)?;
    let regular = Conjugator::with_exceptions(ExceptionTable::default())
        .generate(&lexeme)
        .ok()?;
    regular.form(form).map(str::to_string)
}
