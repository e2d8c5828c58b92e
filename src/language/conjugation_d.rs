use derive_more::derive::Deref;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ja::stems::GodanRow;
use crate::errors::ConjugationResult;

/// Name of a derived surface form.
///
/// The serialized names are the stable key contract of every [`FormSet`];
/// renaming a variant breaks compatibility with previously written lexicons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormName {
    Polite,
    NegativePlain,
    NegativePolite,
    PastPlain,
    PastPolite,
    PastNegativePlain,
    PastNegativePolite,
    TeForm,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Imperative,
    Volitional,
    ConditionalBa,
    ConditionalTara,
}

impl FormName {
    /// Every form a verb produces, in canonical order.
    #[rustfmt::skip]
    pub const VERB: [FormName; 16] = [
        FormName::Polite, FormName::NegativePlain, FormName::NegativePolite,
        FormName::PastPlain, FormName::PastPolite, FormName::PastNegativePlain,
        FormName::PastNegativePolite, FormName::TeForm, FormName::Potential,
        FormName::Passive, FormName::Causative, FormName::CausativePassive,
        FormName::Imperative, FormName::Volitional, FormName::ConditionalBa,
        FormName::ConditionalTara,
    ];

    /// Adjectives have no potential, passive, causative, causative-passive,
    /// imperative or volitional.
    #[rustfmt::skip]
    pub const ADJECTIVE: [FormName; 10] = [
        FormName::Polite, FormName::NegativePlain, FormName::NegativePolite,
        FormName::PastPlain, FormName::PastPolite, FormName::PastNegativePlain,
        FormName::PastNegativePolite, FormName::TeForm, FormName::ConditionalBa,
        FormName::ConditionalTara,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormName::Polite => "polite",
            FormName::NegativePlain => "negative_plain",
            FormName::NegativePolite => "negative_polite",
            FormName::PastPlain => "past_plain",
            FormName::PastPolite => "past_polite",
            FormName::PastNegativePlain => "past_negative_plain",
            FormName::PastNegativePolite => "past_negative_polite",
            FormName::TeForm => "te_form",
            FormName::Potential => "potential",
            FormName::Passive => "passive",
            FormName::Causative => "causative",
            FormName::CausativePassive => "causative_passive",
            FormName::Imperative => "imperative",
            FormName::Volitional => "volitional",
            FormName::ConditionalBa => "conditional_ba",
            FormName::ConditionalTara => "conditional_tara",
        }
    }
}

impl std::fmt::Display for FormName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The derived forms of one lexeme.
///
/// Verbs carry all sixteen keys and adjectives ten; an inapplicable form is
/// an absent key, never an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Deref)]
#[serde(transparent)]
pub struct FormSet(IndexMap<FormName, String>);

impl FormSet {
    pub fn form(&self, name: FormName) -> Option<&str> {
        self.0.get(&name).map(String::as_str)
    }
}

impl FromIterator<(FormName, String)> for FormSet {
    fn from_iter<I: IntoIterator<Item = (FormName, String)>>(iter: I) -> Self {
        FormSet(iter.into_iter().collect())
    }
}

/// Conjugation group as reported by the part-of-speech classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordGroup {
    #[serde(rename = "godan")]
    Godan,
    #[serde(rename = "ichidan")]
    Ichidan,
    #[serde(rename = "suru")]
    Suru,
    #[serde(rename = "kuru")]
    Kuru,
    #[serde(rename = "i-adj")]
    IAdjective,
    #[serde(rename = "na-adj")]
    NaAdjective,
}

impl WordGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordGroup::Godan => "godan",
            WordGroup::Ichidan => "ichidan",
            WordGroup::Suru => "suru",
            WordGroup::Kuru => "kuru",
            WordGroup::IAdjective => "i-adj",
            WordGroup::NaAdjective => "na-adj",
        }
    }

    pub fn word_type(&self) -> WordType {
        match self {
            WordGroup::IAdjective => WordType::IAdjective,
            WordGroup::NaAdjective => WordType::NaAdjective,
            _ => WordType::Verb,
        }
    }
}

impl std::fmt::Display for WordGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordType {
    #[serde(rename = "verb")]
    Verb,
    #[serde(rename = "i-adj")]
    IAdjective,
    #[serde(rename = "na-adj")]
    NaAdjective,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Verb => "verb",
            WordType::IAdjective => "i-adj",
            WordType::NaAdjective => "na-adj",
        }
    }

    /// Prefix of the identifiers assigned to words of this type.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            WordType::Verb => "v",
            WordType::IAdjective => "ia",
            WordType::NaAdjective => "na",
        }
    }

    pub fn forms(&self) -> &'static [FormName] {
        match self {
            WordType::Verb => &FormName::VERB,
            WordType::IAdjective | WordType::NaAdjective => &FormName::ADJECTIVE,
        }
    }
}

impl std::fmt::Display for WordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical class of a word, carrying only the metadata its rule needs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationClass {
    Ichidan,
    Godan(GodanRow),
    SuruCompound { prefix: String },
    Kuru { prefix: String },
    IAdjective,
    NaAdjective,
}

impl ConjugationClass {
    pub fn group(&self) -> WordGroup {
        match self {
            ConjugationClass::Ichidan => WordGroup::Ichidan,
            ConjugationClass::Godan(_) => WordGroup::Godan,
            ConjugationClass::SuruCompound { .. } => WordGroup::Suru,
            ConjugationClass::Kuru { .. } => WordGroup::Kuru,
            ConjugationClass::IAdjective => WordGroup::IAdjective,
            ConjugationClass::NaAdjective => WordGroup::NaAdjective,
        }
    }

    pub fn word_type(&self) -> WordType {
        self.group().word_type()
    }

    pub fn forms(&self) -> &'static [FormName] {
        self.word_type().forms()
    }
}

/// A word to conjugate: display form, canonical reading and class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lexeme {
    /// Display form; equals `kana` for words written without kanji.
    pub kanji: String,
    pub kana: String,
    pub class: ConjugationClass,
}

impl Lexeme {
    /// Builds a lexeme from a classified entry, deriving the class metadata
    /// (godan row, suru/kuru prefix) from the reading.
    pub fn new(
        kanji: impl Into<String>,
        kana: impl Into<String>,
        group: WordGroup,
    ) -> ConjugationResult<Self> {
        let kana = kana.into();
        let class = ConjugationClass::resolve(group, &kana)?;
        Ok(Self {
            kanji: kanji.into(),
            kana,
            class,
        })
    }
}
