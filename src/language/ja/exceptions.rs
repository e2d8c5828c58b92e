//! Irregular lexemes whose forms the regular rules get wrong.
//!
//! An entry overrides individual fields (or substitutes the stem the regular
//! rules run on); every field it leaves alone is still derived from the
//! lexeme's declared class. Entries are matched on the exact reading, so a
//! compound ending in an irregular word is not covered.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ConjugationError, ConjugationResult};
use crate::language::conjugation_d::{ConjugationClass, FormName, Lexeme, WordGroup};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    /// Reading this entry applies to.
    pub trigger: String,
    /// Class the entry was authored against.
    pub group: WordGroup,
    /// Replaces the regular stem for every stem-based form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
    /// Literal surface forms.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub forms: IndexMap<FormName, String>,
}

impl ExceptionEntry {
    pub fn new(trigger: &str, group: WordGroup) -> Self {
        Self {
            trigger: trigger.to_string(),
            group,
            stem: None,
            forms: IndexMap::new(),
        }
    }

    pub fn with_stem(mut self, stem: &str) -> Self {
        self.stem = Some(stem.to_string());
        self
    }

    pub fn with_form(mut self, form: FormName, surface: &str) -> Self {
        self.forms.insert(form, surface.to_string());
        self
    }

    pub fn form(&self, form: FormName) -> Option<&str> {
        self.forms.get(&form).map(String::as_str)
    }

    /// Checks that this entry fits the shape of the class it names.
    pub fn check(&self) -> ConjugationResult<()> {
        let inconsistent = |reason: String| ConjugationError::InconsistentExceptionData {
            trigger: self.trigger.clone(),
            reason,
        };
        ConjugationClass::resolve(self.group, &self.trigger)
            .map_err(|e| inconsistent(format!("trigger is not a valid {} reading: {e}", self.group)))?;
        let allowed = self.group.word_type().forms();
        if let Some(form) = self.forms.keys().find(|form| !allowed.contains(form)) {
            return Err(inconsistent(format!("{} has no {form} form", self.group)));
        }
        if self.stem.is_some()
            && !matches!(
                self.group,
                WordGroup::Ichidan | WordGroup::Godan | WordGroup::IAdjective
            )
        {
            return Err(inconsistent(format!("{} has no substitutable stem", self.group)));
        }
        if self.stem.is_none() && self.forms.is_empty() {
            return Err(inconsistent("entry overrides nothing".to_string()));
        }
        Ok(())
    }
}

/// Exception entries keyed by reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExceptionTable(IndexMap<String, ExceptionEntry>);

pub static BUILTIN_EXCEPTIONS: LazyLock<ExceptionTable> = LazyLock::new(|| {
    ExceptionTable::new([
        // 行く: godan-k, but its te/ta forms follow the っ pattern.
        ExceptionEntry::new("いく", WordGroup::Godan)
            .with_form(FormName::TeForm, "いって")
            .with_form(FormName::PastPlain, "いった"),
        ExceptionEntry::new("ゆく", WordGroup::Godan)
            .with_form(FormName::TeForm, "ゆって")
            .with_form(FormName::PastPlain, "ゆった"),
        // ある: the plain negative is suppletive.
        ExceptionEntry::new("ある", WordGroup::Godan)
            .with_form(FormName::NegativePlain, "ない")
            .with_form(FormName::PastNegativePlain, "なかった"),
        ExceptionEntry::new("いい", WordGroup::IAdjective).with_stem("よ"),
        ExceptionEntry::new("よい", WordGroup::IAdjective).with_stem("よ"),
        ExceptionEntry::new("かっこいい", WordGroup::IAdjective).with_stem("かっこよ"),
    ])
});

impl ExceptionTable {
    pub fn new(entries: impl IntoIterator<Item = ExceptionEntry>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|entry| (entry.trigger.clone(), entry))
                .collect(),
        )
    }

    pub fn builtin() -> &'static ExceptionTable {
        &BUILTIN_EXCEPTIONS
    }

    /// Loads additional entries from a JSON array of [`ExceptionEntry`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<ExceptionEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Adds (or replaces) the entries of `other`.
    pub fn extend(&mut self, other: ExceptionTable) {
        self.0.extend(other.0);
    }

    pub fn get(&self, kana: &str) -> Option<&ExceptionEntry> {
        self.0.get(kana)
    }

    /// The entry for `lexeme`, if its reading matches one and the entry was
    /// authored for the lexeme's class.
    pub fn lookup(&self, lexeme: &Lexeme) -> Option<&ExceptionEntry> {
        let entry = self.get(&lexeme.kana)?;
        if entry.group != lexeme.class.group() {
            log::debug!(
                "exception for {} is authored for {}, lexeme is {}",
                entry.trigger,
                entry.group,
                lexeme.class.group()
            );
            return None;
        }
        Some(entry)
    }

    pub fn validate(&self) -> ConjugationResult<()> {
        self.0.values().try_for_each(ExceptionEntry::check)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
