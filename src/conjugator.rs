use std::borrow::Cow;

use rayon::prelude::*;

use crate::errors::{ConjugationError, ConjugationResult};
use crate::language::conjugation_d::{FormName, FormSet, Lexeme};
use crate::language::ja::exceptions::ExceptionTable;
use crate::language::ja::transforms::rules;

/// Derives the [`FormSet`] of a [`Lexeme`].
///
/// The exception table is consulted first; any field it does not override
/// comes from the regular rules of the lexeme's class. Generation is pure, so
/// one `Conjugator` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Conjugator {
    exceptions: Cow<'static, ExceptionTable>,
}

impl Default for Conjugator {
    fn default() -> Self {
        Self::new()
    }
}

impl Conjugator {
    /// A conjugator using the built-in exception table.
    pub fn new() -> Self {
        Self {
            exceptions: Cow::Borrowed(ExceptionTable::builtin()),
        }
    }

    /// A conjugator using only `exceptions`; the built-in entries are not
    /// consulted. See [`Conjugator::with_additional_exceptions`] to keep them.
    pub fn with_exceptions(exceptions: ExceptionTable) -> Self {
        Self {
            exceptions: Cow::Owned(exceptions),
        }
    }

    /// The built-in table extended by `extra`; an entry in `extra` replaces a
    /// built-in entry with the same trigger.
    pub fn with_additional_exceptions(extra: ExceptionTable) -> Self {
        let mut exceptions = ExceptionTable::builtin().clone();
        exceptions.extend(extra);
        Self::with_exceptions(exceptions)
    }

    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    /// Generates every form of `lexeme`.
    ///
    /// Fails without a partial result when the reading violates the class
    /// precondition or the matching exception entry contradicts the class.
    pub fn generate(&self, lexeme: &Lexeme) -> ConjugationResult<FormSet> {
        let stem = lexeme.class.stem(&lexeme.kana)?;
        let exception = self.exceptions.lookup(lexeme);
        if let Some(entry) = exception {
            entry.check()?;
            log::debug!("applying exception entry for {}", entry.trigger);
        }
        let base = exception
            .and_then(|entry| entry.stem.as_deref())
            .unwrap_or(stem.base);

        let table = rules(&lexeme.class);
        let mut forms: Vec<(FormName, String)> = Vec::with_capacity(table.len());
        for &(form, ending) in table {
            if let Some(literal) = exception.and_then(|entry| entry.form(form)) {
                forms.push((form, literal.to_string()));
                continue;
            }
            let past = forms
                .iter()
                .find(|(name, _)| *name == FormName::PastPlain)
                .map(|(_, surface)| surface.as_str());
            let surface = ending.realize(&stem, base, past).ok_or_else(|| {
                ConjugationError::InvalidLexeme {
                    kana: lexeme.kana.clone(),
                    group: lexeme.class.group(),
                    reason: format!("{form} cannot be derived for this class"),
                }
            })?;
            forms.push((form, surface));
        }
        Ok(forms.into_iter().collect())
    }

    /// Generates form sets for independent lexemes on the rayon pool.
    /// Results are returned in input order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(count = lexemes.len())))]
    pub fn generate_all(&self, lexemes: &[Lexeme]) -> Vec<ConjugationResult<FormSet>> {
        lexemes.par_iter().map(|lexeme| self.generate(lexeme)).collect()
    }
}
