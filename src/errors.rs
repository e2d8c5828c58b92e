use thiserror::Error;

use crate::language::conjugation_d::WordGroup;

/// Returns `T` or [ConjugationError]
pub type ConjugationResult<T> = Result<T, ConjugationError>;

/// Why a lexeme could not be conjugated.
///
/// A failure concerns exactly one lexeme; batch callers decide whether to
/// skip-and-report or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConjugationError {
    #[error("invalid {group} lexeme `{kana}`: {reason}")]
    InvalidLexeme {
        kana: String,
        group: WordGroup,
        reason: String,
    },
    #[error("unsupported godan row: `{kana}` ends in `{ending}`")]
    UnsupportedGodanRow { kana: String, ending: char },
    /// The exception table contradicts the class rules it overrides.
    #[error("inconsistent exception data for `{trigger}`: {reason}")]
    InconsistentExceptionData { trigger: String, reason: String },
}

impl ConjugationError {
    /// Only authoring bugs in the exception table are fatal for a batch.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConjugationError::InconsistentExceptionData { .. })
    }
}

/// Returns `T` or [LexiconError]
pub type LexiconResult<T> = Result<T, LexiconError>;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("json err: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io err: {0}")]
    Io(#[from] std::io::Error),
    #[error("conjugation err: {0}")]
    Conjugation(#[from] ConjugationError),
}
