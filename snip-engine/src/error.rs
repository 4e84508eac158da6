//! Error types for parsing, expansion and indexing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnippetError>;

/// Errors that can occur while loading or expanding snippets
///
/// Every variant is local to one block or one `expand` call; callers are
/// expected to report it and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnippetError {
    /// A definition block could not be decomposed into trigger + chunks
    #[error("malformed definition at line {line} ({trigger}): {reason}")]
    MalformedDefinition {
        line: usize,
        trigger: String,
        reason: String,
    },

    /// A filter segment names a filter that is not registered
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    /// A token has no binding and the context runs in strict mode
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    /// The index already holds a snippet with this trigger in this language
    #[error("duplicate trigger '{trigger}' for language '{language}'")]
    DuplicateTrigger { language: String, trigger: String },
}

impl SnippetError {
    pub fn malformed(line: usize, trigger: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDefinition {
            line,
            trigger: trigger.into(),
            reason: reason.into(),
        }
    }

    /// Source line the error points at, for parse-time errors
    pub fn line(&self) -> Option<usize> {
        match self {
            SnippetError::MalformedDefinition { line, .. } => Some(*line),
            _ => None,
        }
    }
}
