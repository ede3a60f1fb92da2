//! The shared error type every compilation phase raises.

use crate::diagnostic::Diagnostic;
use crate::span::FileId;
use thiserror::Error;

/// The single error type threaded through lexing, symbol resolution,
/// and parsing/codegen. Each variant wraps the categorized
/// [`Diagnostic`] the phase built; `Io` is the one case an ambient CLI
/// needs that the core phases don't raise themselves.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{0}")]
    Lex(Diagnostic),

    #[error("{0}")]
    Syntax(Diagnostic),

    #[error("{0}")]
    Semantic(Diagnostic),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CompileError {
    /// The line number of the underlying diagnostic, if any (absent
    /// only for `Io`, which has no source position).
    pub fn line(&self) -> Option<u32> {
        match self {
            CompileError::Lex(d) | CompileError::Syntax(d) | CompileError::Semantic(d) => {
                Some(d.line)
            }
            CompileError::Io(_) => None,
        }
    }

    /// The source file the underlying diagnostic was raised against, if
    /// any (absent only for `Io`, which has no associated `FileId`).
    pub fn file(&self) -> Option<&FileId> {
        match self {
            CompileError::Lex(d) | CompileError::Syntax(d) | CompileError::Semantic(d) => {
                Some(&d.file)
            }
            CompileError::Io(_) => None,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
