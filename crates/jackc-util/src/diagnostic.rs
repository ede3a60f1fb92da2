//! Diagnostic types shared by every compilation phase.

use crate::span::{FileId, Span};
use std::fmt;

/// Diagnostic severity. The compiler never recovers from an error, so
/// in practice every diagnostic this crate ever builds is `Error`, but
/// the level is kept distinct from the payload the way the rest of the
/// workspace's diagnostics do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A short, stable code categorizing a diagnostic: `E1xxx` lexical,
/// `E2xxx` syntax, `E3xxx` semantic, `E4xxx` I/O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticCode(pub &'static str);

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const E_LEX_BAD_CHAR: DiagnosticCode = DiagnosticCode("E1001");
pub const E_LEX_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode("E1002");
pub const E_LEX_UNTERMINATED_COMMENT: DiagnosticCode = DiagnosticCode("E1003");
pub const E_LEX_INT_OUT_OF_RANGE: DiagnosticCode = DiagnosticCode("E1004");
pub const E_SYNTAX_UNEXPECTED_TOKEN: DiagnosticCode = DiagnosticCode("E2001");
pub const E_SEMA_UNDECLARED: DiagnosticCode = DiagnosticCode("E3001");
pub const E_SEMA_REDECLARED: DiagnosticCode = DiagnosticCode("E3002");
pub const E_SEMA_NO_RECEIVER: DiagnosticCode = DiagnosticCode("E3003");

/// A single diagnostic message, carrying only the file and line number
/// per the core's Non-goal against richer source-position output.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub code: DiagnosticCode,
    pub message: String,
    pub file: FileId,
    pub line: u32,
}

impl Diagnostic {
    pub fn error(
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
        file: impl Into<FileId>,
    ) -> Self {
        DiagnosticBuilder::error(code, message).span(span).file(file).build()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}:{}: {}", self.level, self.code, self.file, self.line, self.message)
    }
}

/// Fluent construction of a [`Diagnostic`], mirroring the core's
/// builder-based diagnostic assembly without the source-snippet,
/// note, and help machinery a richer frontend would carry — this
/// compiler surfaces only a code, a file, a line, and a message.
pub struct DiagnosticBuilder {
    level: Level,
    code: DiagnosticCode,
    message: String,
    file: FileId,
    line: u32,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self { level, code, message: message.into(), file: FileId::new(""), line: 0 }
    }

    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Level::Error, code, message)
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Level::Warning, code, message)
    }

    pub fn span(mut self, span: Span) -> Self {
        self.line = span.line;
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn file(mut self, file: impl Into<FileId>) -> Self {
        self.file = file.into();
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic { level: self.level, code: self.code, message: self.message, file: self.file, line: self.line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_the_same_diagnostic_as_the_constructor() {
        let via_ctor = Diagnostic::error(E_LEX_BAD_CHAR, "bad", Span::new(0, 0, 3), "a.jack");
        let via_builder =
            DiagnosticBuilder::error(E_LEX_BAD_CHAR, "bad").line(3).file("a.jack").build();
        assert_eq!(via_ctor.line, via_builder.line);
        assert_eq!(via_ctor.file, via_builder.file);
        assert_eq!(via_ctor.code, via_builder.code);
    }
}
