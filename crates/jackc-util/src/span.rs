//! Source location tracking.
//!
//! The compiler only ever surfaces a line number in a diagnostic (per
//! the core's Non-goal: no source-position detail beyond a line), but
//! `Span` carries the fuller byte-offset range so the type is not a
//! special case next to the rest of this crate's infrastructure.

/// A half-open byte range into a single source file, plus the 1-based
/// line on which it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// A span with no useful location, used for synthesized tokens
    /// (e.g. the EOF sentinel) that never appear in a diagnostic.
    pub const DUMMY: Span = Span { start: 0, end: 0, line: 0 };
}

/// A file name, kept alongside the source text for diagnostics. The
/// compiler processes one file at a time, so this is just a label, not
/// an interned handle into a multi-file source map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileId(pub String);

impl FileId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FileId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
