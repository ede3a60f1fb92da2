//! jackc-util - shared source-location, interning, and diagnostic types.
//!
//! Every other crate in this workspace depends on this one for the
//! vocabulary used to talk about "where in the source" and "what went
//! wrong": [`Span`]/[`FileId`] for location, [`Symbol`] for interned
//! identifiers, and [`Diagnostic`]/[`CompileError`] for reporting.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level};
pub use error::{CompileError, CompileResult};
pub use span::{FileId, Span};
pub use symbol::Symbol;
