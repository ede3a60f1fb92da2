//! jackc-codegen - the VM instruction buffer and label allocator.
//!
//! The parser calls straight into an [`Emitter`] as it recognizes each
//! construct; there is no intermediate representation to walk later.
//! An `Emitter` is scoped to one class: it owns the output buffer and
//! the class's monotonic label counter, and is discarded once the
//! class's `.vm` text has been taken out of it.

use jackc_util::Symbol;
use std::fmt;

/// A VM memory segment, named exactly as the output format requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Constant,
    Argument,
    Local,
    Static,
    This,
    That,
    Pointer,
    Temp,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Segment::Constant => "constant",
            Segment::Argument => "argument",
            Segment::Local => "local",
            Segment::Static => "static",
            Segment::This => "this",
            Segment::That => "that",
            Segment::Pointer => "pointer",
            Segment::Temp => "temp",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binary {
    Add,
    Sub,
    And,
    Or,
    Lt,
    Gt,
    Eq,
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Binary::Add => "add",
            Binary::Sub => "sub",
            Binary::And => "and",
            Binary::Or => "or",
            Binary::Lt => "lt",
            Binary::Gt => "gt",
            Binary::Eq => "eq",
        };
        write!(f, "{s}")
    }
}

/// `temp 0`, used by the codegen rules for let-array spills and `do`
/// return-value discards — named here so callers never hand-write the
/// segment/index pair.
pub const TEMP_SPILL: (Segment, u16) = (Segment::Temp, 0);

/// The four label prefixes the output format allows, shared by one
/// monotonic per-class counter (see the emission contract: `IF_FALSE_0`
/// then `IF_END_1` for the same `if`, not independent counters per
/// prefix).
#[derive(Clone, Copy, Debug)]
pub enum LabelKind {
    IfFalse,
    IfEnd,
    WhileLoop,
    WhileEnd,
}

impl LabelKind {
    fn prefix(self) -> &'static str {
        match self {
            LabelKind::IfFalse => "IF_FALSE",
            LabelKind::IfEnd => "IF_END",
            LabelKind::WhileLoop => "WHILE_LOOP",
            LabelKind::WhileEnd => "WHILE_END",
        }
    }
}

pub struct Emitter {
    lines: Vec<String>,
    label_counter: u32,
}

impl Emitter {
    pub fn new() -> Self {
        Self { lines: Vec::new(), label_counter: 0 }
    }

    pub fn new_label(&mut self, kind: LabelKind) -> String {
        let label = format!("{}_{}", kind.prefix(), self.label_counter);
        self.label_counter += 1;
        label
    }

    pub fn push(&mut self, segment: Segment, index: u16) {
        self.lines.push(format!("push {segment} {index}"));
    }

    pub fn pop(&mut self, segment: Segment, index: u16) {
        self.lines.push(format!("pop {segment} {index}"));
    }

    pub fn binary(&mut self, op: Binary) {
        self.lines.push(op.to_string());
    }

    pub fn neg(&mut self) {
        self.lines.push("neg".to_string());
    }

    pub fn not(&mut self) {
        self.lines.push("not".to_string());
    }

    pub fn label(&mut self, name: &str) {
        self.lines.push(format!("label {name}"));
    }

    pub fn goto(&mut self, name: &str) {
        self.lines.push(format!("goto {name}"));
    }

    pub fn if_goto(&mut self, name: &str) {
        self.lines.push(format!("if-goto {name}"));
    }

    pub fn function(&mut self, class: Symbol, name: Symbol, n_locals: u16) {
        self.lines.push(format!("function {class}.{name} {n_locals}"));
    }

    pub fn call(&mut self, class: &str, name: &str, n_args: u16) {
        self.lines.push(format!("call {class}.{name} {n_args}"));
    }

    pub fn return_(&mut self) {
        self.lines.push("return".to_string());
    }

    /// One emitted VM instruction per line, joined with `\n` and no
    /// required trailing newline, per the output format.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_share_one_monotonic_counter_across_prefixes() {
        let mut e = Emitter::new();
        let f = e.new_label(LabelKind::IfFalse);
        let end = e.new_label(LabelKind::IfEnd);
        assert_eq!(f, "IF_FALSE_0");
        assert_eq!(end, "IF_END_1");
    }

    #[test]
    fn finish_joins_with_single_newlines() {
        let mut e = Emitter::new();
        e.push(Segment::Constant, 7);
        e.return_();
        assert_eq!(e.finish(), "push constant 7\nreturn");
    }
}
