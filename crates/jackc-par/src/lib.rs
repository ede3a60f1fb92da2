//! jackc-par - recursive-descent parser fused with code generation.
//!
//! There is no AST. Each grammar production below both recognizes its
//! piece of the input *and* emits the VM instructions for it, in the
//! order the production is recognized — see the core design note on
//! why this is sufficient (VM-level labels are invented locally and
//! referenced only after definition; function signatures need no
//! forward declaration). [`Parser::compile_class`] is the single entry
//! point; [`compile`] wraps it for callers that only have a token
//! stream.

mod expr;
mod items;
mod stmt;

use jackc_codegen::{Emitter, Segment};
use jackc_lex::{Token, TokenKind};
use jackc_sym::{Kind, SymbolTable};
use jackc_util::diagnostic::{E_SEMA_UNDECLARED, E_SYNTAX_UNEXPECTED_TOKEN};
use jackc_util::{CompileError, CompileResult, Diagnostic, FileId, Span, Symbol};

/// `Field -> this`, `Static -> static`, `Argument -> argument`,
/// `Local -> local`, exactly as the kind-to-segment mapping specifies.
pub(crate) fn segment_for(kind: Kind) -> Segment {
    match kind {
        Kind::Field => Segment::This,
        Kind::Static => Segment::Static,
        Kind::Argument => Segment::Argument,
        Kind::Local => Segment::Local,
    }
}

/// Parse and emit one class's worth of tokens, returning the VM text
/// for the whole file (one class per file, per the source language).
/// `file` is threaded into any syntax/semantic diagnostic the parser
/// raises, the same way [`jackc_lex::Lexer`] threads it into lex
/// diagnostics.
pub fn compile(tokens: Vec<Token>, file: impl Into<FileId>) -> CompileResult<String> {
    let mut parser = Parser::new(tokens, file.into());
    parser.compile_class()?;
    Ok(parser.emitter.finish())
}

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: FileId,
    pub(crate) class_name: String,
    pub(crate) table: SymbolTable,
    pub(crate) emitter: Emitter,
    /// Set while parsing a `method` or `constructor` body, where an
    /// implicit-self call and `this` are legal; cleared for `function`.
    pub(crate) receiver_bound: bool,
}

impl Parser {
    fn new(tokens: Vec<Token>, file: FileId) -> Self {
        Self {
            tokens,
            pos: 0,
            file,
            class_name: String::new(),
            table: SymbolTable::new(),
            emitter: Emitter::new(),
            receiver_bound: false,
        }
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// One token of lookahead past `current`, used in exactly one
    /// place: disambiguating a variable, array, or call term.
    pub(crate) fn peek_next(&self) -> Token {
        self.tokens.get(self.pos + 1).cloned().unwrap_or_else(|| self.tokens.last().unwrap().clone())
    }

    /// Consume `current` and load the next token; idempotent at EOF.
    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    /// Peek-only test of whether `current`'s lexeme matches any given.
    pub(crate) fn check(&self, lexemes: &[&str]) -> bool {
        lexemes.iter().any(|l| self.current().lexeme == *l)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Assert `current.kind` is one of `kinds` and, if given, that the
    /// lexeme matches; return the consumed token or a syntax error.
    pub(crate) fn expect(
        &mut self,
        kinds: &[TokenKind],
        lexeme: Option<&str>,
    ) -> CompileResult<Token> {
        let tok = self.current().clone();
        let kind_ok = kinds.contains(&tok.kind);
        let lexeme_ok = lexeme.map_or(true, |l| tok.lexeme == l);
        if kind_ok && lexeme_ok {
            self.advance();
            return Ok(tok);
        }
        let expected = match lexeme {
            Some(l) => format!("'{l}'"),
            None => format!("{:?}", kinds),
        };
        Err(self.syntax_error(format!(
            "expected {expected}, found '{}'",
            tok.lexeme
        )))
    }

    pub(crate) fn expect_symbol(&mut self, sym: char) -> CompileResult<Token> {
        self.expect(&[TokenKind::Symbol], Some(&sym.to_string()))
    }

    pub(crate) fn expect_keyword(&mut self, kw: &str) -> CompileResult<Token> {
        self.expect(&[TokenKind::Keyword], Some(kw))
    }

    pub(crate) fn expect_identifier(&mut self) -> CompileResult<Token> {
        self.expect(&[TokenKind::Identifier], None)
    }

    pub(crate) fn syntax_error(&self, message: impl Into<String>) -> CompileError {
        CompileError::Syntax(Diagnostic::error(
            E_SYNTAX_UNEXPECTED_TOKEN,
            message,
            Span::new(0, 0, self.current().line),
            self.file.clone(),
        ))
    }

    pub(crate) fn semantic_error(
        &self,
        code: jackc_util::DiagnosticCode,
        message: impl Into<String>,
    ) -> CompileError {
        CompileError::Semantic(Diagnostic::error(
            code,
            message,
            Span::new(0, 0, self.current().line),
            self.file.clone(),
        ))
    }

    pub(crate) fn class_symbol(&self) -> Symbol {
        Symbol::intern(&self.class_name)
    }

    /// Resolve `name` or raise the semantic error for an undeclared
    /// reference — shared by variable/array terms and `let` targets.
    pub(crate) fn resolve(&self, name: &str) -> CompileResult<(Segment, u16, String)> {
        match self.table.lookup(name) {
            Some(entry) => Ok((segment_for(entry.kind), entry.index, entry.declared_type.clone())),
            None => Err(self.semantic_error(E_SEMA_UNDECLARED, format!("'{name}' is not declared"))),
        }
    }

    pub(crate) fn push_variable(&mut self, name: &str) -> CompileResult<String> {
        let (segment, index, declared_type) = self.resolve(name)?;
        self.emitter.push(segment, index);
        Ok(declared_type)
    }

    pub(crate) fn pop_variable(&mut self, name: &str) -> CompileResult<()> {
        let (segment, index, _) = self.resolve(name)?;
        self.emitter.pop(segment, index);
        Ok(())
    }

    /// `Class := 'class' id '{' ClassVarDec* SubroutineDec* '}'`
    pub fn compile_class(&mut self) -> CompileResult<()> {
        self.expect_keyword("class")?;
        let name = self.expect_identifier()?;
        self.class_name = name.lexeme;
        self.expect_symbol('{')?;

        while self.check(&["static", "field"]) {
            self.compile_class_var_dec()?;
        }
        while self.check(&["constructor", "function", "method"]) {
            self.compile_subroutine_dec()?;
        }

        self.expect_symbol('}')?;
        Ok(())
    }
}
