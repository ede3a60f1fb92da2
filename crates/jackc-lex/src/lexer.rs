//! The tokenizer: a hand-written, single-cursor scanner.
//!
//! `Lexer::tokenize` runs once per file and produces the full token
//! sequence eagerly (see the core's data model: tokens have no
//! persistence beyond the file they came from). There is no streaming
//! `next_token` API because the parser never needs one — every
//! grammar production it recognizes looks at `current` and, in exactly
//! one place, one token past it.

use crate::cursor::Cursor;
use jackc_util::diagnostic::{
    E_LEX_BAD_CHAR, E_LEX_INT_OUT_OF_RANGE, E_LEX_UNTERMINATED_COMMENT, E_LEX_UNTERMINATED_STRING,
};
use jackc_util::{CompileError, CompileResult, Diagnostic, FileId, Span, Symbol};

const KEYWORDS: &[&str] = &[
    "class", "constructor", "function", "method", "field", "static", "var", "int", "char",
    "boolean", "void", "true", "false", "null", "this", "let", "do", "if", "else", "while",
    "return",
];

const SYMBOLS: &str = "{}()[].,;+-*/<>=&|~";

const MAX_INT: u32 = 32767;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Symbol,
    IntConst,
    StringConst,
    Identifier,
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Token {
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    pub fn is_symbol(&self, sym: char) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme.as_str() == sym.to_string()
    }

    /// Integer value of an `IntConst` token. Panics if called on any
    /// other kind — callers only invoke this after checking `kind`.
    pub fn int_value(&self) -> u16 {
        self.lexeme.parse().expect("IntConst lexeme is always valid decimal digits")
    }

    pub fn as_symbol(&self) -> Symbol {
        Symbol::intern(&self.lexeme)
    }
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    file: FileId,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: impl Into<FileId>) -> Self {
        Self { cursor: Cursor::new(source), file: file.into() }
    }

    /// Produce the full, EOF-terminated token sequence for this file.
    pub fn tokenize(mut self) -> CompileResult<Vec<Token>> {
        let _span = tracing::debug_span!("tokenize", file = %self.file).entered();
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            let line = self.cursor.line();
            if self.cursor.is_at_end() {
                tokens.push(Token { kind: TokenKind::Eof, lexeme: String::new(), line });
                break;
            }
            tokens.push(self.next_token(line)?);
        }
        tracing::debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn skip_trivia(&mut self) -> CompileResult<()> {
        loop {
            match self.cursor.current() {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_next() == '/' => {
                    while !self.cursor.is_at_end() && !matches!(self.cursor.current(), '\n' | '\r')
                    {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek_next() == '*' => {
                    let start_line = self.cursor.line();
                    self.cursor.advance();
                    self.cursor.advance();
                    loop {
                        if self.cursor.is_at_end() {
                            return Err(self.err(
                                E_LEX_UNTERMINATED_COMMENT,
                                "unterminated block comment",
                                start_line,
                            ));
                        }
                        if self.cursor.current() == '*' && self.cursor.peek_next() == '/' {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self, line: u32) -> CompileResult<Token> {
        let c = self.cursor.current();
        if c == '"' {
            return self.lex_string(line);
        }
        if c.is_ascii_digit() {
            return self.lex_int(line);
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.lex_word(line));
        }
        if SYMBOLS.contains(c) {
            self.cursor.advance();
            return Ok(Token { kind: TokenKind::Symbol, lexeme: c.to_string(), line });
        }
        Err(self.err(E_LEX_BAD_CHAR, format!("unexpected character '{c}'"), line))
    }

    fn lex_string(&mut self, line: u32) -> CompileResult<Token> {
        self.cursor.advance(); // opening quote
        let mut s = String::new();
        loop {
            match self.cursor.current() {
                '"' => {
                    self.cursor.advance();
                    return Ok(Token { kind: TokenKind::StringConst, lexeme: s, line });
                }
                '\0' if self.cursor.is_at_end() => {
                    return Err(self.err(
                        E_LEX_UNTERMINATED_STRING,
                        "unterminated string literal",
                        line,
                    ))
                }
                '\n' | '\r' => {
                    return Err(self.err(
                        E_LEX_UNTERMINATED_STRING,
                        "unterminated string literal",
                        line,
                    ))
                }
                c => {
                    s.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    fn lex_int(&mut self, line: u32) -> CompileResult<Token> {
        let mut s = String::new();
        while self.cursor.current().is_ascii_digit() {
            s.push(self.cursor.advance());
        }
        let value: u32 = s.parse().expect("maximal digit run parses as decimal");
        if value > MAX_INT {
            return Err(self.err(
                E_LEX_INT_OUT_OF_RANGE,
                format!("integer literal {value} out of range 0..={MAX_INT}"),
                line,
            ));
        }
        Ok(Token { kind: TokenKind::IntConst, lexeme: s, line })
    }

    fn lex_word(&mut self, line: u32) -> Token {
        let mut s = String::new();
        while self.cursor.current().is_ascii_alphanumeric() || self.cursor.current() == '_' {
            s.push(self.cursor.advance());
        }
        let kind = if KEYWORDS.contains(&s.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token { kind, lexeme: s, line }
    }

    fn err(&self, code: jackc_util::DiagnosticCode, msg: impl Into<String>, line: u32) -> CompileError {
        CompileError::Lex(Diagnostic::error(code, msg, Span::new(0, 0, line), self.file.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src, "t.jack").tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn skips_line_and_block_comments() {
        let toks = Lexer::new("// hi\nlet /* mid */ x = 1;", "t.jack").tokenize().unwrap();
        let lexemes: Vec<_> = toks.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, ["let", "x", "=", "1", ";", ""]);
    }

    #[test]
    fn classifies_keyword_vs_identifier() {
        assert_eq!(kinds("let"), [TokenKind::Keyword, TokenKind::Eof]);
        assert_eq!(kinds("letter"), [TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn string_literal_excludes_quotes() {
        let toks = Lexer::new("\"Hi\"", "t.jack").tokenize().unwrap();
        assert_eq!(toks[0].lexeme, "Hi");
        assert_eq!(toks[0].kind, TokenKind::StringConst);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(Lexer::new("\"oops", "t.jack").tokenize().is_err());
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        assert!(Lexer::new("/* never closes", "t.jack").tokenize().is_err());
    }

    #[test]
    fn int_out_of_range_is_an_error() {
        assert!(Lexer::new("32768", "t.jack").tokenize().is_err());
        assert!(Lexer::new("32767", "t.jack").tokenize().is_ok());
    }

    #[test]
    fn bad_character_is_an_error() {
        assert!(Lexer::new("@", "t.jack").tokenize().is_err());
    }

    #[test]
    fn crlf_line_endings_are_one_newline() {
        let toks = Lexer::new("let\r\nx", "t.jack").tokenize().unwrap();
        assert_eq!(toks[0].line, 1);
        assert_eq!(toks[1].line, 2);
    }

    #[test]
    fn line_comment_does_not_swallow_the_next_crlf_line() {
        let toks = Lexer::new("// hi\r\nlet x;", "t.jack").tokenize().unwrap();
        let lexemes: Vec<_> = toks.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, ["let", "x", ";", ""]);
    }

    #[test]
    fn string_left_open_across_a_crlf_is_an_error() {
        assert!(Lexer::new("\"oops\r\nnext", "t.jack").tokenize().is_err());
    }
}
