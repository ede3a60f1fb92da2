//! `Expr`, `Term`, and `SubroutineCall` — the only place the grammar
//! needs more than one token of lookahead (an identifier term must be
//! told apart from a variable, array, or call form by the token that
//! follows it).

use crate::Parser;
use jackc_codegen::{Binary, Segment};
use jackc_lex::TokenKind;
use jackc_util::diagnostic::E_SEMA_NO_RECEIVER;
use jackc_util::CompileResult;

impl Parser {
    /// `Expr := Term (Op Term)*`, strictly left-associative, one
    /// precedence level, exactly as specified.
    pub(crate) fn compile_expr(&mut self) -> CompileResult<()> {
        self.compile_term()?;
        while self.check(&["+", "-", "*", "/", "&", "|", "<", ">", "="]) {
            let op = self.advance().lexeme;
            self.compile_term()?;
            match op.as_str() {
                "+" => self.emitter.binary(Binary::Add),
                "-" => self.emitter.binary(Binary::Sub),
                "&" => self.emitter.binary(Binary::And),
                "|" => self.emitter.binary(Binary::Or),
                "<" => self.emitter.binary(Binary::Lt),
                ">" => self.emitter.binary(Binary::Gt),
                "=" => self.emitter.binary(Binary::Eq),
                "*" => self.emitter.call("Math", "multiply", 2),
                "/" => self.emitter.call("Math", "divide", 2),
                _ => unreachable!("check() only admits the nine operators above"),
            }
        }
        Ok(())
    }

    fn compile_term(&mut self) -> CompileResult<()> {
        let kind = self.current().kind;
        match kind {
            TokenKind::IntConst => {
                let v = self.advance().int_value();
                self.emitter.push(Segment::Constant, v);
            }
            TokenKind::StringConst => self.compile_string_literal(),
            TokenKind::Keyword if self.check(&["true", "false", "null", "this"]) => {
                self.compile_keyword_constant()
            }
            TokenKind::Identifier => self.compile_identifier_term()?,
            TokenKind::Symbol if self.check(&["("]) => {
                self.advance();
                self.compile_expr()?;
                self.expect_symbol(')')?;
            }
            TokenKind::Symbol if self.check(&["-", "~"]) => {
                let op = self.advance().lexeme;
                self.compile_term()?;
                if op == "-" {
                    self.emitter.neg();
                } else {
                    self.emitter.not();
                }
            }
            _ => {
                return Err(self.syntax_error(format!(
                    "expected a term, found '{}'",
                    self.current().lexeme
                )))
            }
        }
        Ok(())
    }

    fn compile_string_literal(&mut self) {
        let s = self.advance().lexeme;
        self.emitter.push(Segment::Constant, s.chars().count() as u16);
        self.emitter.call("String", "new", 1);
        for c in s.chars() {
            self.emitter.push(Segment::Constant, c as u16);
            self.emitter.call("String", "appendChar", 2);
        }
    }

    fn compile_keyword_constant(&mut self) {
        match self.advance().lexeme.as_str() {
            "true" => {
                self.emitter.push(Segment::Constant, 0);
                self.emitter.not();
            }
            "this" => self.emitter.push(Segment::Pointer, 0),
            _ => self.emitter.push(Segment::Constant, 0), // false | null
        }
    }

    /// Disambiguate an identifier term by the one token of lookahead
    /// past it: `[` means an array reference, `(`/`.` means a call,
    /// anything else means a plain variable reference.
    fn compile_identifier_term(&mut self) -> CompileResult<()> {
        let next = self.peek_next();
        if next.is_symbol('[') {
            let name = self.advance().lexeme;
            self.advance(); // '['
            self.push_variable(&name)?;
            self.compile_expr()?;
            self.expect_symbol(']')?;
            self.emitter.binary(Binary::Add);
            self.emitter.pop(Segment::Pointer, 1);
            self.emitter.push(Segment::That, 0);
            Ok(())
        } else if next.is_symbol('(') || next.is_symbol('.') {
            self.compile_subroutine_call()
        } else {
            let name = self.advance().lexeme;
            self.push_variable(&name)?;
            Ok(())
        }
    }

    /// `SubroutineCall := id '(' ExprList ')' | id '.' id '(' ExprList ')'`
    ///
    /// Assumes `current` is the leading identifier; never consumed
    /// ahead of time by its callers (both `Do` and a call-position
    /// term reach here without having advanced past the name).
    pub(crate) fn compile_subroutine_call(&mut self) -> CompileResult<()> {
        let first = self.expect_identifier()?;

        if self.check(&["("]) {
            if !self.receiver_bound {
                return Err(self.semantic_error(
                    E_SEMA_NO_RECEIVER,
                    format!(
                        "cannot call '{}' with no bound receiver inside a function",
                        first.lexeme
                    ),
                ));
            }
            self.emitter.push(Segment::Pointer, 0);
            self.advance(); // '('
            let n = self.compile_expr_list()?;
            self.expect_symbol(')')?;
            let class = self.class_name.clone();
            self.emitter.call(&class, &first.lexeme, n + 1);
            return Ok(());
        }

        self.expect_symbol('.')?;
        let method = self.expect_identifier()?;
        self.expect_symbol('(')?;

        match self.table.lookup(&first.lexeme) {
            Some(entry) => {
                let segment = crate::segment_for(entry.kind);
                let index = entry.index;
                let receiver_type = entry.declared_type.clone();
                self.emitter.push(segment, index);
                let n = self.compile_expr_list()?;
                self.expect_symbol(')')?;
                self.emitter.call(&receiver_type, &method.lexeme, n + 1);
            }
            None => {
                let n = self.compile_expr_list()?;
                self.expect_symbol(')')?;
                self.emitter.call(&first.lexeme, &method.lexeme, n);
            }
        }
        Ok(())
    }

    /// `ExprList := (Expr (',' Expr)*)?`
    fn compile_expr_list(&mut self) -> CompileResult<u16> {
        if self.check(&[")"]) {
            return Ok(0);
        }
        let mut n = 0u16;
        loop {
            self.compile_expr()?;
            n += 1;
            if self.check(&[","]) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(n)
    }
}
