//! `Statements`, and the five statement forms: `Let`, `If`, `While`,
//! `Do`, `Return`.

use crate::Parser;
use jackc_codegen::{LabelKind, Segment};
use jackc_util::CompileResult;

impl Parser {
    /// `Statements := Statement*`
    pub(crate) fn compile_statements(&mut self) -> CompileResult<()> {
        while self.check(&["let", "if", "while", "do", "return"]) {
            self.compile_statement()?;
        }
        Ok(())
    }

    fn compile_statement(&mut self) -> CompileResult<()> {
        match self.current().lexeme.as_str() {
            "let" => self.compile_let(),
            "if" => self.compile_if(),
            "while" => self.compile_while(),
            "do" => self.compile_do(),
            "return" => self.compile_return(),
            other => Err(self.syntax_error(format!("expected a statement, found '{other}'"))),
        }
    }

    /// `Let := 'let' id ('[' Expr ']')? '=' Expr ';'`
    fn compile_let(&mut self) -> CompileResult<()> {
        self.expect_keyword("let")?;
        let name = self.expect_identifier()?.lexeme;

        if self.check(&["["]) {
            self.advance();
            self.push_variable(&name)?;
            self.compile_expr()?;
            self.expect_symbol(']')?;
            self.emitter.binary(jackc_codegen::Binary::Add);
            self.expect_symbol('=')?;
            self.compile_expr()?;
            self.expect_symbol(';')?;
            // The spill through temp 0 is required: the RHS may itself
            // contain an array reference that clobbers pointer 1.
            self.emitter.pop(Segment::Temp, 0);
            self.emitter.pop(Segment::Pointer, 1);
            self.emitter.push(Segment::Temp, 0);
            self.emitter.pop(Segment::That, 0);
        } else {
            self.expect_symbol('=')?;
            self.compile_expr()?;
            self.expect_symbol(';')?;
            self.pop_variable(&name)?;
        }
        Ok(())
    }

    /// `If := 'if' '(' Expr ')' '{' Statements '}' ('else' '{' Statements '}')?`
    fn compile_if(&mut self) -> CompileResult<()> {
        self.expect_keyword("if")?;
        let false_label = self.emitter.new_label(LabelKind::IfFalse);
        let end_label = self.emitter.new_label(LabelKind::IfEnd);

        self.expect_symbol('(')?;
        self.compile_expr()?;
        self.expect_symbol(')')?;
        self.emitter.not();
        self.emitter.if_goto(&false_label);

        self.expect_symbol('{')?;
        self.compile_statements()?;
        self.expect_symbol('}')?;
        self.emitter.goto(&end_label);

        self.emitter.label(&false_label);
        if self.check(&["else"]) {
            self.advance();
            self.expect_symbol('{')?;
            self.compile_statements()?;
            self.expect_symbol('}')?;
        }
        self.emitter.label(&end_label);
        Ok(())
    }

    /// `While := 'while' '(' Expr ')' '{' Statements '}'`
    fn compile_while(&mut self) -> CompileResult<()> {
        self.expect_keyword("while")?;
        let loop_label = self.emitter.new_label(LabelKind::WhileLoop);
        let end_label = self.emitter.new_label(LabelKind::WhileEnd);

        self.emitter.label(&loop_label);
        self.expect_symbol('(')?;
        self.compile_expr()?;
        self.expect_symbol(')')?;
        self.emitter.not();
        self.emitter.if_goto(&end_label);

        self.expect_symbol('{')?;
        self.compile_statements()?;
        self.expect_symbol('}')?;
        self.emitter.goto(&loop_label);
        self.emitter.label(&end_label);
        Ok(())
    }

    /// `Do := 'do' SubroutineCall ';'`
    fn compile_do(&mut self) -> CompileResult<()> {
        self.expect_keyword("do")?;
        self.compile_subroutine_call()?;
        self.expect_symbol(';')?;
        self.emitter.pop(Segment::Temp, 0);
        Ok(())
    }

    /// `Return := 'return' Expr? ';'`
    fn compile_return(&mut self) -> CompileResult<()> {
        self.expect_keyword("return")?;
        if self.check(&[";"]) {
            self.emitter.push(Segment::Constant, 0);
        } else {
            self.compile_expr()?;
        }
        self.expect_symbol(';')?;
        self.emitter.return_();
        Ok(())
    }
}
