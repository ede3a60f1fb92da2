//! Class-level and subroutine-level declarations: `ClassVarDec`,
//! `Type`, `SubroutineDec`, `ParameterList`, `SubroutineBody`, `VarDec`.

use crate::Parser;
use jackc_codegen::Segment;
use jackc_lex::TokenKind;
use jackc_sym::Kind;
use jackc_util::{CompileResult, Symbol};

impl Parser {
    /// `ClassVarDec := ('static'|'field') Type id (',' id)* ';'`
    pub(crate) fn compile_class_var_dec(&mut self) -> CompileResult<()> {
        let kind_tok = self.advance();
        let kind = if kind_tok.lexeme == "static" { Kind::Static } else { Kind::Field };
        let ty = self.compile_type()?;

        let first = self.expect_identifier()?;
        self.define_or_error(&first.lexeme, &ty, kind)?;
        while self.check(&[","]) {
            self.advance();
            let id = self.expect_identifier()?;
            self.define_or_error(&id.lexeme, &ty, kind)?;
        }
        self.expect_symbol(';')?;
        Ok(())
    }

    /// `Type := 'int' | 'char' | 'boolean' | id`
    pub(crate) fn compile_type(&mut self) -> CompileResult<String> {
        if self.check(&["int", "char", "boolean"]) {
            Ok(self.advance().lexeme)
        } else {
            Ok(self.expect_identifier()?.lexeme)
        }
    }

    fn define_or_error(&mut self, name: &str, ty: &str, kind: Kind) -> CompileResult<()> {
        self.table
            .define(name, ty, kind)
            .map_err(|_| {
                self.semantic_error(
                    jackc_util::diagnostic::E_SEMA_REDECLARED,
                    format!("'{name}' is already declared in this scope"),
                )
            })
    }

    /// `SubroutineDec := ('constructor'|'function'|'method')
    ///                   ('void'|Type) id '(' ParameterList ')' SubroutineBody`
    pub(crate) fn compile_subroutine_dec(&mut self) -> CompileResult<()> {
        let subroutine_kind = self.advance().lexeme; // constructor | function | method
        if self.check(&["void"]) {
            self.advance();
        } else {
            self.compile_type()?;
        }
        let name = self.expect_identifier()?.lexeme;

        self.table.start_subroutine();
        self.receiver_bound = subroutine_kind != "function";
        if subroutine_kind == "method" {
            self.table
                .define("this", &self.class_name.clone(), Kind::Argument)
                .expect("fresh subroutine scope never already has 'this'");
        }

        self.expect_symbol('(')?;
        self.compile_parameter_list()?;
        self.expect_symbol(')')?;

        self.expect_symbol('{')?;
        while self.check(&["var"]) {
            self.compile_var_dec()?;
        }

        let n_locals = self.table.count(Kind::Local);
        let class = self.class_symbol();
        let name_sym = Symbol::intern(&name);
        self.emitter.function(class, name_sym, n_locals);

        match subroutine_kind.as_str() {
            "method" => {
                self.emitter.push(Segment::Argument, 0);
                self.emitter.pop(Segment::Pointer, 0);
            }
            "constructor" => {
                let n_fields = self.table.count(Kind::Field);
                self.emitter.push(Segment::Constant, n_fields);
                self.emitter.call("Memory", "alloc", 1);
                self.emitter.pop(Segment::Pointer, 0);
            }
            _ => {}
        }

        self.compile_statements()?;
        self.expect_symbol('}')?;
        Ok(())
    }

    /// `ParameterList := (Type id (',' Type id)*)?`
    fn compile_parameter_list(&mut self) -> CompileResult<()> {
        if self.check_kind(TokenKind::Symbol) {
            return Ok(()); // immediately ')'
        }
        loop {
            let ty = self.compile_type()?;
            let name = self.expect_identifier()?;
            self.define_or_error(&name.lexeme, &ty, Kind::Argument)?;
            if self.check(&[","]) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// `VarDec := 'var' Type id (',' id)* ';'`
    fn compile_var_dec(&mut self) -> CompileResult<()> {
        self.expect_keyword("var")?;
        let ty = self.compile_type()?;
        let first = self.expect_identifier()?;
        self.define_or_error(&first.lexeme, &ty, Kind::Local)?;
        while self.check(&[","]) {
            self.advance();
            let id = self.expect_identifier()?;
            self.define_or_error(&id.lexeme, &ty, Kind::Local)?;
        }
        self.expect_symbol(';')?;
        Ok(())
    }
}
