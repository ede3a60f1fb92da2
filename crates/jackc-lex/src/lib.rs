//! jackc-lex - Tokenizer for Jack source files.
//!
//! Converts source bytes into a finite, EOF-terminated token sequence,
//! stripping whitespace and both comment forms as it goes. See
//! [`Lexer::tokenize`].

mod cursor;
mod lexer;

pub use lexer::{Lexer, Token, TokenKind};
