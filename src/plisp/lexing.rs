//! Lexer
//!
//! This module turns raw planning-file text into a flat token sequence.
//!
//! The grammar is deliberately small: atoms are whitespace-delimited, `(`
//! and `)` are always standalone tokens even when glued to other text, and
//! line comments run from one or more `;` characters to the end of the
//! line. There are no block comments and no string literals that could
//! escape a paren, so the lexer never has to look more than one character
//! ahead.
//!
//! Comments are stripped at this layer, before any whitespace handling,
//! because a comment has no closing delimiter other than the newline.
//!
//! Tokenization is pure and never fails; unbalanced parens are a parsing
//! concern, not a lexing one.

pub mod base_tokenization;
pub mod tokens_core;

pub use base_tokenization::tokenize;
pub use tokens_core::Token;
