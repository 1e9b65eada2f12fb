//! Parsing module for planning-file text
//!
//! This module provides the pipeline from source text to expression tree:
//! 1. **Lexing**: tokenization of source text (see [crate::plisp::lexing])
//! 2. **Building**: recursive construction of the tree from the token
//!    sequence
//!
//! The builder reads the token sequence through an explicit cursor; the
//! sequence itself is never consumed, so the same tokens can feed several
//! parse attempts or a diff run without re-lexing.
//!
//! Every top-level expression of a file becomes a child of a synthetic
//! `root-elem` container, so files holding several independent expressions
//! (axiom fragments, effect lists) parse the same way as single-`define`
//! planning files. Use [crate::plisp::ast::Tree::sole_form] to reach the
//! single form when there is exactly one.

pub mod builder;
pub mod common;

pub use builder::{parse, TokenCursor};
pub use common::ParseError;

use crate::plisp::ast::Tree;
use crate::plisp::lexing::tokenize;

/// Process source text through the complete pipeline: lex, then build.
///
/// This is the primary entry point for turning a planning file into a
/// tree. Parse failures abort the call; no partial tree is returned.
pub fn parse_source(source: &str) -> Result<Tree, ParseError> {
    let tokens = tokenize(source);
    parse(&tokens)
}
