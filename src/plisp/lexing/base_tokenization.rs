//! Base tokenization implementation for the planning-file lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::plisp::lexing::tokens_core::Token;
use logos::Logos;

/// Tokenize source text into a flat token sequence.
///
/// Comments and whitespace are dropped by the lexer itself, so the output
/// contains only `Open`, `Close`, and `Atom` tokens, in source order. The
/// diff engine and the tree builder both consume this sequence.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push(token);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(s: &str) -> Token {
        Token::Atom(s.to_string())
    }

    #[test]
    fn test_tokenizes_simple_expression() {
        let tokens = tokenize("(sum 3 2)");
        assert_eq!(
            tokens,
            vec![Token::Open, atom("sum"), atom("3"), atom("2"), Token::Close]
        );
    }

    #[test]
    fn test_parens_are_standalone_even_when_glued() {
        let tokens = tokenize("(at-robby(rooma))");
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                atom("at-robby"),
                Token::Open,
                atom("rooma"),
                Token::Close,
                Token::Close,
            ]
        );
    }

    #[test]
    fn test_line_comment_is_stripped() {
        let tokens = tokenize("(sum 1 2) ; this is 5");
        assert_eq!(
            tokens,
            vec![Token::Open, atom("sum"), atom("1"), atom("2"), Token::Close]
        );
    }

    #[test]
    fn test_repeated_comment_markers() {
        let tokens = tokenize(";; header line\n(a)\n;;; trailer");
        assert_eq!(tokens, vec![Token::Open, atom("a"), Token::Close]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line_only() {
        let tokens = tokenize("x ; gone\ny");
        assert_eq!(tokens, vec![atom("x"), atom("y")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize("  \t \n  "), vec![]);
    }
}
