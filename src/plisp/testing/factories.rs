//! Factories for test fixtures

use crate::plisp::ast::Tree;
use crate::plisp::lexing::Token;
use crate::plisp::parsing::parse_source;

/// Build a token sequence from string literals; `"("` and `")"` become
/// the paren markers, everything else an atom.
pub fn mk_tokens(texts: &[&str]) -> Vec<Token> {
    texts
        .iter()
        .map(|&text| match text {
            "(" => Token::Open,
            ")" => Token::Close,
            atom => Token::Atom(atom.to_string()),
        })
        .collect()
}

/// Parse a source literal, panicking on failure. Test-side shorthand for
/// sources that are known valid.
pub fn parse_str(source: &str) -> Tree {
    parse_source(source).expect("test source failed to parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mk_tokens_maps_parens() {
        let tokens = mk_tokens(&["(", "sum", "1", ")"]);
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                Token::Atom("sum".to_string()),
                Token::Atom("1".to_string()),
                Token::Close,
            ]
        );
    }
}
