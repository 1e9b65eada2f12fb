//! Core token types for the planning-file lexer
//!
//! The token alphabet has exactly three shapes: the two paren markers and
//! atoms. Whitespace and `;` comments never reach the token stream.

use logos::Logos;
use std::fmt;

/// A single lexical unit of a planning file.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r";[^\n]*")]
pub enum Token {
    #[token("(")]
    Open,

    #[token(")")]
    Close,

    /// Any maximal run of characters that is not whitespace, a paren, or
    /// the start of a comment.
    #[regex(r"[^ \t\r\n\f();]+", |lex| lex.slice().to_string())]
    Atom(String),
}

impl Token {
    /// The source text this token stands for.
    pub fn text(&self) -> &str {
        match self {
            Token::Open => "(",
            Token::Close => ")",
            Token::Atom(s) => s,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Token::Atom(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        assert_eq!(Token::Open.text(), "(");
        assert_eq!(Token::Close.text(), ")");
        assert_eq!(Token::Atom("sum".to_string()).text(), "sum");
    }

    #[test]
    fn test_display_matches_text() {
        let token = Token::Atom(":precondition".to_string());
        assert_eq!(token.to_string(), ":precondition");
    }
}
