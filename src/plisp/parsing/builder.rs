//! Tree builder
//!
//! Recursive descent over the token sequence. The grammar has two quirks
//! the builder handles up front:
//!
//!     ()          an empty call; becomes a childless `eval` node
//!     ((f ...) …) a call with no operator name; becomes an `eval` node
//!                 whose first child is the inner expression
//!
//! Everything else is the plain case: `(` followed by an atom opens a
//! named call, a bare atom is a leaf.

use crate::plisp::ast::{NodeId, Tree, EVAL_NAME};
use crate::plisp::lexing::Token;

use super::common::ParseError;

/// Read position over an immutable token slice.
///
/// The builder advances the cursor instead of consuming the sequence, so
/// the same tokens can be parsed again or handed to the diff engine.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// The next token, without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// The next token, advancing past it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Index of the next unread token.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

/// Build a tree from a token sequence.
///
/// Top-level driver: builds one expression at a time until the tokens run
/// out, attaching each to a synthetic `root-elem` container.
pub fn parse(tokens: &[Token]) -> Result<Tree, ParseError> {
    let mut tree = Tree::new();
    let root = tree.root();
    let mut cursor = TokenCursor::new(tokens);

    while !cursor.is_exhausted() {
        let expr = build_expr(&mut cursor, &mut tree)?;
        tree.add_child(root, expr, None);
    }

    Ok(tree)
}

/// Build a single expression starting at the cursor.
fn build_expr(cursor: &mut TokenCursor, tree: &mut Tree) -> Result<NodeId, ParseError> {
    let position = cursor.position();
    let token = cursor.advance().ok_or(ParseError::UnterminatedExpression)?;

    match token {
        Token::Open => {
            let node = match cursor.peek() {
                // () is an empty eval expression
                Some(Token::Close) => {
                    cursor.advance();
                    return Ok(tree.new_call(EVAL_NAME));
                }
                // a call applied to the result of an inner expression
                Some(Token::Open) => tree.new_call(EVAL_NAME),
                Some(Token::Atom(name)) => {
                    cursor.advance();
                    tree.new_call(name.clone())
                }
                None => return Err(ParseError::UnterminatedExpression),
            };

            loop {
                match cursor.peek() {
                    Some(Token::Close) => {
                        cursor.advance();
                        return Ok(node);
                    }
                    Some(_) => {
                        let child = build_expr(cursor, tree)?;
                        tree.add_child(node, child, None);
                    }
                    None => return Err(ParseError::UnterminatedExpression),
                }
            }
        }
        Token::Close => Err(ParseError::UnexpectedClosing { position }),
        Token::Atom(name) => Ok(tree.new_leaf(name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plisp::ast::{path, EVAL_NAME};
    use crate::plisp::lexing::tokenize;
    use crate::plisp::parsing::parse_source;

    #[test]
    fn test_simple_expression() {
        let tree = parse_source("(sum 3 2)").unwrap();
        let sum = tree.sole_form().unwrap();
        assert_eq!(tree.name(sum), "sum");
        assert!(tree.is_call(sum));

        let names: Vec<&str> = tree.children(sum).iter().map(|&c| tree.name(c)).collect();
        assert_eq!(names, vec!["3", "2"]);
        assert!(tree.children(sum).iter().all(|&c| !tree.is_call(c)));
    }

    #[test]
    fn test_nested_expression() {
        let tree = parse_source("(sum 3 (product 2 4))").unwrap();
        let product = tree
            .seek(tree.root(), &path(&["sum", "product"]))
            .unwrap();
        assert!(tree.is_call(product));
        assert_eq!(tree.children(product).len(), 2);
    }

    #[test]
    fn test_bare_atom_is_leaf() {
        let tree = parse_source("toronto").unwrap();
        let leaf = tree.sole_form().unwrap();
        assert_eq!(tree.name(leaf), "toronto");
        assert!(!tree.is_call(leaf));
    }

    #[test]
    fn test_empty_call_is_anonymous() {
        let tree = parse_source("(())").unwrap();
        let outer = tree.sole_form().unwrap();
        assert_eq!(tree.name(outer), EVAL_NAME);
        let inner = tree.first_child(outer).unwrap();
        assert_eq!(tree.name(inner), EVAL_NAME);
        assert!(tree.is_call(inner));
        assert!(tree.children(inner).is_empty());
    }

    #[test]
    fn test_anonymous_call_wraps_inner_expression() {
        let tree = parse_source("((lambda x) 2)").unwrap();
        let outer = tree.sole_form().unwrap();
        assert_eq!(tree.name(outer), EVAL_NAME);

        let children = tree.children(outer);
        assert_eq!(children.len(), 2);
        assert_eq!(tree.name(children[0]), "lambda");
        assert_eq!(tree.name(children[1]), "2");
    }

    #[test]
    fn test_multiple_top_level_expressions() {
        let tree = parse_source("(a 1) (b 2)\n(c 3)").unwrap();
        let root = tree.root();
        assert!(tree.is_synthetic_root(root));
        assert_eq!(tree.sole_form(), None);

        let names: Vec<&str> = tree.children(root).iter().map(|&c| tree.name(c)).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unexpected_closing() {
        let err = parse_source("a)").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedClosing { position: 1 });
    }

    #[test]
    fn test_unterminated_expression() {
        let err = parse_source("(a b").unwrap_err();
        assert_eq!(err, ParseError::UnterminatedExpression);
    }

    #[test]
    fn test_unterminated_nested_expression() {
        let err = parse_source("(a (b c)").unwrap_err();
        assert_eq!(err, ParseError::UnterminatedExpression);
    }

    #[test]
    fn test_cursor_leaves_tokens_reusable() {
        let tokens = tokenize("(a)");
        let first = parse(&tokens).unwrap();
        let second = parse(&tokens).unwrap();
        assert_eq!(
            first.name(first.sole_form().unwrap()),
            second.name(second.sole_form().unwrap())
        );
    }
}
