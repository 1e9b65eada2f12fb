//! Testing utilities
//!
//! # Parser Testing Guidelines
//!
//! Planning syntax is easy to get subtly wrong by hand: a missing paren
//! or a keyword in the wrong slot makes a test assert the wrong thing
//! without failing. Two rules keep the tests trustworthy:
//!
//! ## Rule 1: Use verified sources for whole-file tests
//!
//! Tests that exercise whole planning files must use the curated samples
//! in [sources] rather than inline multi-line strings. The samples are
//! real, complete files; when the grammar handling changes, they are the
//! one place to re-verify.
//!
//! Small single-expression literals (`"(sum 1 2)"`) are fine inline;
//! the point is to keep *file-shaped* content in one place.
//!
//! ## Rule 2: Build token fixtures with the factories
//!
//! Token-level tests should build their fixtures through
//! [factories::mk_tokens] so the paren markers can't be mistyped as
//! atoms.

pub mod factories;
pub mod sources;
