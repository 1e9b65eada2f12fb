//! # plisp
//!
//! A parser, printer, and diff engine for Lisp-style planning files.
//!
//! Planning tools exchange domain and problem descriptions written in a
//! parenthesized, Lisp-family grammar. This crate turns that text into an
//! ordered, queryable tree, renders trees back to canonical text, and
//! compares two files token by token.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](plisp::testing).
//! Parser tests must use verified planning sources from the sample library.

pub mod plisp;
