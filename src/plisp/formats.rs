//! Output format implementations for tree serialization
//!
//! This module contains the different renderings of an expression tree:
//! - canonical planning-file text (the format the parser reads)
//! - an ASCII tree view for inspection (treeviz)
//! - a nested dictionary rendered as JSON (dict)
//!
//! Formats register in a [FormatRegistry] so the CLI can resolve a
//! `--format` name to an implementation.

pub mod canonical;
pub mod dict;
pub mod registry;
pub mod treeviz;

pub use canonical::to_canonical_str;
pub use dict::{to_dict_value, to_json_str};
pub use registry::{default_registry, FormatError, FormatRegistry, Formatter};
pub use treeviz::to_treeviz_str;
