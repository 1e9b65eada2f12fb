//! Marker-line fragment splitter
//!
//! The translator's output interleaves four kinds of content, announced
//! by `;;` marker lines:
//!
//!     ;; initial state
//!     ;; Add Effects
//!     ;; Delete Effects
//!
//! Any other marker line switches collection to the axioms fragment.
//! Content before the first marker is initial-state content. Blank lines
//! and the trailing `Total No. of states` summary are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a marker line and captures its label text.
static MARKER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^;;\s*(.*?)\s*$").unwrap());

/// The translator's output, split by content kind. Each field is raw
/// text ready for [crate::plisp::parsing::parse_source].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub init_states: String,
    pub add_effects: String,
    pub del_effects: String,
    pub axioms: String,
}

#[derive(Clone, Copy)]
enum Section {
    InitStates,
    AddEffects,
    DelEffects,
    Axioms,
}

/// Split a translator output stream into its four fragments.
pub fn partition_marker_output(text: &str) -> Fragments {
    let mut fragments = Fragments::default();
    let mut section = Section::InitStates;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("Total No. of states") {
            continue;
        }

        if let Some(captures) = MARKER_LINE.captures(trimmed) {
            section = match &captures[1] {
                "initial state" => Section::InitStates,
                "Add Effects" => Section::AddEffects,
                "Delete Effects" => Section::DelEffects,
                _ => Section::Axioms,
            };
            continue;
        }

        let target = match section {
            Section::InitStates => &mut fragments.init_states,
            Section::AddEffects => &mut fragments.add_effects,
            Section::DelEffects => &mut fragments.del_effects,
            Section::Axioms => &mut fragments.axioms,
        };
        target.push_str(line);
        target.push('\n');
    }

    fragments
}
