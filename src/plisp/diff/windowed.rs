//! Windowed heuristic diff
//!
//! Scans two token sequences in lock-step. At the first position where
//! the tokens differ, the scan records a bounded context window from each
//! side, then tries to re-synchronize by sliding the baseline cursor a
//! few positions and checking whether a short lookahead block lines up
//! again. When it does, the cursor "rolls" by that offset and the
//! lock-step scan resumes.
//!
//! Length mismatch is tracked independently of token mismatches: the
//! shorter sequence can run out with every compared token equal, and both
//! facts are reported on their own.

use serde::Serialize;
use std::fmt;

use crate::plisp::lexing::{tokenize, Token};

/// Window sizes for the scan. All counts are in tokens.
#[derive(Debug, Clone, Serialize)]
pub struct WindowedOptions {
    /// How many tokens of context to capture before and after a mismatch.
    pub context_window: usize,
    /// How far to slide the baseline cursor when trying to realign.
    pub align_window: usize,
    /// How many consecutive equal tokens count as a good realignment.
    pub match_window: usize,
}

impl Default for WindowedOptions {
    fn default() -> Self {
        WindowedOptions {
            context_window: 6,
            align_window: 2,
            match_window: 3,
        }
    }
}

/// One recorded divergence between the two sequences.
#[derive(Debug, Clone, Serialize)]
pub struct TokenMismatch {
    pub baseline_position: usize,
    pub generated_position: usize,
    /// Space-joined tokens around the mismatch, clamped at the edges.
    pub baseline_context: String,
    pub generated_context: String,
    /// Offset the baseline cursor rolled by to resynchronize, if any.
    /// Positive is a roll forward, negative a roll back.
    pub roll: Option<isize>,
}

/// Everything the scan observed. Build with [windowed_diff].
#[derive(Debug, Clone, Serialize)]
pub struct WindowedReport {
    pub baseline_len: usize,
    pub generated_len: usize,
    pub mismatches: Vec<TokenMismatch>,
}

impl WindowedReport {
    pub fn lengths_match(&self) -> bool {
        self.baseline_len == self.generated_len
    }

    pub fn tokens_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// True iff no token mismatch was observed and the lengths are equal.
    pub fn identical(&self) -> bool {
        self.lengths_match() && self.tokens_match()
    }
}

impl fmt::Display for WindowedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.lengths_match() {
            writeln!(f, "different amount of tokens")?;
        }
        for mismatch in &self.mismatches {
            writeln!(f, "==> difference")?;
            writeln!(f, "Context for baseline:")?;
            writeln!(f, "{}", mismatch.baseline_context)?;
            writeln!(f, "Context for generated:")?;
            writeln!(f, "{}", mismatch.generated_context)?;
            match mismatch.roll {
                Some(offset) if offset > 0 => {
                    writeln!(f, "===> roll forward {offset} tokens")?;
                }
                Some(offset) => {
                    writeln!(f, "===> roll back {} tokens", -offset)?;
                }
                None => {}
            }
        }
        if self.tokens_match() && !self.lengths_match() {
            writeln!(f, "Tokens all match even though lengths are different")?;
            writeln!(f, "{}", self.baseline_len)?;
            writeln!(f, "{}", self.generated_len)?;
        }
        Ok(())
    }
}

/// Space-joined slice of tokens around `center`, clamped to the sequence.
fn context(tokens: &[Token], center: usize, window: usize) -> String {
    let start = center.saturating_sub(window);
    let end = (center + window).min(tokens.len());
    tokens[start..end]
        .iter()
        .map(Token::text)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Whether the lookahead blocks starting at `i` in `a` and `j` in `b`
/// agree for `len` tokens. Out-of-range blocks never match.
fn lookahead_matches(a: &[Token], i: usize, b: &[Token], j: usize, len: usize) -> bool {
    match (a.get(i..i + len), b.get(j..j + len)) {
        (Some(block_a), Some(block_b)) => block_a == block_b,
        _ => false,
    }
}

/// Compare two token sequences with a lock-step windowed scan.
///
/// Offsets are tried in ascending order from `-(align_window + 1)` to
/// `align_window`, zero excluded; the first offset whose lookahead block
/// of `match_window + 1` tokens agrees wins. Offsets that would push the
/// baseline cursor out of range are skipped.
pub fn windowed_diff(
    baseline: &[Token],
    generated: &[Token],
    options: &WindowedOptions,
) -> WindowedReport {
    let mut report = WindowedReport {
        baseline_len: baseline.len(),
        generated_len: generated.len(),
        mismatches: Vec::new(),
    };

    let mut i = 0usize;
    let mut j = 0usize;

    while i < baseline.len() && j < generated.len() {
        if baseline[i] != generated[j] {
            let mut mismatch = TokenMismatch {
                baseline_position: i,
                generated_position: j,
                baseline_context: context(baseline, i, options.context_window),
                generated_context: context(generated, j, options.context_window),
                roll: None,
            };

            let block = options.match_window + 1;
            let low = -(options.align_window as isize) - 1;
            let high = options.align_window as isize;
            for offset in low..=high {
                if offset == 0 {
                    continue;
                }
                let Some(target) = i.checked_add_signed(offset) else {
                    continue;
                };
                if lookahead_matches(baseline, target, generated, j, block) {
                    mismatch.roll = Some(offset);
                    i = target;
                    break;
                }
            }

            report.mismatches.push(mismatch);
        }

        i += 1;
        j += 1;
    }

    report
}

/// Convenience wrapper: tokenize both sources, then scan.
///
/// This is the diff engine's only dependency on the tokenizer; it exists
/// so file-level callers compare token content, not whitespace.
pub fn windowed_diff_sources(
    baseline: &str,
    generated: &str,
    options: &WindowedOptions,
) -> WindowedReport {
    windowed_diff(&tokenize(baseline), &tokenize(generated), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(a: &str, b: &str) -> WindowedReport {
        windowed_diff_sources(a, b, &WindowedOptions::default())
    }

    #[test]
    fn test_identical_sources() {
        let report = diff("(sum 1 2)", "(sum 1 2)");
        assert!(report.identical());
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn test_whitespace_and_comments_are_invisible() {
        let report = diff("(sum 1 2) ; five", "(sum\n    1\n    2\n)");
        assert!(report.identical());
    }

    #[test]
    fn test_single_substitution() {
        let report = diff("(at ball1 rooma)", "(at ball2 rooma)");
        assert!(!report.identical());
        assert!(report.lengths_match());
        assert_eq!(report.mismatches.len(), 1);

        let mismatch = &report.mismatches[0];
        assert_eq!(mismatch.baseline_position, 2);
        assert_eq!(mismatch.generated_position, 2);
        assert!(mismatch.baseline_context.contains("ball1"));
        assert!(mismatch.generated_context.contains("ball2"));
    }

    #[test]
    fn test_length_mismatch_reported_independently() {
        // the extra tokens sit at the end, so every compared pair is equal
        let report = diff("(a 1)", "(a 1) (b 2)");
        assert!(report.tokens_match());
        assert!(!report.lengths_match());
        assert!(!report.identical());
    }

    #[test]
    fn test_roll_forward_realigns_after_deletion() {
        // generated drops one token; rolling the baseline cursor forward
        // by one resynchronizes the tail
        let baseline = tokenize("(and left a b c d)");
        let generated = tokenize("(and a b c d)");
        let report = windowed_diff(&baseline, &generated, &WindowedOptions::default());

        assert!(!report.identical());
        assert!(!report.lengths_match());
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].roll, Some(1));
    }

    #[test]
    fn test_roll_back_realigns_after_insertion() {
        // generated gains one token; the baseline cursor rolls back
        let baseline = tokenize("(and a b c d)");
        let generated = tokenize("(and extra a b c d)");
        let report = windowed_diff(&baseline, &generated, &WindowedOptions::default());

        assert!(!report.identical());
        // the inserted token itself cannot realign (it appears in every
        // generated lookahead block); the scan recovers one step later
        assert_eq!(report.mismatches.len(), 2);
        assert_eq!(report.mismatches[0].roll, None);
        assert_eq!(report.mismatches[1].roll, Some(-1));
    }

    #[test]
    fn test_report_display_narrates_differences() {
        let report = diff("(a b c)", "(a x c)");
        let text = report.to_string();
        assert!(text.contains("==> difference"));
        assert!(text.contains("Context for baseline:"));
        assert!(text.contains("Context for generated:"));
    }
}
