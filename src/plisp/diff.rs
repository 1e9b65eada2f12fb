//! Diff engine
//!
//! Two algorithms answer the same question (where do two token sequences
//! diverge) at different precision/cost points:
//!
//! - [windowed]: a lock-step scan with bounded context capture and
//!   bounded local realignment. Linear, streaming, good enough for a
//!   human-facing "what changed" report. Not a minimal edit script.
//! - [alignment]: full dynamic-programming sequence alignment. O(m·n)
//!   time and space, always finds a minimum-penalty alignment. The
//!   authoritative answer when the windowed scan is too coarse.
//!
//! Both are pure functions of their inputs plus a config value; there is
//! no shared state between calls, so concurrent callers with different
//! cost models cannot interfere. Divergence is reported as data, never as
//! an error: "the files differ" is an expected outcome.

pub mod alignment;
pub mod windowed;

pub use alignment::{align, Alignment, AlignmentConfig, PenaltyMatrix};
pub use windowed::{windowed_diff, windowed_diff_sources, TokenMismatch, WindowedOptions, WindowedReport};
