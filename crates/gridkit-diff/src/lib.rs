#![forbid(unsafe_code)]

//! Line-level text diff for side-by-side comparison views.
//!
//! - [`compute_lcs`] finds the longest common subsequence of two sequences.
//! - [`compute_diff`] uses it to align two texts into paired rows.
//! - [`filter_diff_only`] reduces a diff to the rows around its differences.
//!
//! The engine is pure and infallible: empty or missing text is simply a
//! sequence of zero lines.
//!
//! # Example
//!
//! ```
//! use gridkit_diff::{DEFAULT_CONTEXT_LINES, compute_diff, filter_diff_only};
//!
//! let diff = compute_diff("one\ntwo\nthree", "one\n2\nthree");
//! assert_eq!(diff.stats.changed, 1);
//!
//! let view = filter_diff_only(&diff, DEFAULT_CONTEXT_LINES);
//! assert_eq!(view.len(), 3);
//! ```

pub mod filter;
pub mod lcs;
pub mod line_diff;

pub use filter::{DEFAULT_CONTEXT_LINES, filter_diff_only};
pub use lcs::{LcsMatch, compute_lcs};
pub use line_diff::{DiffLine, DiffLineKind, DiffResult, DiffStats, compute_diff, split_lines};
