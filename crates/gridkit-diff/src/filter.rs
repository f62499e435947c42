#![forbid(unsafe_code)]

//! Context-windowed "differences only" view.

use crate::line_diff::{DiffLine, DiffResult};

/// Rows of context kept on each side of a difference by default.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Keep only rows within `context_lines` of a difference.
///
/// Windows around neighbouring differences are merged. Wherever two kept
/// rows are not adjacent in `diff`, a single separator row (`...`) is
/// inserted on both sides. `diff_indices` is rebuilt against the filtered
/// rows and `stats` is carried over untouched.
///
/// A diff without differences filters down to no rows at all.
#[must_use]
pub fn filter_diff_only(diff: &DiffResult, context_lines: usize) -> DiffResult {
    let rows = diff.len();
    if diff.diff_indices.is_empty() || rows == 0 {
        return DiffResult {
            stats: diff.stats,
            ..DiffResult::default()
        };
    }

    let mut visible = vec![false; rows];
    let mut differs = vec![false; rows];
    for &idx in &diff.diff_indices {
        let lo = idx.saturating_sub(context_lines);
        let hi = idx.saturating_add(context_lines).min(rows - 1);
        for slot in visible.iter_mut().take(hi + 1).skip(lo) {
            *slot = true;
        }
        if let Some(flag) = differs.get_mut(idx) {
            *flag = true;
        }
    }

    let mut out = DiffResult {
        stats: diff.stats,
        ..DiffResult::default()
    };
    let mut prev: Option<usize> = None;
    let mut separators = 0usize;

    for idx in (0..rows).filter(|&idx| visible[idx]) {
        if prev.is_some_and(|prev| idx > prev + 1) {
            out.left_lines.push(DiffLine::separator());
            out.right_lines.push(DiffLine::separator());
            separators += 1;
        }
        if differs[idx] {
            out.diff_indices.push(out.left_lines.len());
        }
        out.left_lines.push(diff.left_lines[idx].clone());
        out.right_lines.push(diff.right_lines[idx].clone());
        prev = Some(idx);
    }

    tracing::debug!(
        rows,
        kept = out.len() - separators,
        separators,
        context_lines,
        "filtered diff to differences"
    );

    out
}
