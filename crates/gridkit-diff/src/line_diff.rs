#![forbid(unsafe_code)]

//! Side-by-side line diff.
//!
//! [`compute_diff`] aligns two texts into rows of equal length on both sides.
//! Each row is one of:
//!
//! | left       | right      | counted as  |
//! |------------|------------|-------------|
//! | `same`     | `same`     | `identical` |
//! | `changed`  | `changed`  | `changed`   |
//! | `unique`   | `empty`    | `unique`    |
//! | `empty`    | `unique`   | `unique`    |
//!
//! Unmatched lines between two anchors of the common subsequence are paired
//! by position: the first pending left line goes with the first pending right
//! line regardless of content. Leftovers on the longer side become `unique`.

use serde::{Deserialize, Serialize};

use crate::lcs::compute_lcs;

// ============================================================================
// Rows
// ============================================================================

/// Classification of one side of an aligned row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    Same,
    Changed,
    Unique,
    /// Padding opposite a `unique` line.
    Empty,
    /// Gap marker inserted by [`filter_diff_only`](crate::filter_diff_only).
    Separator,
}

impl DiffLineKind {
    /// Whether this row half carries a line from the source text.
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::Same | Self::Changed | Self::Unique)
    }
}

/// One side of an aligned row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// 1-based line number in the source text; `None` for placeholders.
    #[serde(rename = "lineNumber")]
    pub line_number: Option<usize>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: DiffLineKind,
}

impl DiffLine {
    /// A line taken from the source text at 0-based `index`.
    #[must_use]
    pub fn source(index: usize, content: impl Into<String>, kind: DiffLineKind) -> Self {
        Self {
            line_number: Some(index + 1),
            content: content.into(),
            kind,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_number: None,
            content: String::new(),
            kind: DiffLineKind::Empty,
        }
    }

    #[must_use]
    pub fn separator() -> Self {
        Self {
            line_number: None,
            content: "...".to_owned(),
            kind: DiffLineKind::Separator,
        }
    }
}

/// Row counts by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub identical: usize,
    pub changed: usize,
    /// One per `unique` row, whichever side holds the line.
    pub unique: usize,
}

impl DiffStats {
    /// Number of rows that are not `same`.
    #[must_use]
    pub const fn differences(&self) -> usize {
        self.changed + self.unique
    }
}

// ============================================================================
// Result
// ============================================================================

/// Aligned two-column diff.
///
/// `left_lines` and `right_lines` always have the same length; row `i` of
/// one is displayed next to row `i` of the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub left_lines: Vec<DiffLine>,
    pub right_lines: Vec<DiffLine>,
    pub stats: DiffStats,
    /// Ascending row indices of every non-`same` row.
    pub diff_indices: Vec<usize>,
}

impl DiffResult {
    /// Number of aligned rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.left_lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left_lines.is_empty()
    }

    /// True when no row differs. Two empty texts are identical.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.diff_indices.is_empty()
    }

    /// Iterate over `(left, right)` row pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&DiffLine, &DiffLine)> + '_ {
        self.left_lines.iter().zip(&self.right_lines)
    }

    /// First differing row strictly after `row`.
    ///
    /// Pass `None` to get the first difference.
    #[must_use]
    pub fn next_diff(&self, row: Option<usize>) -> Option<usize> {
        match row {
            None => self.diff_indices.first().copied(),
            Some(row) => {
                let at = self.diff_indices.partition_point(|&idx| idx <= row);
                self.diff_indices.get(at).copied()
            }
        }
    }

    /// Last differing row strictly before `row`.
    ///
    /// Pass `None` to get the last difference.
    #[must_use]
    pub fn prev_diff(&self, row: Option<usize>) -> Option<usize> {
        match row {
            None => self.diff_indices.last().copied(),
            Some(row) => {
                let at = self.diff_indices.partition_point(|&idx| idx < row);
                at.checked_sub(1).map(|i| self.diff_indices[i])
            }
        }
    }

    fn push(&mut self, left: DiffLine, right: DiffLine) {
        if left.kind != DiffLineKind::Same {
            self.diff_indices.push(self.left_lines.len());
        }
        self.left_lines.push(left);
        self.right_lines.push(right);
    }
}

// ============================================================================
// Computation
// ============================================================================

/// Split `text` into lines after normalizing CRLF and lone CR to LF.
///
/// Empty text has no lines. A trailing newline yields a trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Align `left` against `right` line by line.
///
/// ```
/// use gridkit_diff::{DiffLineKind, compute_diff};
///
/// let diff = compute_diff("a\nb\nc", "a\nx\nc");
/// assert_eq!(diff.diff_indices, [1]);
/// assert_eq!(diff.left_lines[1].kind, DiffLineKind::Changed);
/// assert_eq!(diff.right_lines[1].content, "x");
/// ```
#[must_use]
pub fn compute_diff(left: &str, right: &str) -> DiffResult {
    let left = split_lines(left);
    let right = split_lines(right);
    let lcs = compute_lcs(&left, &right);

    let mut result = DiffResult::default();
    let (mut li, mut ri) = (0usize, 0usize);
    let mut anchors = lcs.iter().peekable();

    while li < left.len() || ri < right.len() {
        let anchor = anchors.peek();
        if let Some(m) = anchor
            && m.left_index == li
            && m.right_index == ri
        {
            result.push(
                DiffLine::source(li, left[li].as_str(), DiffLineKind::Same),
                DiffLine::source(ri, right[ri].as_str(), DiffLineKind::Same),
            );
            result.stats.identical += 1;
            li += 1;
            ri += 1;
            anchors.next();
            continue;
        }

        let (left_end, right_end) = anchor.map_or((left.len(), right.len()), |m| (m.left_index, m.right_index));
        let left_pending = li < left_end;
        let right_pending = ri < right_end;

        match (left_pending, right_pending) {
            (true, true) => {
                result.push(
                    DiffLine::source(li, left[li].as_str(), DiffLineKind::Changed),
                    DiffLine::source(ri, right[ri].as_str(), DiffLineKind::Changed),
                );
                result.stats.changed += 1;
                li += 1;
                ri += 1;
            }
            (true, false) => {
                result.push(
                    DiffLine::source(li, left[li].as_str(), DiffLineKind::Unique),
                    DiffLine::empty(),
                );
                result.stats.unique += 1;
                li += 1;
            }
            (false, true) => {
                result.push(
                    DiffLine::empty(),
                    DiffLine::source(ri, right[ri].as_str(), DiffLineKind::Unique),
                );
                result.stats.unique += 1;
                ri += 1;
            }
            // Unreachable: with no pending line on either side both cursors
            // sit on the anchor, or both are exhausted.
            (false, false) => break,
        }
    }

    tracing::debug!(
        left = left.len(),
        right = right.len(),
        common = lcs.len(),
        rows = result.len(),
        changed = result.stats.changed,
        unique = result.stats.unique,
        "computed line diff"
    );

    result
}
