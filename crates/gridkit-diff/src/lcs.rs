#![forbid(unsafe_code)]

//! Longest common subsequence over arbitrary comparable sequences.
//!
//! Classic (m+1)×(n+1) dynamic-programming table followed by a backtrack
//! from the bottom-right corner. O(m·n) time and space.
//!
//! The backtrack is fully deterministic: a diagonal step on equal elements,
//! otherwise the larger neighbour, with ties resolved by stepping up (the
//! left-hand index shrinks first). Downstream alignment depends on this
//! choice, so it must not change.

/// One aligned element of the common subsequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsMatch<'a, T> {
    /// The shared element, borrowed from the left sequence.
    pub value: &'a T,
    /// Position in the left sequence.
    pub left_index: usize,
    /// Position in the right sequence.
    pub right_index: usize,
}

/// Score table stored row-major in a single allocation.
struct Table {
    cols: usize,
    cells: Vec<u32>,
}

impl Table {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Compute the longest common subsequence of `left` and `right`.
///
/// Matches are returned in ascending order of both indices.
///
/// ```
/// use gridkit_diff::compute_lcs;
///
/// let lcs = compute_lcs(&["a", "b", "c"], &["a", "c"]);
/// let pairs: Vec<_> = lcs.iter().map(|m| (*m.value, m.left_index, m.right_index)).collect();
/// assert_eq!(pairs, [("a", 0, 0), ("c", 2, 1)]);
/// ```
#[must_use]
pub fn compute_lcs<'a, T: PartialEq>(left: &'a [T], right: &[T]) -> Vec<LcsMatch<'a, T>> {
    let (m, n) = (left.len(), right.len());
    if m == 0 || n == 0 {
        return Vec::new();
    }

    let mut table = Table::new(m + 1, n + 1);
    for i in 1..=m {
        for j in 1..=n {
            let score = if left[i - 1] == right[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, score);
        }
    }

    let mut matches = Vec::with_capacity(table.get(m, n) as usize);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            matches.push(LcsMatch {
                value: &left[i - 1],
                left_index: i - 1,
                right_index: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    matches.reverse();
    matches
}
