#![forbid(unsafe_code)]

//! Canonical row-major ordering.
//!
//! Every engine re-derives this order before processing, so the insertion
//! order of a layout carries no meaning. The sort is stable: items sharing
//! an origin keep their relative input order.

use crate::item::LayoutItem;

/// Items sorted by ascending `(y, x)`.
#[must_use]
pub fn sort_row_col(layout: &[LayoutItem]) -> Vec<&LayoutItem> {
    row_col_order(layout).into_iter().map(|i| &layout[i]).collect()
}

/// Indices of `layout` in ascending `(y, x)` order.
#[must_use]
pub fn row_col_order(layout: &[LayoutItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..layout.len()).collect();
    order.sort_by_key(|&i| (layout[i].y, layout[i].x));
    order
}
