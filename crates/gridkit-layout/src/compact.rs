#![forbid(unsafe_code)]

//! Vertical compaction.
//!
//! Items are settled one at a time in row-major order against a growing
//! obstacle set that starts out as the static items. An item only ever
//! rests on items finalized before it, so the result is deterministic and
//! a second pass is a no-op.
//!
//! # Termination
//!
//! The snap loop sets `y` to the bottom of the blocker, which is strictly
//! greater than the current `y` whenever the two overlap, and the obstacle
//! set is finite.

use crate::collision::{first_collision, first_collision_at};
use crate::item::LayoutItem;
use crate::ordering::row_col_order;

/// Compact `layout` into a new vector.
///
/// Deleted items are dropped. Static items keep their geometry. The output
/// keeps the input's positional order.
#[must_use]
pub fn compact(layout: &[LayoutItem], vertical_compact: bool) -> Vec<LayoutItem> {
    let mut items: Vec<LayoutItem> = layout.iter().filter(|item| !item.is_deleted).cloned().collect();
    compact_in_place(&mut items, vertical_compact);
    items
}

/// Settle a single item against already-placed obstacles.
///
/// With `vertical_compact` the item first floats up until blocked or at row
/// 0; it is then pushed below every obstacle it still overlaps.
pub fn compact_item(compare_with: &[&LayoutItem], item: &mut LayoutItem, vertical_compact: bool) {
    if vertical_compact {
        while item.y > 0 && first_collision(compare_with.iter().copied(), item).is_none() {
            item.y -= 1;
        }
    }
    while let Some(blocker) = first_collision(compare_with.iter().copied(), item) {
        item.y = blocker.bottom();
    }
}

pub(crate) fn compact_in_place(items: &mut Vec<LayoutItem>, vertical_compact: bool) {
    items.retain(|item| !item.is_deleted);

    let mut compare_with: Vec<usize> = (0..items.len()).filter(|&i| items[i].is_static).collect();
    let mut settled = 0usize;

    for index in row_col_order(items) {
        if items[index].is_static {
            continue;
        }
        let before = items[index].y;
        settle(items, &compare_with, index, vertical_compact);
        if items[index].y != before {
            settled += 1;
        }
        compare_with.push(index);
    }

    tracing::debug!(
        items = items.len(),
        statics = items.iter().filter(|item| item.is_static).count(),
        shifted = settled,
        vertical_compact,
        "compacted layout"
    );
}

fn settle(items: &mut [LayoutItem], compare_with: &[usize], index: usize, vertical_compact: bool) {
    if vertical_compact {
        while items[index].y > 0 && first_collision_at(items, compare_with, index).is_none() {
            items[index].y -= 1;
        }
    }
    while let Some(blocker) = first_collision_at(items, compare_with, index) {
        items[index].y = items[blocker].bottom();
    }
}
