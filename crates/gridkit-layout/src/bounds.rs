#![forbid(unsafe_code)]

//! Horizontal bounds correction.
//!
//! Items hanging past the right edge are pulled back in; items wider than
//! the grid are widened to exactly fill it. Static items that end up under
//! something are pushed down one row at a time, never sideways and never
//! resized to dodge the overlap.

use crate::collision::first_collision_at;
use crate::item::LayoutItem;

/// Clamp every item into `[0, cols)` and push overlapped statics down.
///
/// The obstacle set starts with every static item and grows with each
/// movable item as it is visited, in input order.
pub fn correct_bounds(layout: &mut [LayoutItem], cols: i32) {
    let mut collides_with: Vec<usize> = (0..layout.len()).filter(|&i| layout[i].is_static).collect();
    let mut pushed = 0usize;

    for index in 0..layout.len() {
        let item = &mut layout[index];
        if item.rect().right() > cols {
            item.x = cols - item.w;
        }
        if item.x < 0 {
            item.x = 0;
            item.w = cols;
        }

        if !item.is_static {
            collides_with.push(index);
            continue;
        }
        while first_collision_at(layout, &collides_with, index).is_some() {
            layout[index].y += 1;
            pushed += 1;
        }
    }

    tracing::debug!(items = layout.len(), cols, pushed, "corrected layout bounds");
}
