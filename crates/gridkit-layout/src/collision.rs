#![forbid(unsafe_code)]

//! Collision queries over a layout.
//!
//! Iteration order is caller-supplied and significant: the engines pass
//! row-major order so that "earlier" items are reported first.

use crate::geometry::{GridRect, collides};
use crate::item::LayoutItem;

/// First item in `layout` that overlaps `item`, skipping `item` itself.
pub fn first_collision<'a, I>(layout: I, item: &LayoutItem) -> Option<&'a LayoutItem>
where
    I: IntoIterator<Item = &'a LayoutItem>,
{
    layout.into_iter().find(|other| collides(other, item))
}

/// Every item in `layout` that overlaps `item`, in input order.
pub fn all_collisions<'a, I>(layout: I, item: &LayoutItem) -> Vec<&'a LayoutItem>
where
    I: IntoIterator<Item = &'a LayoutItem>,
{
    layout
        .into_iter()
        .filter(|other| collides(other, item))
        .collect()
}

/// First item overlapping a free-standing probe rectangle.
///
/// The probe belongs to no item, so nothing is excluded.
pub fn first_rect_collision<'a>(layout: &'a [LayoutItem], probe: &GridRect) -> Option<&'a LayoutItem> {
    layout.iter().find(|other| other.rect().overlaps(probe))
}

/// Index of the first candidate overlapping `items[index]`.
pub(crate) fn first_collision_at(
    items: &[LayoutItem],
    candidates: &[usize],
    index: usize,
) -> Option<usize> {
    let rect = items[index].rect();
    candidates
        .iter()
        .copied()
        .find(|&other| other != index && items[other].rect().overlaps(&rect))
}

/// Indices of every candidate overlapping `items[index]`, in candidate order.
pub(crate) fn collisions_at(items: &[LayoutItem], candidates: &[usize], index: usize) -> Vec<usize> {
    let rect = items[index].rect();
    candidates
        .iter()
        .copied()
        .filter(|&other| other != index && items[other].rect().overlaps(&rect))
        .collect()
}
