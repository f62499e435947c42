#![forbid(unsafe_code)]

//! Collision-driven displacement for moves and resizes.
//!
//! # Algorithm
//!
//! Moving an item marks it as moved for the current pass and collects
//! everything it now overlaps, in row-major order (reversed when the item
//! travels upward). Each collider is then displaced away from the mover:
//!
//! 1. On a direct user action, try the slot directly above the mover.
//! 2. On a pure horizontal conflict, nudge sideways by `min_w` columns if
//!    the row is free in that direction (right first).
//! 3. Otherwise push the collider one row down.
//!
//! Every displacement is itself a move and may displace further items.
//! Colliders already moved in this pass are skipped, as are colliders the
//! mover sits more than a quarter of their height below. A static collider
//! swaps roles: the mover is displaced around it instead.
//!
//! # Work list
//!
//! Nested displacements are driven by an explicit stack of frames
//! rather than recursion. Each frame holds one moved item and its
//! collision list; the top frame is always the innermost pending move, so
//! visiting order matches a depth-first recursive formulation exactly.
//!
//! # Termination
//!
//! Within a pass each non-static item is displaced at most once from a
//! non-static collision. Repeated displacement of a mover around statics
//! is monotone: downward pushes only increase `y`, and sideways nudges keep
//! heading away from the static until the row edge is reached.

use rustc_hash::FxHashSet;

use crate::collision::{collisions_at, first_rect_collision};
use crate::config::GridConfig;
use crate::item::{ItemId, LayoutItem};
use crate::ordering::row_col_order;

// ============================================================================
// ResolutionContext
// ============================================================================

/// Pass-scoped state shared by consecutive moves of one gesture.
///
/// Holds the ids of items moved since the last compaction. An id in this
/// set is never displaced again until [`clear_moved`](Self::clear_moved).
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    moved: FxHashSet<ItemId>,
    steps: usize,
}

impl ResolutionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_moved(&self, id: &ItemId) -> bool {
        self.moved.contains(id)
    }

    #[must_use]
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    /// Ids moved in the current pass, in no particular order.
    pub fn moved(&self) -> impl Iterator<Item = &ItemId> {
        self.moved.iter()
    }

    /// Settle every item: forget the moved set.
    pub fn clear_moved(&mut self) {
        self.moved.clear();
    }

    /// Collision checks performed since creation.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn mark_moved(&mut self, id: &ItemId) {
        if !self.moved.contains(id) {
            self.moved.insert(id.clone());
        }
    }

    fn unmark_moved(&mut self, id: &ItemId) {
        self.moved.remove(id);
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of a move or resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Static item, non-terminal resize tick: nothing happened.
    Ignored,
    /// The move would collide and collisions are prevented; nothing changed.
    Rejected,
    /// The move was applied and all collisions were processed.
    Resolved {
        /// Collision checks performed while resolving.
        steps: usize,
    },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Stage of a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePhase {
    /// Intermediate tick while the handle is dragged.
    #[default]
    Resizing,
    /// The handle was released.
    End,
}

// ============================================================================
// Resolver
// ============================================================================

/// One pending move: the moved item and the colliders still to visit.
#[derive(Debug)]
struct Frame {
    item: usize,
    collisions: Vec<usize>,
    next: usize,
    user_action: bool,
}

enum Begin {
    Ignored,
    Rejected,
    Started(Frame),
}

/// Applies moves and resizes to a layout, displacing colliding items.
pub struct Resolver<'a> {
    items: &'a mut [LayoutItem],
    ctx: &'a mut ResolutionContext,
    config: &'a GridConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(
        items: &'a mut [LayoutItem],
        ctx: &'a mut ResolutionContext,
        config: &'a GridConfig,
    ) -> Self {
        Self { items, ctx, config }
    }

    /// Move `items[index]` and resolve the collisions it causes.
    ///
    /// `new_x` / `new_y` of `None` leave that axis alone. With
    /// `prevent_collision`, a move that lands on any other item is undone
    /// and reported as [`MoveOutcome::Rejected`].
    pub fn move_element(
        &mut self,
        index: usize,
        new_x: Option<i32>,
        new_y: Option<i32>,
        is_user_action: bool,
        prevent_collision: bool,
    ) -> MoveOutcome {
        let from = self.items[index].rect();
        let frame = match self.begin_move(index, new_x, new_y, is_user_action, prevent_collision) {
            Begin::Ignored => return MoveOutcome::Ignored,
            Begin::Rejected => {
                tracing::debug!(item = %self.items[index].id, "move rejected by collision");
                return MoveOutcome::Rejected;
            }
            Begin::Started(frame) => frame,
        };

        let steps = self.run(vec![frame]);
        tracing::debug!(
            item = %self.items[index].id,
            from_x = from.x,
            from_y = from.y,
            to_x = self.items[index].x,
            to_y = self.items[index].y,
            steps,
            "move resolved"
        );
        MoveOutcome::Resolved { steps }
    }

    /// Resolve collisions caused by resizing `items[index]`.
    ///
    /// The new size must already be applied. Only [`ResizePhase::End`]
    /// does any work; every collider is displaced in row-major order.
    pub fn resize_element(
        &mut self,
        index: usize,
        phase: ResizePhase,
        is_user_action: bool,
    ) -> MoveOutcome {
        if phase != ResizePhase::End || self.items[index].is_static {
            return MoveOutcome::Ignored;
        }

        let order = row_col_order(self.items);
        let collisions = collisions_at(self.items, &order, index);
        let mut steps = 0;
        for collider in collisions {
            steps += 1;
            self.ctx.steps += 1;
            let (x, y) = self.displacement_target(index, collider, is_user_action);
            if let Begin::Started(frame) = self.begin_move(collider, x, y, false, false) {
                steps += self.run(vec![frame]);
            }
        }

        tracing::debug!(item = %self.items[index].id, steps, "resize resolved");
        MoveOutcome::Resolved { steps }
    }

    /// Move `displaced` clear of `fixed` and resolve the fallout.
    pub fn move_element_away_from_collision(
        &mut self,
        fixed: usize,
        displaced: usize,
        is_user_action: bool,
    ) -> MoveOutcome {
        let (x, y) = self.displacement_target(fixed, displaced, is_user_action);
        self.move_element(displaced, x, y, false, false)
    }

    /// Apply a move and collect its collisions.
    fn begin_move(
        &mut self,
        index: usize,
        new_x: Option<i32>,
        new_y: Option<i32>,
        user_action: bool,
        prevent_collision: bool,
    ) -> Begin {
        let item = &mut self.items[index];
        if item.is_static {
            return Begin::Ignored;
        }

        let (old_x, old_y) = (item.x, item.y);
        let moving_up = new_y.is_some_and(|y| y < old_y);
        if let Some(x) = new_x {
            item.x = x;
        }
        if let Some(y) = new_y {
            item.y = y;
        }
        let id = item.id.clone();
        self.ctx.mark_moved(&id);

        let order = self.collision_order(moving_up);
        let collisions = collisions_at(self.items, &order, index);

        if prevent_collision && !collisions.is_empty() {
            let item = &mut self.items[index];
            item.x = old_x;
            item.y = old_y;
            self.ctx.unmark_moved(&id);
            return Begin::Rejected;
        }

        Begin::Started(Frame {
            item: index,
            collisions,
            next: 0,
            user_action,
        })
    }

    /// Row-major order, reversed for upward travel so the nearest
    /// colliders in the direction of motion come first.
    fn collision_order(&self, moving_up: bool) -> Vec<usize> {
        let mut order = row_col_order(self.items);
        if moving_up {
            order.reverse();
        }
        order
    }

    /// Drain the frame stack. Returns the number of collisions visited.
    fn run(&mut self, mut stack: Vec<Frame>) -> usize {
        let mut steps = 0;

        while let Some(frame) = stack.last_mut() {
            let Some(&collider) = frame.collisions.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let (mover, user_action) = (frame.item, frame.user_action);
            steps += 1;

            let other = &self.items[collider];
            if self.ctx.is_moved(&other.id) {
                continue;
            }
            let dy = i64::from(self.items[mover].y) - i64::from(other.y);
            // Mover is mostly below the collider: treat as a near miss.
            if dy > 0 && 4 * dy > i64::from(other.h) {
                continue;
            }

            let (fixed, displaced) = if other.is_static {
                (collider, mover)
            } else {
                (mover, collider)
            };
            let (x, y) = self.displacement_target(fixed, displaced, user_action);
            tracing::trace!(
                fixed = %self.items[fixed].id,
                displaced = %self.items[displaced].id,
                x = ?x,
                y = ?y,
                depth = stack.len(),
                "displacing item"
            );
            if let Begin::Started(next) = self.begin_move(displaced, x, y, false, false) {
                stack.push(next);
            }
        }

        self.ctx.steps += steps;
        steps
    }

    /// Where `displaced` should go to get out of `fixed`'s way.
    fn displacement_target(
        &self,
        fixed: usize,
        displaced: usize,
        user_action: bool,
    ) -> (Option<i32>, Option<i32>) {
        let anchor = &self.items[fixed];
        let item = &self.items[displaced];

        if user_action {
            let probe = item.rect().with_y(anchor.y.saturating_sub(item.h).max(0));
            if first_rect_collision(self.items, &probe).is_none() {
                return (None, Some(probe.y));
            }
        }

        if anchor.y == item.y {
            let step = self.config.min_w;
            let room_right = anchor.x < item.x
                && item.rect().right().saturating_add(step) <= self.config.col_num
                && !self.items.iter().any(|o| o.y == item.y && o.x > item.x);
            let room_left = anchor.x > item.x
                && item.x >= step
                && !self.items.iter().any(|o| o.y == item.y && o.x < item.x);
            if room_right {
                return (Some(item.x + step), Some(item.y));
            }
            if room_left {
                return (Some(item.x - step), Some(item.y));
            }
        }

        (None, Some(item.y.saturating_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn resolve(
        items: &mut [LayoutItem],
        ctx: &mut ResolutionContext,
        index: usize,
        x: Option<i32>,
        y: Option<i32>,
        user: bool,
        prevent: bool,
    ) -> MoveOutcome {
        let config = GridConfig::default();
        Resolver::new(items, ctx, &config).move_element(index, x, y, user, prevent)
    }

    fn pos(item: &LayoutItem) -> (i32, i32) {
        (item.x, item.y)
    }

    #[test]
    fn static_items_ignore_moves() {
        let mut items = vec![LayoutItem::fixed("s", 0, 0, 2, 2)];
        let mut ctx = ResolutionContext::new();
        let outcome = resolve(&mut items, &mut ctx, 0, Some(4), Some(4), true, false);
        assert_eq!(outcome, MoveOutcome::Ignored);
        assert_eq!(pos(&items[0]), (0, 0));
        assert_eq!(ctx.moved_count(), 0);
    }

    #[test]
    fn collider_is_pushed_down_one_row() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 2), LayoutItem::new("b", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        let outcome = resolve(&mut items, &mut ctx, 0, None, Some(1), false, false);
        assert!(outcome.is_resolved());
        assert_eq!(pos(&items[0]), (0, 1));
        assert_eq!(pos(&items[1]), (0, 3));
        assert!(ctx.is_moved(&ItemId::from("a")));
        assert!(ctx.is_moved(&ItemId::from("b")));

        let mut moved: Vec<&str> = ctx.moved().map(ItemId::as_str).collect();
        moved.sort_unstable();
        assert_eq!(moved, ["a", "b"]);
    }

    #[test]
    fn user_drag_swaps_with_the_item_below() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 2), LayoutItem::new("b", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(2), true, false);
        assert_eq!(pos(&items[0]), (0, 2));
        assert_eq!(pos(&items[1]), (0, 0));
    }

    #[test]
    fn user_drag_pushes_down_when_the_slot_above_is_taken() {
        // The slot above "a" overlaps "a" itself, so no swap happens.
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::new("b", 0, 1, 2, 2)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(1), true, false);
        assert_eq!(pos(&items[0]), (0, 1));
        assert_eq!(pos(&items[1]), (0, 2));
    }

    #[test]
    fn displaced_item_blocks_its_own_lift() {
        // Above "a" at row 5 is rows 1..5; "b" still covers row 4 of it.
        let mut items = vec![LayoutItem::new("a", 4, 0, 2, 1), LayoutItem::new("b", 0, 4, 2, 4)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, Some(0), Some(5), true, false);
        assert_eq!(pos(&items[1]), (0, 5));
    }

    #[test]
    fn user_drag_falls_back_to_a_sideways_nudge() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::new("b", 2, 0, 2, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, Some(1), None, true, false);
        assert_eq!(pos(&items[0]), (1, 0));
        assert_eq!(pos(&items[1]), (3, 0));
    }

    #[test]
    fn user_drag_onto_a_static_lifts_the_mover() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::fixed("s", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(2), true, false);
        assert_eq!(pos(&items[0]), (0, 1));
        assert_eq!(pos(&items[1]), (0, 2));
        assert_eq!(ctx.moved().collect::<Vec<_>>(), [&ItemId::from("a")]);
    }

    #[test]
    fn prevent_collision_rejects_atomically() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 2), LayoutItem::new("b", 0, 2, 2, 2)];
        let before = items.clone();
        let mut ctx = ResolutionContext::new();
        let outcome = resolve(&mut items, &mut ctx, 0, Some(1), Some(1), true, true);
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(items, before);
        assert_eq!(ctx.moved_count(), 0);
    }

    #[test]
    fn prevent_collision_allows_free_moves() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 2), LayoutItem::new("b", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        let outcome = resolve(&mut items, &mut ctx, 0, Some(6), None, true, true);
        assert_eq!(outcome, MoveOutcome::Resolved { steps: 0 });
        assert_eq!(pos(&items[0]), (6, 0));
    }

    #[test]
    fn same_row_conflict_shifts_right() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::new("b", 2, 0, 2, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, Some(1), None, false, false);
        assert_eq!(pos(&items[1]), (3, 0));
    }

    #[test]
    fn same_row_conflict_shifts_left() {
        let mut items = vec![LayoutItem::new("a", 4, 0, 2, 1), LayoutItem::new("b", 2, 0, 2, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, Some(3), None, false, false);
        assert_eq!(pos(&items[1]), (1, 0));
    }

    #[test]
    fn occupied_row_falls_back_to_pushing_down() {
        let mut items = vec![
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 2, 0, 2, 1),
            LayoutItem::new("c", 8, 0, 2, 1),
        ];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, Some(1), None, false, false);
        assert_eq!(pos(&items[1]), (2, 1));
        assert_eq!(pos(&items[2]), (8, 0));
    }

    #[test]
    fn lateral_shift_respects_the_column_limit() {
        let mut items = vec![LayoutItem::new("a", 8, 0, 2, 1), LayoutItem::new("b", 10, 0, 2, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, Some(9), None, false, false);
        assert_eq!(pos(&items[1]), (10, 1));
    }

    #[test]
    fn lateral_step_follows_min_width() {
        let config = GridConfig::default().min_size(2, 1);
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::new("b", 2, 0, 2, 1)];
        let mut ctx = ResolutionContext::new();
        Resolver::new(&mut items, &mut ctx, &config).move_element(0, Some(1), None, false, false);
        assert_eq!(pos(&items[1]), (4, 0));
    }

    #[test]
    fn deep_overlap_from_below_is_a_near_miss() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 4), LayoutItem::new("b", 0, 4, 2, 4)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 1, None, Some(2), false, false);
        assert_eq!(pos(&items[0]), (0, 0));
        assert_eq!(pos(&items[1]), (0, 2));
    }

    #[test]
    fn shallow_overlap_from_below_displaces() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 4), LayoutItem::new("b", 0, 4, 2, 4)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 1, None, Some(1), false, false);
        assert_eq!(pos(&items[0]), (0, 1));
    }

    #[test]
    fn near_miss_tolerance_holds_for_tall_items() {
        let tall = 1_000_000_000;
        let mut items = vec![LayoutItem::new("top", 0, 0, 1, tall), LayoutItem::new("m", 0, 1_100_000_000, 1, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 1, None, Some(600_000_000), false, false);
        assert_eq!(pos(&items[0]), (0, 0));
        assert_eq!(pos(&items[1]), (0, 600_000_000));

        // Exactly a quarter of the way down still displaces.
        let mut items = vec![LayoutItem::new("top", 0, 0, 1, tall), LayoutItem::new("m", 0, 1_100_000_000, 1, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 1, None, Some(tall / 4), false, false);
        assert_eq!(pos(&items[0]), (0, 1));
    }

    #[test]
    fn static_collider_is_never_moved() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 2), LayoutItem::fixed("s", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(2), false, false);
        assert_eq!(pos(&items[1]), (0, 2));
        // The mover is pushed past the static until it is mostly below it.
        assert_eq!(pos(&items[0]), (0, 3));
        assert!(!ctx.is_moved(&ItemId::from("s")));
    }

    #[test]
    fn moved_items_are_not_displaced_twice() {
        let mut items = vec![
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 0, 1, 2, 1),
            LayoutItem::new("c", 4, 0, 2, 1),
        ];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(1), false, false);
        assert_eq!(pos(&items[1]), (0, 2));

        // Drag "c" onto "b" within the same pass: "b" already moved, stays put.
        resolve(&mut items, &mut ctx, 2, Some(0), Some(2), false, false);
        assert_eq!(pos(&items[1]), (0, 2));

        ctx.clear_moved();
        resolve(&mut items, &mut ctx, 2, Some(0), Some(2), false, false);
        assert_eq!(pos(&items[1]), (0, 3));
    }

    #[test]
    fn displacement_cascades() {
        let mut items = vec![
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 0, 1, 2, 1),
            LayoutItem::new("c", 0, 2, 2, 1),
        ];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(1), false, false);
        assert_eq!(items.iter().map(|item| item.y).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn upward_moves_visit_colliders_bottom_first() {
        let mut items = vec![
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("b", 0, 1, 1, 1),
            LayoutItem::new("c", 0, 2, 1, 1),
        ];
        let mut ctx = ResolutionContext::new();
        let config = GridConfig::default();
        let resolver = Resolver::new(&mut items, &mut ctx, &config);
        assert_eq!(resolver.collision_order(false), [0, 1, 2]);
        assert_eq!(resolver.collision_order(true), [2, 1, 0]);
    }

    #[test]
    fn resize_only_resolves_on_release() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 3), LayoutItem::new("b", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        let config = GridConfig::default();

        let mut resolver = Resolver::new(&mut items, &mut ctx, &config);
        assert_eq!(resolver.resize_element(0, ResizePhase::Resizing, true), MoveOutcome::Ignored);
        let outcome = resolver.resize_element(0, ResizePhase::End, false);
        assert!(outcome.is_resolved());
        assert_eq!(pos(&items[1]), (0, 3));
    }

    #[test]
    fn user_resize_lifts_colliders_above() {
        // "a" was just widened from 2 to 4 columns over "b".
        let mut items = vec![LayoutItem::new("a", 0, 2, 4, 1), LayoutItem::new("b", 2, 2, 2, 1)];
        let mut ctx = ResolutionContext::new();
        let config = GridConfig::default();
        let outcome = Resolver::new(&mut items, &mut ctx, &config).resize_element(0, ResizePhase::End, true);
        assert_eq!(outcome, MoveOutcome::Resolved { steps: 1 });
        assert_eq!(pos(&items[1]), (2, 1));
        assert_eq!(ctx.steps(), 1);
    }

    #[test]
    fn resize_steps_reach_the_context() {
        let mut items = vec![
            LayoutItem::new("a", 0, 0, 2, 3),
            LayoutItem::new("b", 0, 2, 2, 1),
            LayoutItem::new("c", 0, 3, 2, 1),
        ];
        let mut ctx = ResolutionContext::new();
        let config = GridConfig::default();
        let outcome = Resolver::new(&mut items, &mut ctx, &config).resize_element(0, ResizePhase::End, false);
        let MoveOutcome::Resolved { steps } = outcome else {
            panic!("expected a resolved resize, got {outcome:?}");
        };
        // One check for "b" against "a", one for "c" against the pushed "b".
        assert_eq!(steps, 2);
        assert_eq!(ctx.steps(), steps);
    }

    #[test]
    fn resizing_a_static_item_is_ignored() {
        let mut items = vec![LayoutItem::fixed("s", 0, 0, 2, 3), LayoutItem::new("b", 0, 2, 2, 2)];
        let mut ctx = ResolutionContext::new();
        let config = GridConfig::default();
        let outcome = Resolver::new(&mut items, &mut ctx, &config).resize_element(0, ResizePhase::End, false);
        assert_eq!(outcome, MoveOutcome::Ignored);
        assert_eq!(pos(&items[1]), (0, 2));
    }

    #[test]
    fn away_from_collision_uses_the_same_rules() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 2), LayoutItem::new("b", 0, 1, 2, 2)];
        let mut ctx = ResolutionContext::new();
        let config = GridConfig::default();
        Resolver::new(&mut items, &mut ctx, &config).move_element_away_from_collision(0, 1, false);
        assert_eq!(pos(&items[1]), (0, 2));
    }

    #[test]
    fn step_counter_accumulates_in_context() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::new("b", 0, 1, 2, 1)];
        let mut ctx = ResolutionContext::new();
        let outcome = resolve(&mut items, &mut ctx, 0, None, Some(1), false, false);
        let MoveOutcome::Resolved { steps } = outcome else {
            panic!("expected a resolved move, got {outcome:?}");
        };
        assert!(steps >= 1);
        assert_eq!(ctx.steps(), steps);
    }

    #[test]
    #[traced_test]
    fn displacements_are_traced() {
        let mut items = vec![LayoutItem::new("a", 0, 0, 2, 1), LayoutItem::new("b", 0, 1, 2, 1)];
        let mut ctx = ResolutionContext::new();
        resolve(&mut items, &mut ctx, 0, None, Some(1), false, false);
        assert!(logs_contain("displacing item"));
        assert!(logs_contain("move resolved"));
    }
}
