#![forbid(unsafe_code)]

//! Owned grid layout: items, configuration, and the current pass state.
//!
//! [`GridLayout`] is what a presentation layer holds on to during a
//! dashboard session. It addresses items by id, feeds the configured
//! column count into every engine, and clears the moved set whenever the
//! layout is compacted.
//!
//! ```
//! use gridkit_layout::{GridConfig, GridLayout, LayoutItem};
//!
//! let mut grid = GridLayout::new(
//!     vec![LayoutItem::new("a", 0, 0, 4, 2), LayoutItem::new("b", 0, 2, 4, 2)],
//!     GridConfig::default(),
//! )?;
//!
//! // Dragging "a" down pushes "b" out of the way.
//! grid.move_item(&"a".into(), None, Some(1), false)?;
//! assert_eq!(grid.get(&"b".into()).map(|b| b.y), Some(3));
//!
//! // Compaction closes the gap again.
//! grid.compact();
//! assert_eq!(grid.get(&"a".into()).map(|a| a.y), Some(0));
//! # Ok::<(), gridkit_layout::LayoutError>(())
//! ```

use crate::bounds::correct_bounds;
use crate::compact::compact_in_place;
use crate::config::GridConfig;
use crate::displace::{MoveOutcome, ResizePhase, ResolutionContext, Resolver};
use crate::error::LayoutError;
use crate::item::{ItemId, LayoutItem};
use crate::ordering::sort_row_col;
use crate::validate::validate_items;

/// A layout plus the configuration and pass state needed to edit it.
#[derive(Debug, Clone)]
pub struct GridLayout {
    items: Vec<LayoutItem>,
    config: GridConfig,
    ctx: ResolutionContext,
}

impl GridLayout {
    /// Validate `config` and `items` and take ownership of them.
    pub fn new(items: Vec<LayoutItem>, config: GridConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        validate_items(&items, "Layout")?;
        Ok(Self {
            items,
            config,
            ctx: ResolutionContext::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<LayoutItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LayoutItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Whether `id` was moved since the last compaction.
    #[must_use]
    pub fn is_moved(&self, id: &ItemId) -> bool {
        self.ctx.is_moved(id)
    }

    #[must_use]
    pub fn context(&self) -> &ResolutionContext {
        &self.ctx
    }

    /// Lowest occupied row boundary (`max(y + h)`), 0 when empty.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.items.iter().map(LayoutItem::bottom).max().unwrap_or(0)
    }

    pub fn statics(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.iter().filter(|item| item.is_static)
    }

    /// The last group header above row `y`, in row-major order.
    ///
    /// `group_ids` lists the items acting as section headers; the result
    /// is the header a drop at row `y` belongs under.
    #[must_use]
    pub fn find_nearest_group(&self, y: i32, group_ids: &[ItemId]) -> Option<&LayoutItem> {
        sort_row_col(&self.items)
            .into_iter()
            .rev()
            .find(|item| item.y < y && group_ids.contains(&item.id))
    }

    /// Move an item and displace whatever it lands on.
    ///
    /// `None` keeps that coordinate. Uses the configured
    /// `prevent_collision` policy.
    pub fn move_item(
        &mut self,
        id: &ItemId,
        x: Option<i32>,
        y: Option<i32>,
        is_user_action: bool,
    ) -> Result<MoveOutcome, LayoutError> {
        let index = self.index_of(id)?;
        let prevent = self.config.prevent_collision;
        Ok(Resolver::new(&mut self.items, &mut self.ctx, &self.config).move_element(
            index,
            x,
            y,
            is_user_action,
            prevent,
        ))
    }

    /// Resize an item; collisions are resolved once the gesture ends.
    ///
    /// Sizes below the configured minimum are raised to it. Static items
    /// keep their size.
    pub fn resize_item(
        &mut self,
        id: &ItemId,
        w: i32,
        h: i32,
        phase: ResizePhase,
        is_user_action: bool,
    ) -> Result<MoveOutcome, LayoutError> {
        let index = self.index_of(id)?;
        let item = &mut self.items[index];
        if item.is_static {
            return Ok(MoveOutcome::Ignored);
        }
        item.w = w.max(self.config.min_w).min(self.config.col_num);
        item.h = h.max(self.config.min_h);
        Ok(Resolver::new(&mut self.items, &mut self.ctx, &self.config).resize_element(
            index,
            phase,
            is_user_action,
        ))
    }

    /// Compact in place and end the current pass.
    pub fn compact(&mut self) {
        compact_in_place(&mut self.items, self.config.vertical_compact);
        self.ctx.clear_moved();
    }

    /// Clamp every item to the configured column count.
    pub fn correct_bounds(&mut self) {
        correct_bounds(&mut self.items, self.config.col_num);
    }

    /// Flag an item for removal at the next compaction.
    pub fn mark_deleted(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        self.items[index].is_deleted = true;
        Ok(())
    }

    fn index_of(&self, id: &ItemId) -> Result<usize, LayoutError> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| LayoutError::UnknownItem(id.clone()))
    }
}
