#![forbid(unsafe_code)]

//! Grid placement and collision resolution for dashboard layouts.
//!
//! A layout is a set of [`LayoutItem`] rectangles on a grid with a fixed
//! column count and unbounded rows. This crate keeps such layouts tidy
//! while the user drags and resizes items:
//!
//! - [`compact`] pulls items upward until they rest on something.
//! - [`correct_bounds`] clamps items into the column range.
//! - [`Resolver`] applies a move or resize and displaces every item it
//!   lands on, recursively.
//! - [`GridLayout`] bundles the three behind an id-addressed API.
//!
//! Every algorithm derives its own row-major processing order, so the
//! order items are stored in never matters. All operations are total over
//! validated input; the worst case is an item pushed far down the grid.

pub mod bounds;
pub mod collision;
pub mod compact;
pub mod config;
pub mod displace;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod item;
pub mod ordering;
pub mod validate;

pub use bounds::correct_bounds;
pub use collision::{all_collisions, first_collision, first_rect_collision};
pub use compact::{compact, compact_item};
pub use config::{DEFAULT_COL_NUM, GridConfig};
pub use displace::{MoveOutcome, ResizePhase, ResolutionContext, Resolver};
pub use error::LayoutError;
pub use geometry::{GridRect, MAX_GRID_EXTENT, collides};
pub use grid::GridLayout;
pub use item::{ItemId, LayoutItem};
pub use ordering::{row_col_order, sort_row_col};
pub use validate::{parse_layout, validate_items, validate_layout};
