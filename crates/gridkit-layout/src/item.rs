#![forbid(unsafe_code)]

//! Layout items: identified rectangles on the integer grid.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::GridRect;

/// Stable identifier of a layout item.
///
/// Hosts hand out either string or numeric ids; both deserialize into the
/// same textual form so `7` and `"7"` name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawItemId::deserialize(deserializer)? {
            RawItemId::Text(text) => Self(text),
            RawItemId::Number(n) => Self(n.to_string()),
        })
    }
}

/// An axis-aligned rectangle on the grid, owned by the host application.
///
/// The engines only ever mutate `x` and `y` (bounds correction may also
/// widen an item that is wider than the grid). Pass-scoped "moved" state
/// is tracked in [`ResolutionContext`](crate::ResolutionContext), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    #[serde(alias = "i")]
    pub id: ItemId,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Static items never move on their own but still block others.
    #[serde(rename = "static", default)]
    pub is_static: bool,
    /// Marked for removal; dropped at the start of compaction.
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

impl LayoutItem {
    /// Create a movable item.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            is_static: false,
            is_deleted: false,
        }
    }

    /// Create a static item.
    #[must_use]
    pub fn fixed(id: impl Into<ItemId>, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            is_static: true,
            ..Self::new(id, x, y, w, h)
        }
    }

    #[must_use]
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.w, self.h)
    }

    /// Row just below the item.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.rect().bottom()
    }
}
