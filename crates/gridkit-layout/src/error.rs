#![forbid(unsafe_code)]

use crate::item::ItemId;

/// Errors raised by layout validation and the [`GridLayout`](crate::GridLayout) façade.
///
/// Placement itself never fails: every operation over a validated layout
/// settles, possibly far down the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("{context} must be an array")]
    NotAnArray { context: String },

    #[error("{context}[{index}] must be an object")]
    NotAnObject { context: String, index: usize },

    #[error("{context}[{index}].{field} must be a number")]
    NotANumber {
        context: String,
        index: usize,
        field: &'static str,
    },

    #[error("{context}[{index}].{field} must be an integer in grid range")]
    NotAGridInteger {
        context: String,
        index: usize,
        field: &'static str,
    },

    #[error("{context}[{index}].static must be a boolean")]
    NotABoolean { context: String, index: usize },

    #[error("{context}[{index}].{field} must be positive (got {value})")]
    NonPositiveExtent {
        context: String,
        index: usize,
        field: &'static str,
        value: i32,
    },

    #[error("{context}[{index}].{field} must not be negative (got {value})")]
    NegativeOrigin {
        context: String,
        index: usize,
        field: &'static str,
        value: i32,
    },

    #[error("{context}[{index}] {edge} edge {value} exceeds the grid limit {max}")]
    ExtentOutOfRange {
        context: String,
        index: usize,
        edge: &'static str,
        value: i64,
        max: i32,
    },

    #[error("{context}[{index}] reuses item id `{id}`")]
    DuplicateId {
        context: String,
        index: usize,
        id: ItemId,
    },

    #[error("{context}[{index}] is malformed: {reason}")]
    Malformed {
        context: String,
        index: usize,
        reason: String,
    },

    #[error("no layout item with id `{0}`")]
    UnknownItem(ItemId),

    #[error("invalid grid config: {0}")]
    InvalidConfig(String),
}
