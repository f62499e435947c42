#![forbid(unsafe_code)]

//! Precondition checks for layouts coming from the host.
//!
//! The placement engines assume well-formed input. Raw JSON layouts are
//! checked field by field with [`validate_layout`] so a bad widget config
//! fails with the offending index and field named; typed layouts are
//! checked for geometric sanity with [`validate_items`].

use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LayoutError;
use crate::geometry::MAX_GRID_EXTENT;
use crate::item::LayoutItem;

const GEOMETRY_FIELDS: [&str; 4] = ["x", "y", "w", "h"];

/// Check a raw JSON layout before deserializing it.
///
/// `context` names the layout in error messages (`"Layout"` gives
/// `Layout[2].w must be a number`).
pub fn validate_layout(value: &Value, context: &str) -> Result<(), LayoutError> {
    let Some(entries) = value.as_array() else {
        return Err(LayoutError::NotAnArray {
            context: context.to_owned(),
        });
    };

    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_object() else {
            return Err(LayoutError::NotAnObject {
                context: context.to_owned(),
                index,
            });
        };

        for field in GEOMETRY_FIELDS {
            let Some(number) = fields.get(field).filter(|v| v.is_number()) else {
                return Err(LayoutError::NotANumber {
                    context: context.to_owned(),
                    index,
                    field,
                });
            };
            let in_range = number.as_i64().is_some_and(|n| i32::try_from(n).is_ok());
            if !in_range {
                return Err(LayoutError::NotAGridInteger {
                    context: context.to_owned(),
                    index,
                    field,
                });
            }
        }

        if let Some(flag) = fields.get("static")
            && !flag.is_boolean()
        {
            return Err(LayoutError::NotABoolean {
                context: context.to_owned(),
                index,
            });
        }
    }

    Ok(())
}

/// Validate and deserialize a raw JSON layout, then check its geometry.
pub fn parse_layout(value: &Value, context: &str) -> Result<Vec<LayoutItem>, LayoutError> {
    validate_layout(value, context)?;

    let entries = value.as_array().map(Vec::as_slice).unwrap_or_default();
    let items = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            LayoutItem::deserialize(entry).map_err(|err| LayoutError::Malformed {
                context: context.to_owned(),
                index,
                reason: err.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_items(&items, context)?;
    Ok(items)
}

/// Check typed items: positive extents, non-negative origins, edges within
/// [`MAX_GRID_EXTENT`], unique ids.
pub fn validate_items(items: &[LayoutItem], context: &str) -> Result<(), LayoutError> {
    let mut seen = FxHashSet::default();

    for (index, item) in items.iter().enumerate() {
        for (field, value) in [("w", item.w), ("h", item.h)] {
            if value <= 0 {
                return Err(LayoutError::NonPositiveExtent {
                    context: context.to_owned(),
                    index,
                    field,
                    value,
                });
            }
        }
        for (field, value) in [("x", item.x), ("y", item.y)] {
            if value < 0 {
                return Err(LayoutError::NegativeOrigin {
                    context: context.to_owned(),
                    index,
                    field,
                    value,
                });
            }
        }
        let edges = [
            ("right", i64::from(item.x) + i64::from(item.w)),
            ("bottom", i64::from(item.y) + i64::from(item.h)),
        ];
        for (edge, value) in edges {
            if value > i64::from(MAX_GRID_EXTENT) {
                return Err(LayoutError::ExtentOutOfRange {
                    context: context.to_owned(),
                    index,
                    edge,
                    value,
                    max: MAX_GRID_EXTENT,
                });
            }
        }
        if !seen.insert(&item.id) {
            return Err(LayoutError::DuplicateId {
                context: context.to_owned(),
                index,
                id: item.id.clone(),
            });
        }
    }

    Ok(())
}
