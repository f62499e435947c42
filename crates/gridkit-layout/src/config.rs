#![forbid(unsafe_code)]

//! Grid configuration supplied by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Default number of grid columns.
pub const DEFAULT_COL_NUM: i32 = 12;

/// Grid-wide parameters for placement and displacement.
///
/// `min_w` doubles as the lateral displacement step: a same-row collision
/// nudges the displaced item sideways by exactly this many columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub col_num: i32,
    pub min_w: i32,
    pub min_h: i32,
    /// Float items upward during compaction.
    pub vertical_compact: bool,
    /// Reject user moves that would overlap another item.
    pub prevent_collision: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            col_num: DEFAULT_COL_NUM,
            min_w: 1,
            min_h: 1,
            vertical_compact: true,
            prevent_collision: false,
        }
    }
}

impl GridConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn col_num(mut self, col_num: i32) -> Self {
        self.col_num = col_num;
        self
    }

    #[must_use]
    pub fn min_size(mut self, min_w: i32, min_h: i32) -> Self {
        self.min_w = min_w;
        self.min_h = min_h;
        self
    }

    #[must_use]
    pub fn vertical_compact(mut self, enabled: bool) -> Self {
        self.vertical_compact = enabled;
        self
    }

    #[must_use]
    pub fn prevent_collision(mut self, enabled: bool) -> Self {
        self.prevent_collision = enabled;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.col_num < 1 {
            return Err(LayoutError::InvalidConfig(format!(
                "colNum must be at least 1 (got {})",
                self.col_num
            )));
        }
        if self.min_w < 1 || self.min_h < 1 {
            return Err(LayoutError::InvalidConfig(format!(
                "minimum size must be at least 1x1 (got {}x{})",
                self.min_w, self.min_h
            )));
        }
        if self.min_w > self.col_num {
            return Err(LayoutError::InvalidConfig(format!(
                "minW {} exceeds colNum {}",
                self.min_w, self.col_num
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_twelve_column_grid() {
        let config = GridConfig::default();
        assert_eq!(config.col_num, 12);
        assert_eq!((config.min_w, config.min_h), (1, 1));
        assert!(config.vertical_compact);
        assert!(!config.prevent_collision);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"colNum": 24, "preventCollision": true}"#).unwrap();
        assert_eq!(config.col_num, 24);
        assert!(config.prevent_collision);
        assert_eq!(config.min_w, 1);
        assert!(config.vertical_compact);
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert!(GridConfig::new().col_num(0).validate().is_err());
        assert!(GridConfig::new().min_size(0, 1).validate().is_err());
        assert!(GridConfig::new().col_num(4).min_size(5, 1).validate().is_err());
    }
}
