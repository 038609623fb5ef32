//! Grid-level render options.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Option bundle handed to the grid widget alongside the columns.
///
/// Everything here is static policy except `frozen_column`, the output
/// position of the last hierarchical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub enable_auto_resize: bool,
    pub auto_fit_columns_on_first_load: bool,
    pub enable_column_reorder: bool,
    pub enable_sorting: bool,
    pub enable_filtering: bool,
    pub editable: bool,
    pub row_height: u32,
    pub header_row_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_column: Option<usize>,
    pub create_pre_header_panel: bool,
    pub show_pre_header_panel: bool,
    pub pre_header_panel_height: u32,
}

impl RenderOptions {
    /// Builds the option bundle for one rebuild.
    pub fn new(layout: &LayoutConfig, frozen_column: Option<usize>) -> Self {
        Self {
            enable_auto_resize: true,
            auto_fit_columns_on_first_load: true,
            enable_column_reorder: true,
            enable_sorting: true,
            enable_filtering: true,
            editable: true,
            row_height: layout.row_height,
            header_row_height: layout.header_row_height,
            frozen_column,
            create_pre_header_panel: true,
            show_pre_header_panel: true,
            pre_header_panel_height: layout.pre_header_panel_height,
        }
    }

    /// Number of pinned columns (boundary index plus one).
    pub fn frozen_count(&self) -> usize {
        self.frozen_column.map_or(0, |index| index + 1)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(&LayoutConfig::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_count_follows_boundary() {
        let layout = LayoutConfig::default();
        assert_eq!(RenderOptions::new(&layout, None).frozen_count(), 0);
        assert_eq!(RenderOptions::new(&layout, Some(2)).frozen_count(), 3);
    }

    #[test]
    fn absent_boundary_is_not_serialized() {
        let json = serde_json::to_value(RenderOptions::default()).unwrap();
        assert!(json.get("frozenColumn").is_none());
        assert_eq!(json["rowHeight"], 28);
    }
}
