//! The three outputs of one rebuild.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::column::ColumnDefinition;
use crate::options::RenderOptions;

/// One data row: column header to scalar value.
pub type Row = Map<String, Value>;

/// Everything the grid widget needs to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridOutput {
    pub columns: Vec<ColumnDefinition>,
    pub options: RenderOptions,
    pub dataset: Vec<Row>,
}

impl GridOutput {
    /// Returns the pinned columns, left to right.
    pub fn frozen_columns(&self) -> &[ColumnDefinition] {
        let count = self.options.frozen_count().min(self.columns.len());
        &self.columns[..count]
    }

    /// Returns the distinct non-empty group labels in column order.
    pub fn column_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for column in &self.columns {
            let group = column.column_group.as_str();
            if !group.is_empty() && !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// Finds a column by id.
    pub fn column(&self, id: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.id == id)
    }
}
