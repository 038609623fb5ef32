//! Column building: canonical metadata plus rows to grid output.

use std::cmp::Ordering;

use serde_json::Value;

use flat_table_model::{
    ColumnCategory, ColumnDefinition, ColumnMeta, EditorSpec, FieldType, Formatter, GridConfig,
    GridOutput, RenderOptions, Row,
};

use crate::labels::{LabelParts, split_label};
use crate::normalize::normalize;

/// Derives column definitions, render options and the dataset.
///
/// The builder holds only configuration; every call to [`build`] produces a
/// fresh [`GridOutput`] and shares nothing with earlier calls.
///
/// [`build`]: ColumnBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ColumnBuilder {
    config: GridConfig,
}

impl ColumnBuilder {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Builds the grid output from normalized metadata and raw rows.
    ///
    /// Metadata is stably sorted by level, so entries with equal levels keep
    /// their input order and entries without a level come last. `0.0` and
    /// `-0.0` are the same level.
    pub fn build(&self, metas: &[ColumnMeta], rows: &Value) -> GridOutput {
        let mut sorted: Vec<&ColumnMeta> = metas.iter().collect();
        sorted.sort_by(|a, b| a.level.partial_cmp(&b.level).unwrap_or(Ordering::Equal));

        let mut columns = Vec::with_capacity(sorted.len());
        let mut frozen_column = None;
        for meta in sorted {
            let column = self.column(meta);
            if column.frozen {
                frozen_column = Some(columns.len());
            }
            columns.push(column);
        }

        let dataset = dataset(rows);
        tracing::debug!(
            columns = columns.len(),
            frozen = ?frozen_column,
            rows = dataset.len(),
            "Built grid"
        );

        GridOutput {
            columns,
            options: RenderOptions::new(&self.config.layout, frozen_column),
            dataset,
        }
    }

    /// Normalizes raw metadata and builds in one step.
    pub fn build_from_raw(&self, metadata: &Value, rows: &Value) -> GridOutput {
        self.build(&normalize(metadata), rows)
    }

    /// Builds the column definition for one entry.
    pub fn column(&self, meta: &ColumnMeta) -> ColumnDefinition {
        let layout = &self.config.layout;
        let LabelParts { group, name } =
            split_label(&self.config.labels, &meta.category, &meta.label);

        let mut column = ColumnDefinition {
            id: meta.header.clone(),
            name,
            field: meta.header.clone(),
            column_group: group,
            field_type: FieldType::String,
            frozen: false,
            sortable: true,
            filterable: true,
            min_width: layout.column_min_width,
            width: layout.column_width,
            formatter: None,
            editor: None,
        };

        match &meta.category {
            ColumnCategory::Hierarchical => {
                column.frozen = true;
            }
            ColumnCategory::Promo => {
                column.field_type = FieldType::Number;
                column.formatter = Some(Formatter::Decimal);
            }
            ColumnCategory::Aggregation => {
                column.field_type = FieldType::Number;
                column.formatter = Some(Formatter::Decimal);
                if meta.editable {
                    column.editor = Some(EditorSpec::float(layout.decimal_places));
                }
            }
            ColumnCategory::Other(raw) => {
                tracing::trace!(
                    header = %meta.header,
                    category = %raw,
                    "Unrecognized column category, rendering as text"
                );
            }
        }
        column
    }
}

/// Validated row sequence. Non-array input yields no rows; array elements
/// that are not objects are dropped.
pub fn dataset(rows: &Value) -> Vec<Row> {
    let Value::Array(items) = rows else {
        if !rows.is_null() {
            tracing::warn!("Row data is not an array, rendering no rows");
        }
        return Vec::new();
    };

    let dataset: Vec<Row> = items
        .iter()
        .filter_map(|item| item.as_object().cloned())
        .collect();
    let dropped = items.len() - dataset.len();
    if dropped > 0 {
        tracing::warn!(count = dropped, "Dropped row data entries that are not objects");
    }
    dataset
}

/// Normalizes and builds with the given configuration.
pub fn build_grid(config: &GridConfig, metadata: &Value, rows: &Value) -> GridOutput {
    ColumnBuilder::new(config.clone()).build_from_raw(metadata, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(header: &str, category: ColumnCategory, level: f64) -> ColumnMeta {
        ColumnMeta::new(header, header, category).with_level(level)
    }

    #[test]
    fn empty_metadata_has_no_columns_and_no_boundary() {
        let output = ColumnBuilder::default().build(&[], &json!([]));
        assert!(output.columns.is_empty());
        assert_eq!(output.options.frozen_column, None);
    }

    #[test]
    fn boundary_uses_output_position() {
        let metas = vec![
            meta("promo", ColumnCategory::Promo, 1.0),
            meta("plant", ColumnCategory::Hierarchical, 5.0),
            meta("sku", ColumnCategory::Hierarchical, 0.0),
        ];
        let output = ColumnBuilder::default().build(&metas, &json!([]));
        let ids: Vec<&str> = output.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["sku", "promo", "plant"]);
        assert_eq!(output.options.frozen_column, Some(2));
    }

    #[test]
    fn signed_zero_levels_keep_input_order() {
        let metas = vec![
            meta("second", ColumnCategory::Promo, -0.0),
            meta("first", ColumnCategory::Promo, 0.0),
            meta("third", ColumnCategory::Promo, -0.0),
        ];
        let output = ColumnBuilder::default().build(&metas, &json!([]));
        let ids: Vec<&str> = output.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first", "third"]);
    }

    #[test]
    fn promo_is_read_only_even_when_flagged() {
        let promo = meta("lift", ColumnCategory::Promo, 1.0).with_editable(true);
        let column = ColumnBuilder::default().column(&promo);
        assert_eq!(column.field_type, FieldType::Number);
        assert_eq!(column.formatter, Some(Formatter::Decimal));
        assert!(column.editor.is_none());
    }

    #[test]
    fn aggregation_editor_uses_configured_precision() {
        let mut config = GridConfig::default();
        config.layout.decimal_places = 3;
        let column = ColumnBuilder::new(config)
            .column(&meta("fcst", ColumnCategory::Aggregation, 1.0).with_editable(true));
        assert_eq!(column.editor, Some(EditorSpec::float(3)));
    }

    #[test]
    fn unknown_category_is_plain_text() {
        let kpi = meta("kpi", ColumnCategory::Other("KPI".to_string()), 1.0).with_editable(true);
        let column = ColumnBuilder::default().column(&kpi);
        assert_eq!(column.field_type, FieldType::String);
        assert!(!column.frozen);
        assert!(column.formatter.is_none());
        assert!(column.editor.is_none());
        assert!(column.sortable && column.filterable);
    }

    #[test]
    fn dataset_drops_non_objects() {
        let rows = dataset(&json!([{ "sku": "A" }, 3, "x", { "sku": "B" }]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["sku"], "B");
    }

    #[test]
    fn dataset_from_non_array_is_empty() {
        assert!(dataset(&json!({ "sku": "A" })).is_empty());
        assert!(dataset(&json!(null)).is_empty());
        assert!(dataset(&json!("rows")).is_empty());
    }
}
