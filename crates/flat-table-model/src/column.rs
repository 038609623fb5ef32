//! Column definitions handed to the grid widget.

use serde::{Deserialize, Serialize};

/// Value type of a column, used by the widget for sorting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
}

/// Display formatter applied to cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Formatter {
    /// Fixed-decimal number rendering.
    Decimal,
}

/// Kind of in-place editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorModel {
    Float,
}

/// Parameters for the in-place editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorParams {
    pub decimal_places: u8,
}

/// In-place editor attached to an editable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSpec {
    pub model: EditorModel,
    pub params: EditorParams,
}

impl EditorSpec {
    /// Floating-point editor with the given precision.
    pub fn float(decimal_places: u8) -> Self {
        Self {
            model: EditorModel::Float,
            params: EditorParams { decimal_places },
        }
    }
}

/// One display column.
///
/// `id` and `field` both carry the metadata header: the id identifies the
/// column inside the widget, the field looks the value up in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub id: String,
    /// Header text shown above the cells.
    pub name: String,
    pub field: String,
    /// Pre-header group label. Empty for ungrouped columns.
    pub column_group: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub frozen: bool,
    pub sortable: bool,
    pub filterable: bool,
    pub min_width: u32,
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorSpec>,
}

impl ColumnDefinition {
    /// Returns true when the widget may edit cells of this column.
    pub fn is_editable(&self) -> bool {
        self.editor.is_some()
    }

    /// Returns true for numeric columns.
    pub fn is_numeric(&self) -> bool {
        self.field_type == FieldType::Number
    }
}
