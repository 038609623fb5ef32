//! Metadata normalization.
//!
//! Reconciles both metadata schema variants into [`ColumnMeta`], applies
//! defaults and drops hidden entries. Normalization never fails: malformed
//! entries are coerced to defaults and a non-array input yields no columns.
//! Ordering is left untouched; sorting belongs to the builder.

mod coerce;
mod schema;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use flat_table_model::{ColumnCategory, ColumnMeta};

pub use schema::{FieldNames, MetaSchema};

use schema::{DISPLAY_FIELD, EDITABLE_FIELD, LEVEL_FIELD, STATUS_FIELD};

/// One raw metadata entry, decoded once at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct RawColumnMeta<'a> {
    /// Detected variant, `None` when no known field name was present.
    pub schema: Option<MetaSchema>,
    entry: Option<&'a Map<String, Value>>,
}

impl<'a> RawColumnMeta<'a> {
    /// Decodes one element of the metadata array.
    pub fn decode(value: &'a Value) -> Self {
        match value {
            Value::Object(entry) => Self {
                schema: MetaSchema::detect(entry),
                entry: Some(entry),
            },
            _ => Self {
                schema: None,
                entry: None,
            },
        }
    }

    /// Converts to the canonical shape, including hidden entries.
    pub fn to_meta(&self) -> ColumnMeta {
        let Some(entry) = self.entry else {
            return ColumnMeta::default();
        };
        ColumnMeta {
            header: coerce::text(self.field(|f| f.header)),
            label: coerce::text(self.field(|f| f.label)),
            category: match self.field(|f| f.category) {
                Some(Value::String(raw)) => ColumnCategory::parse(raw),
                _ => ColumnCategory::default(),
            },
            level: coerce::level(entry.get(LEVEL_FIELD)),
            editable: coerce::flag_on(entry.get(EDITABLE_FIELD)),
            visible: coerce::flag_not_off(entry.get(DISPLAY_FIELD))
                && coerce::flag_not_off(entry.get(STATUS_FIELD)),
        }
    }

    /// Looks a field up under the detected variant's name first, then under
    /// the other variants' names.
    fn field(&self, pick: impl Fn(FieldNames) -> &'static str) -> Option<&'a Value> {
        let entry = self.entry?;
        let preferred = self.schema.into_iter();
        let others = MetaSchema::ALL
            .into_iter()
            .filter(|schema| Some(*schema) != self.schema);
        preferred
            .chain(others)
            .find_map(|schema| entry.get(pick(schema.fields())))
    }
}

/// Normalizes a raw metadata array into visible canonical entries.
///
/// Entries keep their input order. A non-array input yields an empty list.
pub fn normalize(raw: &Value) -> Vec<ColumnMeta> {
    let Value::Array(entries) = raw else {
        if !raw.is_null() {
            tracing::warn!("Column metadata is not an array, rendering no columns");
        }
        return Vec::new();
    };

    let mut hidden = 0usize;
    let mut unrecognized = 0usize;
    let metas: Vec<ColumnMeta> = entries
        .iter()
        .map(RawColumnMeta::decode)
        .inspect(|raw| {
            if raw.schema.is_none() {
                unrecognized += 1;
            }
        })
        .map(|raw| raw.to_meta())
        .filter(|meta| {
            if !meta.visible {
                hidden += 1;
            }
            meta.visible
        })
        .collect();

    if unrecognized > 0 {
        tracing::warn!(
            count = unrecognized,
            "Column metadata entries matched no known schema"
        );
    }
    for header in duplicate_headers(&metas) {
        tracing::warn!(header = %header, "Duplicate column header in metadata");
    }
    tracing::debug!(
        total = entries.len(),
        visible = metas.len(),
        hidden,
        "Normalized column metadata"
    );
    metas
}

/// Returns headers that occur more than once, in first-occurrence order.
///
/// Duplicates are not rejected: each entry still becomes its own column.
pub fn duplicate_headers(metas: &[ColumnMeta]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for meta in metas {
        *counts.entry(meta.header.as_str()).or_default() += 1;
    }
    let mut duplicates: Vec<String> = Vec::new();
    for meta in metas {
        if counts.get(meta.header.as_str()).copied().unwrap_or(0) > 1
            && !duplicates.contains(&meta.header)
        {
            duplicates.push(meta.header.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_both_schemas_to_same_meta() {
        let underscored = json!({
            "col_header": "custFcst",
            "col_label": "Forecast_Customer Forecast",
            "col_type": "AGGREGATION",
            "level": 20,
            "editable": true
        });
        let compact = json!({
            "colheader": "custFcst",
            "collabel": "Forecast_Customer Forecast",
            "coltype": "AGGREGATION",
            "level": 20,
            "editable": true
        });
        let a = RawColumnMeta::decode(&underscored);
        let b = RawColumnMeta::decode(&compact);
        assert_eq!(a.schema, Some(MetaSchema::Underscored));
        assert_eq!(b.schema, Some(MetaSchema::Compact));
        assert_eq!(a.to_meta(), b.to_meta());
    }

    #[test]
    fn mixed_spellings_fall_back_to_other_variant() {
        let value = json!({ "colheader": "sku", "collabel": "SKU", "col_type": "PROMO" });
        let meta = RawColumnMeta::decode(&value).to_meta();
        assert_eq!(meta.header, "sku");
        assert_eq!(meta.category, ColumnCategory::Promo);
    }

    #[test]
    fn non_object_entry_degrades_to_defaults() {
        let meta = RawColumnMeta::decode(&json!(7)).to_meta();
        assert_eq!(meta, ColumnMeta::default());
    }

    #[test]
    fn non_string_category_is_unrecognized() {
        let meta = RawColumnMeta::decode(&json!({ "col_header": "x", "col_type": 3 })).to_meta();
        assert_eq!(meta.category, ColumnCategory::Other(String::new()));
    }

    #[test]
    fn duplicate_headers_in_first_occurrence_order() {
        let metas = vec![
            ColumnMeta::new("b", "", ColumnCategory::Promo),
            ColumnMeta::new("a", "", ColumnCategory::Promo),
            ColumnMeta::new("b", "", ColumnCategory::Promo),
            ColumnMeta::new("a", "", ColumnCategory::Promo),
            ColumnMeta::new("c", "", ColumnCategory::Promo),
        ];
        assert_eq!(duplicate_headers(&metas), vec!["b", "a"]);
    }
}
