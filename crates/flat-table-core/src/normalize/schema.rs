//! Metadata schema variants and their field names.
//!
//! Two exports of the same metadata are in circulation. They differ only in
//! how the fields are spelled, so each variant is a row in a field-name
//! table and detection picks the row whose names the entry actually uses.

use serde_json::{Map, Value};

/// Field names of one schema variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNames {
    pub header: &'static str,
    pub label: &'static str,
    pub category: &'static str,
}

/// Fields spelled the same way in both variants.
pub const LEVEL_FIELD: &str = "level";
pub const EDITABLE_FIELD: &str = "editable";
pub const DISPLAY_FIELD: &str = "display";
pub const STATUS_FIELD: &str = "status";

/// A metadata schema variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaSchema {
    /// `col_header`, `col_label`, `col_type`.
    Underscored,
    /// `colheader`, `collabel`, `coltype`.
    Compact,
}

impl MetaSchema {
    /// All variants in detection priority order.
    pub const ALL: [MetaSchema; 2] = [MetaSchema::Underscored, MetaSchema::Compact];

    /// Returns the field names used by this variant.
    pub const fn fields(self) -> FieldNames {
        match self {
            Self::Underscored => FieldNames {
                header: "col_header",
                label: "col_label",
                category: "col_type",
            },
            Self::Compact => FieldNames {
                header: "colheader",
                label: "collabel",
                category: "coltype",
            },
        }
    }

    /// Detects the variant of one entry by field presence.
    ///
    /// The variant with the most of its field names present wins; ties go to
    /// the earlier variant in [`MetaSchema::ALL`]. Returns `None` when the
    /// entry uses none of the known names.
    pub fn detect(entry: &Map<String, Value>) -> Option<Self> {
        let mut best: Option<(Self, usize)> = None;
        for schema in Self::ALL {
            let hits = schema.matching_fields(entry);
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, best_hits)) if best_hits >= hits => {}
                _ => best = Some((schema, hits)),
            }
        }
        best.map(|(schema, _)| schema)
    }

    fn matching_fields(self, entry: &Map<String, Value>) -> usize {
        let fields = self.fields();
        [fields.header, fields.label, fields.category]
            .into_iter()
            .filter(|name| entry.contains_key(*name))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn detects_underscored() {
        let entry = object(json!({ "col_header": "sku", "col_label": "SKU" }));
        assert_eq!(MetaSchema::detect(&entry), Some(MetaSchema::Underscored));
    }

    #[test]
    fn detects_compact() {
        let entry = object(json!({ "colheader": "sku", "coltype": "HIERARCHICAL" }));
        assert_eq!(MetaSchema::detect(&entry), Some(MetaSchema::Compact));
    }

    #[test]
    fn majority_wins_on_mixed_entries() {
        let entry = object(json!({
            "col_header": "sku",
            "collabel": "SKU",
            "coltype": "HIERARCHICAL"
        }));
        assert_eq!(MetaSchema::detect(&entry), Some(MetaSchema::Compact));
    }

    #[test]
    fn tie_prefers_underscored() {
        let entry = object(json!({ "col_header": "sku", "collabel": "SKU" }));
        assert_eq!(MetaSchema::detect(&entry), Some(MetaSchema::Underscored));
    }

    #[test]
    fn unknown_fields_detect_nothing() {
        let entry = object(json!({ "name": "sku" }));
        assert_eq!(MetaSchema::detect(&entry), None);
    }
}
