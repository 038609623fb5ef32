//! Column categories.
//!
//! The category of a metadata entry drives its label grouping, value type,
//! formatting, editability and whether the column is pinned to the left of
//! the grid.

use std::fmt;

/// Classification of a column as declared in its metadata (`col_type`).
///
/// Parsing never fails: anything that is not one of the known categories is
/// kept verbatim in [`ColumnCategory::Other`] and rendered as a plain string
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnCategory {
    /// Row dimension (plant, warehouse, SKU). Frozen string column.
    Hierarchical,
    /// Promotion measure. Read-only numeric column grouped by prefix.
    Promo,
    /// Aggregated measure (forecasts). Numeric, optionally editable,
    /// grouped by suffix.
    Aggregation,
    /// Unrecognized category, kept as written.
    Other(String),
}

impl ColumnCategory {
    /// Parses a raw category string.
    ///
    /// Matching ignores case and surrounding whitespace. The legacy spelling
    /// `HIERARCHIAL` is accepted as [`ColumnCategory::Hierarchical`].
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "HIERARCHICAL" | "HIERARCHIAL" => Self::Hierarchical,
            "PROMO" => Self::Promo,
            "AGGREGATION" => Self::Aggregation,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hierarchical => "HIERARCHICAL",
            Self::Promo => "PROMO",
            Self::Aggregation => "AGGREGATION",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true for the three categories with a rendering policy.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for ColumnCategory {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for ColumnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ColumnCategory {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!(
            ColumnCategory::parse("HIERARCHICAL"),
            ColumnCategory::Hierarchical
        );
        assert_eq!(ColumnCategory::parse(" promo "), ColumnCategory::Promo);
        assert_eq!(
            ColumnCategory::parse("Aggregation"),
            ColumnCategory::Aggregation
        );
    }

    #[test]
    fn accepts_legacy_spelling() {
        assert_eq!(
            ColumnCategory::parse("HIERARCHIAL"),
            ColumnCategory::Hierarchical
        );
    }

    #[test]
    fn keeps_unknown_category() {
        let category = ColumnCategory::parse("KPI");
        assert_eq!(category, ColumnCategory::Other("KPI".to_string()));
        assert!(!category.is_known());
        assert_eq!(category.to_string(), "KPI");
    }
}
