//! Canonical column metadata.

use crate::category::ColumnCategory;

/// One column description after schema reconciliation.
///
/// Produced by the normalizer from either metadata schema variant. Every
/// field has a safe default so a malformed entry still yields a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    /// Key into row records. Empty when the entry had no usable header.
    pub header: String,
    /// Human-readable label, possibly encoding a group.
    pub label: String,
    /// Rendering category.
    pub category: ColumnCategory,
    /// Sort key (ascending). `f64::INFINITY` when missing or non-numeric.
    pub level: f64,
    /// Only honoured for aggregation columns.
    pub editable: bool,
    /// False when either `display` or `status` was explicitly `false`.
    pub visible: bool,
}

impl ColumnMeta {
    /// Creates a visible, read-only entry with an unset level.
    pub fn new(
        header: impl Into<String>,
        label: impl Into<String>,
        category: ColumnCategory,
    ) -> Self {
        Self {
            header: header.into(),
            label: label.into(),
            category,
            level: f64::INFINITY,
            editable: false,
            visible: true,
        }
    }

    /// Sets the sort level.
    #[must_use]
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = level;
        self
    }

    /// Sets the editable flag.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Returns true when the entry carried a numeric level.
    pub fn has_level(&self) -> bool {
        self.level.is_finite()
    }
}

impl Default for ColumnMeta {
    fn default() -> Self {
        Self::new("", "", ColumnCategory::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sorts_last_and_is_visible() {
        let meta = ColumnMeta::default();
        assert!(meta.level.is_infinite());
        assert!(!meta.has_level());
        assert!(meta.visible);
        assert!(!meta.editable);
    }

    #[test]
    fn builder_setters() {
        let meta = ColumnMeta::new("custFcst", "Customer Forecast", ColumnCategory::Aggregation)
            .with_level(20.0)
            .with_editable(true);
        assert_eq!(meta.level, 20.0);
        assert!(meta.editable);
        assert!(meta.has_level());
    }
}
