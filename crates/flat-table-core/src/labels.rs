//! Label parsing: deriving the group label and display name of a column.

use flat_table_model::{ColumnCategory, LabelMode, LabelRules};

/// Characters accepted between a group affix and the rest of a label.
const SEPARATORS: &[char] = &[' ', '\t', '_', '-', ':', '|', '/'];

/// Group label and display name of one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelParts {
    pub group: String,
    pub name: String,
}

impl LabelParts {
    fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

/// Splits a label according to the column category and the configured rules.
pub fn split_label(rules: &LabelRules, category: &ColumnCategory, label: &str) -> LabelParts {
    match rules.mode {
        LabelMode::Affix => split_affix(rules, category, label),
        LabelMode::Delimited => split_delimited(label),
    }
}

fn split_affix(rules: &LabelRules, category: &ColumnCategory, label: &str) -> LabelParts {
    match category {
        ColumnCategory::Hierarchical => LabelParts::new("", label),
        ColumnCategory::Promo => rules
            .promo_prefixes
            .iter()
            .find_map(|prefix| strip_group_prefix(label, prefix))
            .unwrap_or_else(|| LabelParts::new(&rules.promo_fallback_group, label)),
        ColumnCategory::Aggregation => rules
            .aggregation_suffixes
            .iter()
            .find_map(|suffix| strip_group_suffix(label, suffix))
            .unwrap_or_else(|| LabelParts::new(&rules.aggregation_fallback_group, label)),
        ColumnCategory::Other(_) => LabelParts::new("", label),
    }
}

/// Legacy split at the first `_`. Labels without one have no group.
fn split_delimited(label: &str) -> LabelParts {
    match label.split_once('_') {
        Some((group, name)) => LabelParts::new(group, name),
        None => LabelParts::new("", label),
    }
}

/// Matches `prefix` at the start of `label`, followed by a separator or the
/// end of the label.
fn strip_group_prefix(label: &str, prefix: &str) -> Option<LabelParts> {
    let prefix = prefix.trim();
    let trimmed = label.trim_start();
    if prefix.is_empty() || trimmed.len() < prefix.len() {
        return None;
    }
    let (head, rest) = trimmed.split_at_checked(prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    if !rest.is_empty() && !rest.starts_with(SEPARATORS) {
        return None;
    }
    Some(LabelParts::new(prefix, remainder_or_label(rest, label)))
}

/// Matches `suffix` at the end of `label`, preceded by a separator or the
/// start of the label.
fn strip_group_suffix(label: &str, suffix: &str) -> Option<LabelParts> {
    let suffix = suffix.trim();
    let trimmed = label.trim_end();
    if suffix.is_empty() || trimmed.len() < suffix.len() {
        return None;
    }
    let (rest, tail) = trimmed.split_at_checked(trimmed.len() - suffix.len())?;
    if !tail.eq_ignore_ascii_case(suffix) {
        return None;
    }
    if !rest.is_empty() && !rest.ends_with(SEPARATORS) {
        return None;
    }
    Some(LabelParts::new(suffix, remainder_or_label(rest, label)))
}

/// The remainder with separators trimmed, or the whole label when nothing
/// is left.
fn remainder_or_label(rest: &str, label: &str) -> String {
    let name = rest.trim_matches(SEPARATORS);
    if name.is_empty() {
        label.to_string()
    } else {
        name.to_string()
    }
}
