//! Best-effort coercion of loosely typed metadata values.

use serde_json::Value;

/// Text content of a value. Strings are taken as-is, numbers as their decimal
/// text; anything else (or a missing value) is empty.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Sort level. Only JSON numbers count; everything else sorts last.
pub fn level(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|level| level.is_finite())
        .unwrap_or(f64::INFINITY)
}

/// Opt-in flag: only an explicit `true` enables it.
pub fn flag_on(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

/// Opt-out flag: only an explicit `false` disables it.
pub fn flag_not_off(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Bool(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_from_scalars() {
        assert_eq!(text(Some(&json!("sku"))), "sku");
        assert_eq!(text(Some(&json!(42))), "42");
        assert_eq!(text(Some(&json!(null))), "");
        assert_eq!(text(Some(&json!(["a"]))), "");
        assert_eq!(text(None), "");
    }

    #[test]
    fn level_requires_number() {
        assert_eq!(level(Some(&json!(3))), 3.0);
        assert_eq!(level(Some(&json!(-1.5))), -1.5);
        assert!(level(Some(&json!("3"))).is_infinite());
        assert!(level(Some(&json!(null))).is_infinite());
        assert!(level(None).is_infinite());
    }

    #[test]
    fn flags() {
        assert!(flag_on(Some(&json!(true))));
        assert!(!flag_on(Some(&json!("true"))));
        assert!(!flag_on(Some(&json!(1))));
        assert!(!flag_on(None));

        assert!(flag_not_off(None));
        assert!(flag_not_off(Some(&json!(null))));
        assert!(flag_not_off(Some(&json!("false"))));
        assert!(!flag_not_off(Some(&json!(false))));
    }
}
