//! Per-field value transforms.
//!
//! A transform is named by the schema and applied to a single raw string
//! field during normalization. Transforms are total: an unparseable
//! numeric value degrades to the original string, and an unknown rule
//! name means passthrough. Nothing in this module can fail.

use serde_json::{Number, Value};

/// The closed set of conversion rules a schema can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformRule {
    /// Upper-case the value.
    Uppercase,
    /// Lower-case the value.
    Lowercase,
    /// Parse as a base-10 integer.
    Int,
    /// Parse as a floating-point number.
    Float,
}

impl TransformRule {
    /// Resolve a rule name. Unknown names resolve to `None`, which the
    /// caller treats as passthrough rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    /// Apply this rule to a raw value.
    ///
    /// Numeric rules return the original string unchanged when parsing
    /// fails (including non-finite floats, which JSON cannot represent).
    pub fn apply(self, raw: &str) -> Value {
        match self {
            Self::Uppercase => Value::String(raw.to_uppercase()),
            Self::Lowercase => Value::String(raw.to_lowercase()),
            Self::Int => raw
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            Self::Float => raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
        }
    }
}

/// Apply the rule named by `rule` to `raw`.
///
/// `None` and unrecognized rule names return the original string.
pub fn apply_transform(raw: &str, rule: Option<&str>) -> Value {
    match rule.and_then(TransformRule::parse) {
        Some(rule) => rule.apply(raw),
        None => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uppercase() {
        assert_eq!(apply_transform("acme", Some("uppercase")), json!("ACME"));
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(apply_transform("ACME", Some("lowercase")), json!("acme"));
    }

    #[test]
    fn test_int() {
        assert_eq!(apply_transform("2024", Some("int")), json!(2024));
        assert_eq!(apply_transform("-5", Some("int")), json!(-5));
    }

    #[test]
    fn test_int_failure_returns_original_string() {
        assert_eq!(apply_transform("abc", Some("int")), json!("abc"));
        assert_eq!(apply_transform("2.5", Some("int")), json!("2.5"));
        assert_eq!(apply_transform("", Some("int")), json!(""));
    }

    #[test]
    fn test_float() {
        assert_eq!(apply_transform("2.5", Some("float")), json!(2.5));
        assert_eq!(apply_transform("9.0", Some("float")), json!(9.0));
    }

    #[test]
    fn test_float_failure_returns_original_string() {
        assert_eq!(apply_transform("n/a", Some("float")), json!("n/a"));
        assert_eq!(apply_transform("", Some("float")), json!(""));
    }

    #[test]
    fn test_non_finite_float_returns_original_string() {
        assert_eq!(apply_transform("inf", Some("float")), json!("inf"));
        assert_eq!(apply_transform("NaN", Some("float")), json!("NaN"));
    }

    #[test]
    fn test_unknown_rule_is_passthrough() {
        assert_eq!(apply_transform("value", Some("reverse")), json!("value"));
    }

    #[test]
    fn test_no_rule_is_passthrough() {
        assert_eq!(apply_transform("value", None), json!("value"));
    }

    #[test]
    fn test_numeric_rules_do_not_trim() {
        // Whitespace is the splitter's concern; a padded number fails the
        // parse and comes back as-is.
        assert_eq!(apply_transform(" 10", Some("int")), json!(" 10"));
    }
}
