// flexlease/src/pricing/number.rs

//! Lenient numeric decoding shared by snapshots and price carriers.
//!
//! Backend payloads are not always consistent about numbers: amounts show up as
//! JSON numbers, as decimal strings, or not at all. Everything here collapses
//! those shapes into `Option<f64>` where `None` means "no usable number".
//!
//! A numeric string is therefore as good as a number everywhere: an order-level
//! `"rentAmount": "150"` is taken as the server aggregate, and an explicit unit
//! price that is not numeric at all counts as absent, so the plan snapshot
//! supplies it instead of it being read as zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps finite JSON numbers and strings that parse to a finite decimal.
/// Booleans, objects, arrays, `null` and non-finite values become `None`.
pub fn normalize_number(value: &Value) -> Option<f64> {
  match value {
    Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
    Value::String(s) => parse_decimal_prefix(s).filter(|v| v.is_finite()),
    _ => None,
  }
}

/// Drops NaN and infinities from an already-typed number.
pub fn finite(value: Option<f64>) -> Option<f64> {
  value.filter(|v| v.is_finite())
}

/// `None` and non-finite values become `0.0`.
pub fn safe_number(value: Option<f64>) -> f64 {
  finite(value).unwrap_or(0.0)
}

/// Parses the longest leading decimal literal of `input`, ignoring leading
/// whitespace and any trailing garbage (`"12.5kg"` is `12.5`).
pub(crate) fn parse_decimal_prefix(input: &str) -> Option<f64> {
  let s = input.trim_start();
  let bytes = s.as_bytes();
  let mut idx = 0;

  let negative = match bytes.first() {
    Some(b'-') => {
      idx = 1;
      true
    }
    Some(b'+') => {
      idx = 1;
      false
    }
    _ => false,
  };

  let int_start = idx;
  while idx < bytes.len() && bytes[idx].is_ascii_digit() {
    idx += 1;
  }
  let int_digits = &s[int_start..idx];

  let mut frac_digits = "";
  if idx < bytes.len() && bytes[idx] == b'.' {
    let frac_start = idx + 1;
    let mut end = frac_start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
      end += 1;
    }
    frac_digits = &s[frac_start..end];
    idx = end;
  }

  if int_digits.is_empty() && frac_digits.is_empty() {
    return None;
  }

  // An exponent only counts when at least one digit follows it.
  let mut exponent = String::new();
  if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
    let mut end = idx + 1;
    let mut sign = "";
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
      sign = &s[end..end + 1];
      end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
      end += 1;
    }
    if end > digits_start {
      exponent = format!("e{}{}", sign, &s[digits_start..end]);
    }
  }

  let literal = format!(
    "{}{}.{}{}",
    if negative { "-" } else { "" },
    if int_digits.is_empty() { "0" } else { int_digits },
    if frac_digits.is_empty() { "0" } else { frac_digits },
    exponent
  );
  literal.parse::<f64>().ok()
}

/// `deserialize_with` adapter: accepts any JSON value and keeps it only if
/// [`normalize_number`] does. Never fails on a well-formed value.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(value.as_ref().and_then(normalize_number))
}

/// Text fields pass through; numeric identifiers keep their textual form.
pub(crate) fn text_value(value: Option<&Value>) -> Option<String> {
  match value? {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn decimal_prefix_matches_lenient_float_parsing() {
    assert_eq!(parse_decimal_prefix("12.5"), Some(12.5));
    assert_eq!(parse_decimal_prefix("  42"), Some(42.0));
    assert_eq!(parse_decimal_prefix("12.5kg"), Some(12.5));
    assert_eq!(parse_decimal_prefix("-.5"), Some(-0.5));
    assert_eq!(parse_decimal_prefix("3."), Some(3.0));
    assert_eq!(parse_decimal_prefix("1e3"), Some(1000.0));
    assert_eq!(parse_decimal_prefix("2e"), Some(2.0));
    assert_eq!(parse_decimal_prefix("abc"), None);
    assert_eq!(parse_decimal_prefix("."), None);
    assert_eq!(parse_decimal_prefix(""), None);
  }

  #[test]
  fn normalize_rejects_non_numeric_shapes() {
    assert_eq!(normalize_number(&json!(199.9)), Some(199.9));
    assert_eq!(normalize_number(&json!("88")), Some(88.0));
    assert_eq!(normalize_number(&json!("Infinity")), None);
    assert_eq!(normalize_number(&json!("1e999")), None);
    assert_eq!(normalize_number(&json!(true)), None);
    assert_eq!(normalize_number(&json!({"amount": 1})), None);
    assert_eq!(normalize_number(&json!([1])), None);
    assert_eq!(normalize_number(&Value::Null), None);
  }

  #[test]
  fn safe_number_never_yields_nan() {
    assert_eq!(safe_number(None), 0.0);
    assert_eq!(safe_number(Some(f64::NAN)), 0.0);
    assert_eq!(safe_number(Some(f64::INFINITY)), 0.0);
    assert_eq!(safe_number(Some(7.25)), 7.25);
  }
}
