// flexlease/src/money.rs

/// Rounds to cents, halves rounding up.
pub fn round_cents(value: f64) -> f64 {
  (value * 100.0 + 0.5).floor() / 100.0
}

/// Fixed-point rendering of an amount. Missing or non-finite values render as
/// zero so a price cell is never blank.
pub fn format_currency(value: Option<f64>, fraction_digits: usize) -> String {
  let amount = value.filter(|v| v.is_finite()).unwrap_or(0.0);
  format!("{:.*}", fraction_digits, amount)
}

/// Same as [`format_currency`] for amounts that arrive as text.
pub fn format_currency_str(value: Option<&str>, fraction_digits: usize) -> String {
  // Unlike snapshot fields, trailing garbage makes the whole text invalid.
  let amount = value.and_then(|text| {
    let trimmed = text.trim();
    if trimmed.is_empty() {
      Some(0.0)
    } else {
      trimmed.parse::<f64>().ok()
    }
  });
  format_currency(amount, fraction_digits)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_half_up_to_cents() {
    assert_eq!(round_cents(10.125), 10.13);
    assert_eq!(round_cents(10.004), 10.0);
    assert_eq!(round_cents(99.999), 100.0);
  }

  #[test]
  fn formats_missing_and_textual_amounts() {
    assert_eq!(format_currency(None, 2), "0.00");
    assert_eq!(format_currency(Some(f64::NAN), 1), "0.0");
    assert_eq!(format_currency(Some(1234.5), 2), "1234.50");
    assert_eq!(format_currency(Some(3.14159), 0), "3");
    assert_eq!(format_currency_str(Some("88.8"), 2), "88.80");
    assert_eq!(format_currency_str(Some("12abc"), 2), "0.00");
    assert_eq!(format_currency_str(None, 2), "0.00");
  }
}
