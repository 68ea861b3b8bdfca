// flexlease/src/pricing/snapshot.rs

//! Plan snapshots: the pricing terms of a rental plan frozen at the moment an
//! order item (or cart item) was created. Historical orders keep their prices
//! even after a vendor edits the live plan.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{event, Level};

use super::number::{finite, normalize_number, text_value};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
  pub plan_id: Option<String>,
  pub plan_type: Option<String>,
  pub term_months: Option<f64>,
  pub deposit_amount: Option<f64>,
  pub rent_amount_monthly: Option<f64>,
  pub buyout_price: Option<f64>,
}

/// Why a raw snapshot payload could not be decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
  #[error("Plan snapshot payload is empty")]
  Empty,

  #[error("Plan snapshot is not valid JSON: {0}")]
  Malformed(#[from] serde_json::Error),

  #[error("Plan snapshot must be a JSON object, found {found}")]
  NotAnObject { found: &'static str },
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Validating decoder. Every numeric field is normalized on its own, so one
/// bad field never invalidates the rest of the snapshot.
pub fn decode_plan_snapshot(raw: &str) -> Result<PlanSnapshot, SnapshotError> {
  if raw.is_empty() {
    return Err(SnapshotError::Empty);
  }
  let value: Value = serde_json::from_str(raw)?;
  let fields = match value {
    Value::Object(fields) => fields,
    other => {
      return Err(SnapshotError::NotAnObject {
        found: json_kind(&other),
      })
    }
  };
  let number = |key: &str| fields.get(key).and_then(normalize_number);

  Ok(PlanSnapshot {
    plan_id: text_value(fields.get("planId")),
    plan_type: text_value(fields.get("planType")),
    term_months: number("termMonths"),
    deposit_amount: number("depositAmount"),
    rent_amount_monthly: number("rentAmountMonthly"),
    buyout_price: number("buyoutPrice"),
  })
}

/// Lenient wrapper over [`decode_plan_snapshot`]: any failure is logged and
/// becomes `None`.
pub fn parse_plan_snapshot(raw: Option<&str>) -> Option<PlanSnapshot> {
  let raw = raw?;
  match decode_plan_snapshot(raw) {
    Ok(snapshot) => Some(snapshot),
    Err(SnapshotError::Empty) => None,
    Err(err) => {
      event!(Level::WARN, error = %err, "Failed to parse planSnapshot payload");
      None
    }
  }
}

/// Emits all six fields in declaration order (`planId`, `planType`,
/// `termMonths`, ...), `null` where absent or non-finite.
pub fn serialize_plan_snapshot(input: &PlanSnapshot) -> String {
  let normalized = PlanSnapshot {
    plan_id: input.plan_id.clone(),
    plan_type: input.plan_type.clone(),
    term_months: finite(input.term_months),
    deposit_amount: finite(input.deposit_amount),
    rent_amount_monthly: finite(input.rent_amount_monthly),
    buyout_price: finite(input.buyout_price),
  };
  match serde_json::to_string(&normalized) {
    Ok(text) => text,
    Err(err) => {
      event!(Level::ERROR, error = %err, "Failed to serialize planSnapshot");
      "{}".to_string()
    }
  }
}

// Explicit values always win, including an explicit zero.

pub fn resolve_deposit(explicit_value: Option<f64>, snapshot: Option<&PlanSnapshot>) -> Option<f64> {
  explicit_value.or_else(|| snapshot.and_then(|s| s.deposit_amount))
}

pub fn resolve_rent(explicit_value: Option<f64>, snapshot: Option<&PlanSnapshot>) -> Option<f64> {
  explicit_value.or_else(|| snapshot.and_then(|s| s.rent_amount_monthly))
}

pub fn resolve_buyout(explicit_value: Option<f64>, snapshot: Option<&PlanSnapshot>) -> Option<f64> {
  explicit_value.or_else(|| snapshot.and_then(|s| s.buyout_price))
}
