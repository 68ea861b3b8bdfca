// flexlease/src/payment/planner.rs

//! Splits the first payment of a freshly placed order between the platform's
//! deposit reserve and the vendor.

use tracing::{event, Level};

use super::types::{
  vendor_beneficiary, PaymentScene, PaymentSplit, BENEFICIARY_PLATFORM_RESERVE, SPLIT_DEPOSIT_RESERVE,
  SPLIT_VENDOR_INCOME,
};
use crate::money::round_cents;
use crate::pricing::{resolve_order_amounts, RentalOrder};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoPaymentParams {
  pub order_id: String,
  pub vendor_id: String,
  pub user_id: String,
  /// Overrides the sum of the three portions when present.
  pub amount: Option<f64>,
  pub deposit_amount: Option<f64>,
  pub rent_amount: Option<f64>,
  pub buyout_amount: Option<f64>,
  pub description: Option<String>,
}

impl AutoPaymentParams {
  /// Fills the portions from the order's resolved amounts.
  pub fn for_order(order: &RentalOrder) -> Self {
    let amounts = resolve_order_amounts(order);
    Self {
      order_id: order.id.clone(),
      vendor_id: order.vendor_id.clone(),
      user_id: order.user_id.clone(),
      amount: Some(amounts.total),
      deposit_amount: Some(amounts.deposit),
      rent_amount: Some(amounts.rent),
      buyout_amount: Some(amounts.buyout),
      description: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitialPaymentPlan {
  pub scene: PaymentScene,
  pub amount: f64,
  pub splits: Vec<PaymentSplit>,
}

/// Missing and non-finite amounts count as zero; the rest are rounded to cents
/// and clamped at zero.
fn normalize(value: Option<f64>) -> f64 {
  match value {
    Some(v) if v.is_finite() => round_cents(v).max(0.0),
    _ => 0.0,
  }
}

/// Returns `None` when there is nothing to charge.
pub fn plan_initial_payment(params: &AutoPaymentParams) -> Option<InitialPaymentPlan> {
  let deposit = normalize(params.deposit_amount);
  let rent = normalize(params.rent_amount);
  let buyout = normalize(params.buyout_amount);
  let total = normalize(Some(params.amount.unwrap_or(deposit + rent + buyout)));

  if total <= 0.0 {
    event!(Level::DEBUG, order_id = %params.order_id, "Nothing to charge; skipping initial payment.");
    return None;
  }

  let mut splits = Vec::with_capacity(2);
  let mut reserved = 0.0;
  if deposit > 0.0 {
    reserved = deposit.min(total);
    splits.push(PaymentSplit {
      split_type: SPLIT_DEPOSIT_RESERVE.to_string(),
      amount: reserved,
      beneficiary: BENEFICIARY_PLATFORM_RESERVE.to_string(),
    });
  }

  let max_vendor_portion = (total - reserved).max(0.0);
  let vendor_income = round_cents((rent + buyout).min(max_vendor_portion));
  if vendor_income > 0.0 {
    splits.push(PaymentSplit {
      split_type: SPLIT_VENDOR_INCOME.to_string(),
      amount: vendor_income,
      beneficiary: vendor_beneficiary(&params.vendor_id),
    });
  }

  let scene = if buyout > 0.0 {
    PaymentScene::Buyout
  } else if rent > 0.0 {
    PaymentScene::Rent
  } else {
    PaymentScene::Deposit
  };

  event!(
    Level::DEBUG,
    order_id = %params.order_id,
    total,
    ?scene,
    split_count = splits.len(),
    "Planned initial payment."
  );

  Some(InitialPaymentPlan {
    scene,
    amount: total,
    splits,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(deposit: Option<f64>, rent: Option<f64>, buyout: Option<f64>) -> AutoPaymentParams {
    AutoPaymentParams {
      order_id: "o-1".to_string(),
      vendor_id: "v-9".to_string(),
      user_id: "u-1".to_string(),
      deposit_amount: deposit,
      rent_amount: rent,
      buyout_amount: buyout,
      ..Default::default()
    }
  }

  #[test]
  fn negative_and_nan_portions_are_ignored() {
    let plan = plan_initial_payment(&params(Some(-20.0), Some(f64::NAN), Some(30.0))).unwrap();
    assert_eq!(plan.amount, 30.0);
    assert_eq!(plan.scene, PaymentScene::Buyout);
    assert_eq!(plan.splits.len(), 1);
    assert_eq!(plan.splits[0].beneficiary, "VENDOR_v-9");
  }

  #[test]
  fn explicit_amount_caps_the_vendor_portion() {
    let mut p = params(Some(100.0), Some(80.0), None);
    p.amount = Some(120.0);
    let plan = plan_initial_payment(&p).unwrap();
    assert_eq!(plan.splits[0].amount, 100.0);
    assert_eq!(plan.splits[1].amount, 20.0);
  }
}
