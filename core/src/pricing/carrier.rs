// flexlease/src/pricing/carrier.rs

//! Price carriers (cart items and order items) and per-item amount resolution.

use serde::{Deserialize, Serialize};

use super::number::{lenient, safe_number};
use super::snapshot::{parse_plan_snapshot, resolve_buyout, resolve_deposit, resolve_rent, PlanSnapshot};

/// Anything that carries unit prices and, optionally, the plan snapshot they
/// were derived from.
pub trait PriceCarrier {
  fn unit_deposit_amount(&self) -> Option<f64>;
  fn unit_rent_amount(&self) -> Option<f64>;
  fn buyout_price(&self) -> Option<f64>;
  /// Raw serialized snapshot, exactly as received.
  fn plan_snapshot(&self) -> Option<&str>;
  fn quantity(&self) -> Option<f64>;

  fn snapshot(&self) -> Option<PlanSnapshot> {
    parse_plan_snapshot(self.plan_snapshot())
  }
}

impl<T: PriceCarrier + ?Sized> PriceCarrier for &T {
  fn unit_deposit_amount(&self) -> Option<f64> {
    (**self).unit_deposit_amount()
  }
  fn unit_rent_amount(&self) -> Option<f64> {
    (**self).unit_rent_amount()
  }
  fn buyout_price(&self) -> Option<f64> {
    (**self).buyout_price()
  }
  fn plan_snapshot(&self) -> Option<&str> {
    (**self).plan_snapshot()
  }
  fn quantity(&self) -> Option<f64> {
    (**self).quantity()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartItem {
  pub id: String,
  pub user_id: String,
  pub vendor_id: String,
  pub product_id: String,
  pub sku_id: String,
  pub plan_id: Option<String>,
  pub product_name: String,
  pub sku_code: Option<String>,
  pub plan_snapshot: Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub quantity: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub unit_rent_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub unit_deposit_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub buyout_price: Option<f64>,
  pub created_at: Option<String>,
  pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
  pub id: Option<String>,
  pub product_id: String,
  pub sku_id: Option<String>,
  pub plan_id: Option<String>,
  pub product_name: String,
  pub sku_code: Option<String>,
  pub plan_snapshot: Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub quantity: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub unit_rent_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub unit_deposit_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub buyout_price: Option<f64>,
}

macro_rules! impl_price_carrier {
  ($ty:ty) => {
    impl PriceCarrier for $ty {
      fn unit_deposit_amount(&self) -> Option<f64> {
        self.unit_deposit_amount
      }
      fn unit_rent_amount(&self) -> Option<f64> {
        self.unit_rent_amount
      }
      fn buyout_price(&self) -> Option<f64> {
        self.buyout_price
      }
      fn plan_snapshot(&self) -> Option<&str> {
        self.plan_snapshot.as_deref()
      }
      fn quantity(&self) -> Option<f64> {
        self.quantity
      }
    }
  };
}

impl_price_carrier!(CartItem);
impl_price_carrier!(OrderItem);

/// The three unit amounts of one item, already coerced to finite numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemAmounts {
  pub deposit: f64,
  pub rent: f64,
  pub buyout: f64,
}

/// Resolves all three unit amounts with a single snapshot parse.
pub fn resolve_item_amounts<C: PriceCarrier + ?Sized>(item: &C) -> ItemAmounts {
  let snapshot = item.snapshot();
  let snapshot = snapshot.as_ref();
  ItemAmounts {
    deposit: safe_number(resolve_deposit(item.unit_deposit_amount(), snapshot)),
    rent: safe_number(resolve_rent(item.unit_rent_amount(), snapshot)),
    buyout: safe_number(resolve_buyout(item.buyout_price(), snapshot)),
  }
}

pub fn resolve_item_deposit<C: PriceCarrier + ?Sized>(item: &C) -> f64 {
  let snapshot = item.snapshot();
  safe_number(resolve_deposit(item.unit_deposit_amount(), snapshot.as_ref()))
}

pub fn resolve_item_rent<C: PriceCarrier + ?Sized>(item: &C) -> f64 {
  let snapshot = item.snapshot();
  safe_number(resolve_rent(item.unit_rent_amount(), snapshot.as_ref()))
}

pub fn resolve_item_buyout<C: PriceCarrier + ?Sized>(item: &C) -> f64 {
  let snapshot = item.snapshot();
  safe_number(resolve_buyout(item.buyout_price(), snapshot.as_ref()))
}

/// Scales a unit amount by quantity. A missing, zero or NaN quantity leaves
/// the amount unscaled.
pub fn scale_by_quantity(value: f64, quantity: Option<f64>) -> f64 {
  match quantity {
    Some(q) if q != 0.0 && !q.is_nan() => value * q,
    _ => value,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quantity_scaling_falls_back_to_one_unit() {
    assert_eq!(scale_by_quantity(40.0, Some(3.0)), 120.0);
    assert_eq!(scale_by_quantity(40.0, None), 40.0);
    assert_eq!(scale_by_quantity(40.0, Some(0.0)), 40.0);
    assert_eq!(scale_by_quantity(40.0, Some(f64::NAN)), 40.0);
  }

  #[test]
  fn cart_item_decodes_loose_payloads() {
    let item: CartItem = serde_json::from_str(
      r#"{"id":"c1","productName":"Camera","quantity":"2","unitRentAmount":"99.5","unitDepositAmount":null,"buyoutPrice":true}"#,
    )
    .unwrap();
    assert_eq!(item.quantity, Some(2.0));
    assert_eq!(item.unit_rent_amount, Some(99.5));
    assert_eq!(item.unit_deposit_amount, None);
    assert_eq!(item.buyout_price, None);
    assert_eq!(item.sku_id, "");
  }
}
