// flexlease/src/pricing/aggregate.rs

//! Order-level amounts.
//!
//! Server-computed aggregates are authoritative and are returned as-is. Only
//! when the server has not supplied a figure is it derived from the items.
//! A client-computed total is always `deposit + rent + buyout`.

use serde::{Deserialize, Serialize};

use super::carrier::{resolve_item_amounts, scale_by_quantity, CartItem, ItemAmounts, OrderItem, PriceCarrier};
use super::number::{lenient, safe_number};
use crate::status::OrderStatus;

/// An order-shaped value: optional server aggregates plus priced items.
pub trait OrderAmountSource {
  type Item: PriceCarrier;

  fn items(&self) -> &[Self::Item];

  fn deposit_amount(&self) -> Option<f64> {
    None
  }
  fn rent_amount(&self) -> Option<f64> {
    None
  }
  fn buyout_amount(&self) -> Option<f64> {
    None
  }
  fn total_amount(&self) -> Option<f64> {
    None
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalOrder {
  pub id: String,
  pub order_no: String,
  pub status: OrderStatus,
  pub user_id: String,
  pub vendor_id: String,
  #[serde(deserialize_with = "lenient")]
  pub deposit_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub rent_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub buyout_amount: Option<f64>,
  #[serde(deserialize_with = "lenient")]
  pub total_amount: Option<f64>,
  pub items: Vec<OrderItem>,
  pub created_at: Option<String>,
}

impl OrderAmountSource for RentalOrder {
  type Item = OrderItem;

  fn items(&self) -> &[OrderItem] {
    &self.items
  }
  fn deposit_amount(&self) -> Option<f64> {
    self.deposit_amount
  }
  fn rent_amount(&self) -> Option<f64> {
    self.rent_amount
  }
  fn buyout_amount(&self) -> Option<f64> {
    self.buyout_amount
  }
  fn total_amount(&self) -> Option<f64> {
    self.total_amount
  }
}

/// A shopping cart never has server aggregates; its summary is always derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
  pub items: Vec<CartItem>,
}

impl OrderAmountSource for Cart {
  type Item = CartItem;

  fn items(&self) -> &[CartItem] {
    &self.items
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderAmounts {
  pub deposit: f64,
  pub rent: f64,
  pub buyout: f64,
  pub total: f64,
}

fn sum_items<O, F>(order: &O, pick: F) -> f64
where
  O: OrderAmountSource + ?Sized,
  F: Fn(&ItemAmounts) -> f64,
{
  order
    .items()
    .iter()
    .map(|item| scale_by_quantity(pick(&resolve_item_amounts(item)), item.quantity()))
    .sum()
}

pub fn resolve_order_deposit<O: OrderAmountSource + ?Sized>(order: &O) -> f64 {
  match order.deposit_amount() {
    Some(amount) => safe_number(Some(amount)),
    None => sum_items(order, |a| a.deposit),
  }
}

pub fn resolve_order_rent<O: OrderAmountSource + ?Sized>(order: &O) -> f64 {
  match order.rent_amount() {
    Some(amount) => safe_number(Some(amount)),
    None => sum_items(order, |a| a.rent),
  }
}

pub fn resolve_order_buyout<O: OrderAmountSource + ?Sized>(order: &O) -> f64 {
  match order.buyout_amount() {
    Some(amount) => safe_number(Some(amount)),
    None => sum_items(order, |a| a.buyout),
  }
}

pub fn resolve_order_total<O: OrderAmountSource + ?Sized>(order: &O) -> f64 {
  match order.total_amount() {
    Some(amount) => safe_number(Some(amount)),
    None => resolve_order_deposit(order) + resolve_order_rent(order) + resolve_order_buyout(order),
  }
}

/// All four figures at once, parsing each item's snapshot a single time.
pub fn resolve_order_amounts<O: OrderAmountSource + ?Sized>(order: &O) -> OrderAmounts {
  let mut derived = ItemAmounts::default();
  for item in order.items() {
    let unit = resolve_item_amounts(item);
    let quantity = item.quantity();
    derived.deposit += scale_by_quantity(unit.deposit, quantity);
    derived.rent += scale_by_quantity(unit.rent, quantity);
    derived.buyout += scale_by_quantity(unit.buyout, quantity);
  }

  let pick = |server: Option<f64>, fallback: f64| match server {
    Some(amount) => safe_number(Some(amount)),
    None => fallback,
  };
  let deposit = pick(order.deposit_amount(), derived.deposit);
  let rent = pick(order.rent_amount(), derived.rent);
  let buyout = pick(order.buyout_amount(), derived.buyout);
  let total = pick(order.total_amount(), deposit + rent + buyout);

  OrderAmounts {
    deposit,
    rent,
    buyout,
    total,
  }
}
