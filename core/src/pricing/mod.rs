// flexlease/src/pricing/mod.rs

pub mod aggregate;
pub mod carrier;
pub mod number;
pub mod snapshot;

pub use aggregate::{
  resolve_order_amounts, resolve_order_buyout, resolve_order_deposit, resolve_order_rent, resolve_order_total, Cart,
  OrderAmountSource, OrderAmounts, RentalOrder,
};
pub use carrier::{
  resolve_item_amounts, resolve_item_buyout, resolve_item_deposit, resolve_item_rent, CartItem, ItemAmounts,
  OrderItem, PriceCarrier,
};
pub use snapshot::{
  decode_plan_snapshot, parse_plan_snapshot, resolve_buyout, resolve_deposit, resolve_rent, serialize_plan_snapshot,
  PlanSnapshot, SnapshotError,
};
