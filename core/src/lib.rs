// src/lib.rs

//! FlexLease: the client-side domain core of the FlexLease rental marketplace.
//!
//! Everything a FlexLease client computes locally lives here:
//!  - Plan snapshot decoding and explicit-over-snapshot price resolution.
//!  - Per-item and per-order amount aggregation that never yields NaN.
//!  - Status, dispute and tone lookups for order presentation.
//!  - A mirror of the order transition table for gating user actions.
//!  - Splitting the first payment of an order between platform reserve and vendor.
//!  - Explicit per-session context (auth handler + scoped query cache).
//!
//! The backend stays authoritative for order state and server-computed totals;
//! nothing in this crate performs network I/O on its own.

pub mod config;
pub mod error;
pub mod idempotency;
pub mod lifecycle;
pub mod money;
pub mod payment;
pub mod pricing;
pub mod session;
pub mod status;

// --- Re-exports for the Public API ---

pub use crate::config::ClientConfig;
pub use crate::error::{FlexleaseError, FlexleaseResult};

// Pricing is what most callers need
pub use crate::pricing::{
  decode_plan_snapshot, parse_plan_snapshot, resolve_buyout, resolve_deposit, resolve_item_amounts,
  resolve_item_buyout, resolve_item_deposit, resolve_item_rent, resolve_order_amounts, resolve_order_buyout,
  resolve_order_deposit, resolve_order_rent, resolve_order_total, resolve_rent, serialize_plan_snapshot, Cart, CartItem,
  ItemAmounts, OrderAmountSource, OrderAmounts, OrderItem, PlanSnapshot, PriceCarrier, RentalOrder, SnapshotError,
};

pub use crate::status::{order_status_color, order_status_label, DisputeStatus, OrderStatus, Tone};

pub use crate::lifecycle::{available_actions, LifecycleError, OrderAction};

pub use crate::payment::{
  auto_complete_initial_payment, plan_initial_payment, AutoPaymentParams, AutoPaymentResult, PaymentGateway,
};

pub use crate::session::{AuthHandler, AuthRecovery, QueryCache, SessionContext};

pub use crate::idempotency::generate_idempotency_key;
pub use crate::money::format_currency;

/*
    Typical flow after an order is placed:
    1. Decode the order payload into a `RentalOrder` (numeric fields decode leniently).
    2. `resolve_order_amounts(&order)` gives deposit/rent/buyout/total for display.
    3. `AutoPaymentParams::for_order(&order)` feeds `auto_complete_initial_payment`
       together with a `PaymentGateway` implementation and the session's `ClientConfig`.
    4. `available_actions(&order.status)` decides which buttons to offer next.
*/
