// flexlease/src/status/order.rs

use serde::{Deserialize, Serialize};

use super::Tone;

/// Order states owned by the backend lifecycle authority.
///
/// Codes this client does not know about are kept verbatim in
/// [`OrderStatus::Unknown`] so they survive a decode/encode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
  PendingPayment,
  Cancelled,
  AwaitingShipment,
  AwaitingReceipt,
  InLease,
  ReturnRequested,
  ReturnInProgress,
  Completed,
  BuyoutRequested,
  BuyoutCompleted,
  ExceptionClosed,
  Unknown(String),
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 11] = [
    OrderStatus::PendingPayment,
    OrderStatus::Cancelled,
    OrderStatus::AwaitingShipment,
    OrderStatus::AwaitingReceipt,
    OrderStatus::InLease,
    OrderStatus::ReturnRequested,
    OrderStatus::ReturnInProgress,
    OrderStatus::Completed,
    OrderStatus::BuyoutRequested,
    OrderStatus::BuyoutCompleted,
    OrderStatus::ExceptionClosed,
  ];

  pub fn code(&self) -> &str {
    match self {
      OrderStatus::PendingPayment => "PENDING_PAYMENT",
      OrderStatus::Cancelled => "CANCELLED",
      OrderStatus::AwaitingShipment => "AWAITING_SHIPMENT",
      OrderStatus::AwaitingReceipt => "AWAITING_RECEIPT",
      OrderStatus::InLease => "IN_LEASE",
      OrderStatus::ReturnRequested => "RETURN_REQUESTED",
      OrderStatus::ReturnInProgress => "RETURN_IN_PROGRESS",
      OrderStatus::Completed => "COMPLETED",
      OrderStatus::BuyoutRequested => "BUYOUT_REQUESTED",
      OrderStatus::BuyoutCompleted => "BUYOUT_COMPLETED",
      OrderStatus::ExceptionClosed => "EXCEPTION_CLOSED",
      OrderStatus::Unknown(code) => code,
    }
  }

  pub fn label(&self) -> &str {
    match self {
      OrderStatus::PendingPayment => "Pending payment",
      OrderStatus::AwaitingShipment => "Awaiting shipment",
      OrderStatus::AwaitingReceipt => "Awaiting receipt",
      OrderStatus::InLease => "In lease",
      OrderStatus::ReturnRequested => "Return pending approval",
      OrderStatus::ReturnInProgress => "Return in progress",
      OrderStatus::BuyoutRequested => "Buyout pending approval",
      OrderStatus::BuyoutCompleted => "Buyout completed",
      OrderStatus::Completed => "Completed",
      OrderStatus::Cancelled => "Cancelled",
      OrderStatus::ExceptionClosed => "Closed by exception",
      OrderStatus::Unknown(code) => code,
    }
  }

  pub fn tone(&self) -> Tone {
    match self {
      OrderStatus::PendingPayment => Tone::Warning,
      OrderStatus::AwaitingShipment | OrderStatus::AwaitingReceipt => Tone::Processing,
      OrderStatus::InLease => Tone::Success,
      OrderStatus::ReturnRequested | OrderStatus::ReturnInProgress | OrderStatus::BuyoutRequested => Tone::Purple,
      OrderStatus::Completed | OrderStatus::BuyoutCompleted => Tone::Green,
      OrderStatus::Cancelled | OrderStatus::ExceptionClosed | OrderStatus::Unknown(_) => Tone::Default,
    }
  }

  /// No further transition is possible from a terminal state.
  pub fn is_terminal(&self) -> bool {
    matches!(
      self,
      OrderStatus::Cancelled | OrderStatus::Completed | OrderStatus::BuyoutCompleted | OrderStatus::ExceptionClosed
    )
  }
}

impl Default for OrderStatus {
  fn default() -> Self {
    OrderStatus::Unknown(String::new())
  }
}

impl From<&str> for OrderStatus {
  fn from(code: &str) -> Self {
    OrderStatus::ALL
      .iter()
      .find(|status| status.code() == code)
      .cloned()
      .unwrap_or_else(|| OrderStatus::Unknown(code.to_string()))
  }
}

impl From<String> for OrderStatus {
  fn from(code: String) -> Self {
    OrderStatus::from(code.as_str())
  }
}

impl From<OrderStatus> for String {
  fn from(status: OrderStatus) -> Self {
    match status {
      OrderStatus::Unknown(code) => code,
      known => known.code().to_string(),
    }
  }
}

impl std::fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.code())
  }
}

/// Display label for a raw status code.
pub fn order_status_label(code: &str) -> String {
  OrderStatus::from(code).label().to_string()
}

/// Tag colour for a raw status code.
pub fn order_status_color(code: &str) -> &'static str {
  OrderStatus::from(code).tone().as_str()
}
