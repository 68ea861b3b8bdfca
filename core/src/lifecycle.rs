// flexlease/src/lifecycle.rs

//! Client-side mirror of the order transition table.
//!
//! The backend remains the authority on every transition; this table only
//! decides which actions the client offers for an order in a given state, so
//! that an obviously illegal request is never sent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
  Pay,
  Cancel,
  Ship,
  ConfirmReceipt,
  RequestReturn,
  ApproveReturn,
  CompleteReturn,
  ResumeLease,
  RequestBuyout,
  ConfirmBuyout,
  RejectBuyout,
  ForceClose,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
  #[error("Action {action:?} is not allowed while the order is {from}")]
  IllegalTransition { action: OrderAction, from: OrderStatus },
}

impl OrderAction {
  pub const ALL: [OrderAction; 12] = [
    OrderAction::Pay,
    OrderAction::Cancel,
    OrderAction::Ship,
    OrderAction::ConfirmReceipt,
    OrderAction::RequestReturn,
    OrderAction::ApproveReturn,
    OrderAction::CompleteReturn,
    OrderAction::ResumeLease,
    OrderAction::RequestBuyout,
    OrderAction::ConfirmBuyout,
    OrderAction::RejectBuyout,
    OrderAction::ForceClose,
  ];

  /// The state the order moves to when this action succeeds from `current`.
  pub fn next_status(&self, current: &OrderStatus) -> Result<OrderStatus, LifecycleError> {
    use OrderStatus::*;

    let next = match (self, current) {
      (OrderAction::Pay, PendingPayment) => AwaitingShipment,
      (OrderAction::Cancel, PendingPayment) => Cancelled,
      (OrderAction::Ship, AwaitingShipment) => AwaitingReceipt,
      (OrderAction::ConfirmReceipt, AwaitingReceipt) => InLease,
      (OrderAction::RequestReturn, InLease | ReturnInProgress) => ReturnRequested,
      (OrderAction::ApproveReturn, ReturnRequested) => ReturnInProgress,
      (OrderAction::CompleteReturn, ReturnRequested | ReturnInProgress) => Completed,
      (OrderAction::ResumeLease, ReturnRequested) => InLease,
      (OrderAction::RequestBuyout, InLease) => BuyoutRequested,
      (OrderAction::ConfirmBuyout, BuyoutRequested) => BuyoutCompleted,
      (OrderAction::RejectBuyout, BuyoutRequested) => InLease,
      // The backend only refuses the three settled states; an exception-closed
      // order may be closed again.
      (OrderAction::ForceClose, Cancelled | Completed | BuyoutCompleted | Unknown(_)) => {
        return Err(LifecycleError::IllegalTransition {
          action: *self,
          from: current.clone(),
        })
      }
      (OrderAction::ForceClose, _) => ExceptionClosed,
      _ => {
        return Err(LifecycleError::IllegalTransition {
          action: *self,
          from: current.clone(),
        })
      }
    };
    Ok(next)
  }

  pub fn is_allowed_from(&self, current: &OrderStatus) -> bool {
    self.next_status(current).is_ok()
  }
}

/// Actions legal from `status`, in declaration order.
pub fn available_actions(status: &OrderStatus) -> Vec<OrderAction> {
  OrderAction::ALL
    .iter()
    .copied()
    .filter(|action| action.is_allowed_from(status))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn settled_states_offer_nothing() {
    for status in [OrderStatus::Cancelled, OrderStatus::Completed, OrderStatus::BuyoutCompleted] {
      assert!(available_actions(&status).is_empty(), "{} should be settled", status);
    }
  }

  #[test]
  fn exception_closed_can_only_be_force_closed_again() {
    assert_eq!(
      available_actions(&OrderStatus::ExceptionClosed),
      vec![OrderAction::ForceClose]
    );
  }

  #[test]
  fn pending_payment_can_pay_cancel_or_force_close() {
    assert_eq!(
      available_actions(&OrderStatus::PendingPayment),
      vec![OrderAction::Pay, OrderAction::Cancel, OrderAction::ForceClose]
    );
  }
}
