// flexlease/src/payment/gateway.rs

//! The seam between payment planning and the payment service.

use async_trait::async_trait;
use tracing::{event, instrument, Level};

use super::planner::{plan_initial_payment, AutoPaymentParams};
use super::types::{PaymentInitRequest, PaymentStatus, PaymentTransaction};
use crate::config::ClientConfig;
use crate::error::{FlexleaseError, FlexleaseResult};

/// Submits payment initialisation requests. Implementations own the transport;
/// any error they return is reported as [`FlexleaseError::Payment`].
#[async_trait]
pub trait PaymentGateway: Send + Sync {
  /// `Ok(None)` means the service accepted the request without returning a
  /// transaction body.
  async fn init_payment(&self, order_id: &str, request: PaymentInitRequest) -> anyhow::Result<Option<PaymentTransaction>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPaymentResult {
  pub succeeded: bool,
  pub status: PaymentStatus,
  pub transaction_id: Option<String>,
}

impl AutoPaymentResult {
  fn not_submitted() -> Self {
    Self {
      succeeded: false,
      status: PaymentStatus::Pending,
      transaction_id: None,
    }
  }
}

/// Pays for a just-placed order in one go. Nothing is sent to the gateway when
/// the plan has nothing to charge.
#[instrument(
  name = "payment::auto_complete_initial_payment",
  skip_all,
  fields(order_id = %params.order_id, vendor_id = %params.vendor_id),
  err(Display)
)]
pub async fn auto_complete_initial_payment<G>(
  gateway: &G,
  config: &ClientConfig,
  params: AutoPaymentParams,
) -> FlexleaseResult<AutoPaymentResult>
where
  G: PaymentGateway + ?Sized,
{
  let plan = match plan_initial_payment(&params) {
    Some(plan) => plan,
    None => return Ok(AutoPaymentResult::not_submitted()),
  };

  let request = PaymentInitRequest {
    user_id: params.user_id,
    vendor_id: params.vendor_id,
    scene: plan.scene,
    channel: config.payment_channel,
    amount: plan.amount,
    description: Some(
      params
        .description
        .unwrap_or_else(|| config.auto_payment_description.clone()),
    ),
    splits: if plan.splits.is_empty() { None } else { Some(plan.splits) },
  };

  let transaction = gateway
    .init_payment(&params.order_id, request)
    .await
    .map_err(|source| FlexleaseError::Payment {
      order_id: params.order_id.clone(),
      source,
    })?;

  let status = transaction
    .as_ref()
    .and_then(|t| t.status)
    .unwrap_or(PaymentStatus::Pending);
  event!(Level::INFO, ?status, "Initial payment submitted.");

  Ok(AutoPaymentResult {
    succeeded: status == PaymentStatus::Succeeded,
    status,
    transaction_id: transaction.and_then(|t| t.id),
  })
}
