// flexlease/src/payment/mod.rs

pub mod gateway;
pub mod planner;
pub mod types;

pub use gateway::{auto_complete_initial_payment, AutoPaymentResult, PaymentGateway};
pub use planner::{plan_initial_payment, AutoPaymentParams, InitialPaymentPlan};
pub use types::{
  PaymentChannel, PaymentInitRequest, PaymentScene, PaymentSplit, PaymentStatus, PaymentTransaction,
};
