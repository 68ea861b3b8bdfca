// flexlease/src/payment/types.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentScene {
  Deposit,
  Rent,
  Buyout,
  Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentChannel {
  Mock,
  Alipay,
  Wechat,
  BankTransfer,
}

impl PaymentChannel {
  pub fn code(&self) -> &'static str {
    match self {
      PaymentChannel::Mock => "MOCK",
      PaymentChannel::Alipay => "ALIPAY",
      PaymentChannel::Wechat => "WECHAT",
      PaymentChannel::BankTransfer => "BANK_TRANSFER",
    }
  }
}

impl FromStr for PaymentChannel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_uppercase().as_str() {
      "MOCK" => Ok(PaymentChannel::Mock),
      "ALIPAY" => Ok(PaymentChannel::Alipay),
      "WECHAT" => Ok(PaymentChannel::Wechat),
      "BANK_TRANSFER" => Ok(PaymentChannel::BankTransfer),
      other => Err(format!("unknown payment channel '{}'", other)),
    }
  }
}

impl std::fmt::Display for PaymentChannel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
  Pending,
  Succeeded,
  Failed,
}

/// Split types and beneficiaries understood by the payment service.
pub const SPLIT_DEPOSIT_RESERVE: &str = "DEPOSIT_RESERVE";
pub const SPLIT_VENDOR_INCOME: &str = "VENDOR_INCOME";
pub const BENEFICIARY_PLATFORM_RESERVE: &str = "PLATFORM_RESERVE";

pub fn vendor_beneficiary(vendor_id: &str) -> String {
  format!("VENDOR_{}", vendor_id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSplit {
  pub split_type: String,
  pub amount: f64,
  pub beneficiary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitRequest {
  pub user_id: String,
  pub vendor_id: String,
  pub scene: PaymentScene,
  pub channel: PaymentChannel,
  pub amount: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub splits: Option<Vec<PaymentSplit>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentTransaction {
  pub id: Option<String>,
  pub status: Option<PaymentStatus>,
  pub amount: Option<f64>,
}
