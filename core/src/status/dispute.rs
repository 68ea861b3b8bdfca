// flexlease/src/status/dispute.rs

//! Dispute timeline and arbitration labels.

use serde::{Deserialize, Serialize};

use super::Tone;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisputeStatus {
  Open,
  PendingAdmin,
  PendingReviewPanel,
  Resolved,
  Closed,
  Unknown(String),
}

impl DisputeStatus {
  pub fn code(&self) -> &str {
    match self {
      DisputeStatus::Open => "OPEN",
      DisputeStatus::PendingAdmin => "PENDING_ADMIN",
      DisputeStatus::PendingReviewPanel => "PENDING_REVIEW_PANEL",
      DisputeStatus::Resolved => "RESOLVED",
      DisputeStatus::Closed => "CLOSED",
      DisputeStatus::Unknown(code) => code,
    }
  }

  pub fn label(&self) -> &str {
    match self {
      DisputeStatus::Open => "Negotiating",
      DisputeStatus::PendingAdmin => "Awaiting platform",
      DisputeStatus::PendingReviewPanel => "Under review",
      DisputeStatus::Resolved => "Settled",
      DisputeStatus::Closed => "Closed",
      DisputeStatus::Unknown(code) => code,
    }
  }

  pub fn tone(&self) -> Tone {
    match self {
      DisputeStatus::Open => Tone::Orange,
      DisputeStatus::PendingAdmin => Tone::Blue,
      DisputeStatus::Resolved => Tone::Green,
      DisputeStatus::Closed => Tone::Red,
      DisputeStatus::PendingReviewPanel => Tone::Purple,
      DisputeStatus::Unknown(_) => Tone::Default,
    }
  }
}

impl From<&str> for DisputeStatus {
  fn from(code: &str) -> Self {
    match code {
      "OPEN" => DisputeStatus::Open,
      "PENDING_ADMIN" => DisputeStatus::PendingAdmin,
      "PENDING_REVIEW_PANEL" => DisputeStatus::PendingReviewPanel,
      "RESOLVED" => DisputeStatus::Resolved,
      "CLOSED" => DisputeStatus::Closed,
      other => DisputeStatus::Unknown(other.to_string()),
    }
  }
}

impl From<String> for DisputeStatus {
  fn from(code: String) -> Self {
    DisputeStatus::from(code.as_str())
  }
}

impl From<DisputeStatus> for String {
  fn from(status: DisputeStatus) -> Self {
    match status {
      DisputeStatus::Unknown(code) => code,
      known => known.code().to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeResolutionOption {
  Redeliver,
  PartialRefund,
  ReturnWithDepositDeduction,
  DiscountedBuyout,
  Custom,
}

impl DisputeResolutionOption {
  pub fn code(&self) -> &'static str {
    match self {
      DisputeResolutionOption::Redeliver => "REDELIVER",
      DisputeResolutionOption::PartialRefund => "PARTIAL_REFUND",
      DisputeResolutionOption::ReturnWithDepositDeduction => "RETURN_WITH_DEPOSIT_DEDUCTION",
      DisputeResolutionOption::DiscountedBuyout => "DISCOUNTED_BUYOUT",
      DisputeResolutionOption::Custom => "CUSTOM",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      DisputeResolutionOption::Redeliver => "Redeliver / resend",
      DisputeResolutionOption::PartialRefund => "Partial refund, keep leasing",
      DisputeResolutionOption::ReturnWithDepositDeduction => "Return with deposit deduction",
      DisputeResolutionOption::DiscountedBuyout => "Discounted buyout",
      DisputeResolutionOption::Custom => "Custom resolution",
    }
  }
}

/// Selection order for arbitration forms.
pub const DISPUTE_OPTIONS: [DisputeResolutionOption; 5] = [
  DisputeResolutionOption::Redeliver,
  DisputeResolutionOption::PartialRefund,
  DisputeResolutionOption::ReturnWithDepositDeduction,
  DisputeResolutionOption::DiscountedBuyout,
  DisputeResolutionOption::Custom,
];

/// Label for a raw resolution option code. Missing means the party has not
/// proposed anything yet.
pub fn dispute_option_label(code: Option<&str>) -> String {
  match code {
    None | Some("") => "Not provided".to_string(),
    Some(code) => DISPUTE_OPTIONS
      .iter()
      .find(|option| option.code() == code)
      .map(|option| option.label().to_string())
      .unwrap_or_else(|| code.to_string()),
  }
}

pub fn dispute_actor_label(role: Option<&str>) -> &'static str {
  match role {
    Some("USER") => "Consumer",
    Some("VENDOR") => "Vendor",
    Some("ADMIN") => "Platform admin",
    Some("ARBITRATOR") => "Arbitrator",
    Some("REVIEW_PANEL") => "Review panel",
    Some("INTERNAL") => "Platform",
    _ => "System",
  }
}
