// flexlease/src/config.rs

use crate::error::{FlexleaseError, FlexleaseResult};
use crate::payment::PaymentChannel;
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "/api/v1";
pub const DEFAULT_AUTO_PAYMENT_DESCRIPTION: &str = "Auto payment (pay on order)";
pub const DEFAULT_CURRENCY_DIGITS: usize = 2;

#[derive(Debug, Clone)] // Cloned into every SessionContext
pub struct ClientConfig {
  pub api_base_url: String,
  pub payment_channel: PaymentChannel,
  pub auto_payment_description: String,
  pub currency_digits: usize,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      payment_channel: PaymentChannel::Mock,
      auto_payment_description: DEFAULT_AUTO_PAYMENT_DESCRIPTION.to_string(),
      currency_digits: DEFAULT_CURRENCY_DIGITS,
    }
  }
}

impl ClientConfig {
  pub fn from_env() -> FlexleaseResult<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let api_base_url = get_env("FLEXLEASE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let payment_channel = match get_env("FLEXLEASE_PAYMENT_CHANNEL") {
      Some(raw) => raw
        .parse::<PaymentChannel>()
        .map_err(|e| FlexleaseError::Config(format!("Invalid FLEXLEASE_PAYMENT_CHANNEL: {}", e)))?,
      None => PaymentChannel::Mock,
    };

    let auto_payment_description = get_env("FLEXLEASE_AUTO_PAYMENT_DESCRIPTION")
      .unwrap_or_else(|| DEFAULT_AUTO_PAYMENT_DESCRIPTION.to_string());

    let currency_digits = get_env("FLEXLEASE_CURRENCY_DIGITS")
      .unwrap_or_else(|| DEFAULT_CURRENCY_DIGITS.to_string())
      .trim()
      .parse::<usize>()
      .map_err(|e| FlexleaseError::Config(format!("Invalid FLEXLEASE_CURRENCY_DIGITS: {}", e)))?;

    tracing::info!(api_base_url = %api_base_url, channel = %payment_channel, "Client configuration loaded.");

    Ok(Self {
      api_base_url,
      payment_channel,
      auto_payment_description,
      currency_digits,
    })
  }
}
