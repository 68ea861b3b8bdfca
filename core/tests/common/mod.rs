// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use flexlease::payment::{PaymentGateway, PaymentInitRequest, PaymentStatus, PaymentTransaction};
use flexlease::session::AuthHandler;
use flexlease::{CartItem, OrderItem, PlanSnapshot};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---
pub fn snapshot(deposit: Option<f64>, rent: Option<f64>, buyout: Option<f64>) -> PlanSnapshot {
  PlanSnapshot {
    plan_id: Some("plan-standard-12".to_string()),
    plan_type: Some("STANDARD".to_string()),
    term_months: Some(12.0),
    deposit_amount: deposit,
    rent_amount_monthly: rent,
    buyout_price: buyout,
  }
}

pub fn order_item(deposit: Option<f64>, rent: Option<f64>, quantity: Option<f64>) -> OrderItem {
  OrderItem {
    product_id: "prod-camera".to_string(),
    product_name: "Mirrorless camera".to_string(),
    unit_deposit_amount: deposit,
    unit_rent_amount: rent,
    quantity,
    ..Default::default()
  }
}

pub fn cart_item(deposit: Option<f64>, rent: Option<f64>, quantity: Option<f64>) -> CartItem {
  CartItem {
    id: "cart-1".to_string(),
    product_id: "prod-drone".to_string(),
    product_name: "Survey drone".to_string(),
    unit_deposit_amount: deposit,
    unit_rent_amount: rent,
    quantity,
    ..Default::default()
  }
}

// --- Payment gateway double ---
pub enum GatewayBehavior {
  Respond(Option<PaymentTransaction>),
  Fail(&'static str),
}

pub struct RecordingGateway {
  behavior: GatewayBehavior,
  pub requests: Mutex<Vec<(String, PaymentInitRequest)>>,
}

impl RecordingGateway {
  pub fn succeeding(transaction_id: &str) -> Self {
    Self::with(GatewayBehavior::Respond(Some(PaymentTransaction {
      id: Some(transaction_id.to_string()),
      status: Some(PaymentStatus::Succeeded),
      amount: None,
    })))
  }

  pub fn with(behavior: GatewayBehavior) -> Self {
    Self {
      behavior,
      requests: Mutex::new(Vec::new()),
    }
  }

  pub fn request_count(&self) -> usize {
    self.requests.lock().len()
  }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
  async fn init_payment(&self, order_id: &str, request: PaymentInitRequest) -> anyhow::Result<Option<PaymentTransaction>> {
    self.requests.lock().push((order_id.to_string(), request));
    match &self.behavior {
      GatewayBehavior::Respond(transaction) => Ok(transaction.clone()),
      GatewayBehavior::Fail(message) => Err(anyhow::anyhow!(*message)),
    }
  }
}

// --- Auth handler double ---
pub struct ScriptedAuth {
  pub token: Option<String>,
  pub refresh_token: Option<String>,
  pub refreshed_token: Result<Option<String>, &'static str>,
  pub refresh_delay: Option<Duration>,
  pub refresh_calls: AtomicUsize,
  pub unauthorized_calls: AtomicUsize,
}

impl ScriptedAuth {
  pub fn new(token: Option<&str>, refresh_token: Option<&str>, refreshed_token: Result<Option<&str>, &'static str>) -> Self {
    Self {
      token: token.map(str::to_string),
      refresh_token: refresh_token.map(str::to_string),
      refreshed_token: refreshed_token.map(|t| t.map(str::to_string)),
      refresh_delay: None,
      refresh_calls: AtomicUsize::new(0),
      unauthorized_calls: AtomicUsize::new(0),
    }
  }

  /// Keeps each refresh pending for `delay`, like a real round trip.
  pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
    self.refresh_delay = Some(delay);
    self
  }

  pub fn unauthorized_count(&self) -> usize {
    self.unauthorized_calls.load(Ordering::SeqCst)
  }

  pub fn refresh_count(&self) -> usize {
    self.refresh_calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl AuthHandler for ScriptedAuth {
  fn token(&self) -> Option<String> {
    self.token.clone()
  }

  fn refresh_token(&self) -> Option<String> {
    self.refresh_token.clone()
  }

  async fn refresh_tokens(&self, _refresh_token: &str) -> anyhow::Result<Option<String>> {
    self.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = self.refresh_delay {
      tokio::time::sleep(delay).await;
    }
    self.refreshed_token.clone().map_err(|e| anyhow::anyhow!(e))
  }

  fn on_unauthorized(&self) {
    self.unauthorized_calls.fetch_add(1, Ordering::SeqCst);
  }
}
