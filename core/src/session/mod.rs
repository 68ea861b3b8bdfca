// flexlease/src/session/mod.rs

//! Per-session state: configuration, credentials and the query cache.
//!
//! A `SessionContext` is built explicitly and handed to whatever issues
//! requests, so any number of sessions can run side by side without sharing
//! caches or auth handlers.

pub mod auth;
pub mod query_cache;

pub use auth::{AnonymousAuth, AuthHandler, AuthRecovery};
pub use query_cache::{QueryCache, DEFAULT_SCOPE};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{event, instrument, Level};

use crate::config::ClientConfig;
use crate::money::format_currency;

type RefreshOutcome = Result<Option<String>, Arc<anyhow::Error>>;
type PendingRefresh = Shared<BoxFuture<'static, RefreshOutcome>>;

#[derive(Clone)]
pub struct SessionContext {
  config: Arc<ClientConfig>,
  auth: Arc<dyn AuthHandler>,
  cache: QueryCache,
  // At most one refresh in flight; concurrent 401s await the same one.
  pending_refresh: Arc<Mutex<Option<PendingRefresh>>>,
}

impl SessionContext {
  pub fn new(config: Arc<ClientConfig>, auth: Arc<dyn AuthHandler>) -> Self {
    Self {
      config,
      auth,
      cache: QueryCache::new(),
      pending_refresh: Arc::new(Mutex::new(None)),
    }
  }

  pub fn anonymous(config: Arc<ClientConfig>) -> Self {
    Self::new(config, Arc::new(AnonymousAuth))
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  pub fn cache(&self) -> &QueryCache {
    &self.cache
  }

  pub fn auth(&self) -> &Arc<dyn AuthHandler> {
    &self.auth
  }

  /// Absolute request path under the configured API base.
  pub fn endpoint(&self, path: &str) -> String {
    let base = self.config.api_base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
      base.to_string()
    } else {
      format!("{}/{}", base, path)
    }
  }

  /// Formats an amount with the configured number of fraction digits.
  pub fn format_amount(&self, value: Option<f64>) -> String {
    format_currency(value, self.config.currency_digits)
  }

  /// `Authorization` header value, if the handler currently has a token.
  pub fn authorization_header(&self) -> Option<String> {
    self
      .auth
      .token()
      .filter(|t| !t.is_empty())
      .map(|t| format!("Bearer {}", t))
  }

  /// Partitions the cache by user so accounts never see each other's data.
  pub fn sign_in(&self, user_scope: &str) {
    self.cache.set_scope(Some(user_scope));
  }

  pub fn sign_out(&self) {
    let scope = self.cache.scope();
    self.cache.clear(Some(&scope));
    self.cache.set_scope(None);
  }

  /// Decides what to do after a 401. A request that was already retried, or a
  /// session without a refresh token, signs the user out. Concurrent callers
  /// share a single refresh request and all see its outcome.
  #[instrument(name = "SessionContext::recover_unauthorized", skip(self))]
  pub async fn recover_unauthorized(&self, already_retried: bool) -> AuthRecovery {
    if already_retried {
      return self.expire();
    }
    let refresh = match self.join_or_start_refresh() {
      Some(refresh) => refresh,
      None => return self.expire(),
    };

    let outcome = refresh.clone().await;
    {
      let mut slot = self.pending_refresh.lock();
      if slot.as_ref().is_some_and(|pending| pending.ptr_eq(&refresh)) {
        *slot = None;
      }
    }

    match outcome {
      Ok(Some(token)) if !token.is_empty() => {
        event!(Level::DEBUG, "Access token refreshed; retrying request.");
        AuthRecovery::Retry { token }
      }
      Ok(_) => self.expire(),
      Err(err) => {
        event!(Level::WARN, error = %err, "Token refresh failed.");
        self.expire()
      }
    }
  }

  /// The in-flight refresh, or a new one when none is running. `None` when
  /// there is no refresh token to spend.
  fn join_or_start_refresh(&self) -> Option<PendingRefresh> {
    let mut slot = self.pending_refresh.lock();
    if let Some(pending) = slot.as_ref() {
      event!(Level::DEBUG, "Joining in-flight token refresh.");
      return Some(pending.clone());
    }
    let refresh_token = self.auth.refresh_token().filter(|t| !t.is_empty())?;
    let auth = Arc::clone(&self.auth);
    let refresh = async move { auth.refresh_tokens(&refresh_token).await.map_err(Arc::new) }
      .boxed()
      .shared();
    *slot = Some(refresh.clone());
    Some(refresh)
  }

  fn expire(&self) -> AuthRecovery {
    self.auth.on_unauthorized();
    self.sign_out();
    AuthRecovery::SignedOut
  }
}

impl std::fmt::Debug for SessionContext {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionContext")
      .field("config", &self.config)
      .field("cache", &self.cache)
      .field("refresh_in_flight", &self.pending_refresh.lock().is_some())
      .finish_non_exhaustive()
  }
}
