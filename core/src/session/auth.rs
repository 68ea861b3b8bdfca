// flexlease/src/session/auth.rs

use async_trait::async_trait;

/// Supplies credentials to outgoing requests and reacts to rejected ones.
/// Token storage is the implementor's concern.
#[async_trait]
pub trait AuthHandler: Send + Sync {
  fn token(&self) -> Option<String>;

  fn refresh_token(&self) -> Option<String> {
    None
  }

  /// Exchanges a refresh token for a new access token. `Ok(None)` means the
  /// refresh was refused.
  async fn refresh_tokens(&self, _refresh_token: &str) -> anyhow::Result<Option<String>> {
    Ok(None)
  }

  /// Called once the session can no longer be recovered.
  fn on_unauthorized(&self);
}

/// Handler for sessions that never carry credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuth;

#[async_trait]
impl AuthHandler for AnonymousAuth {
  fn token(&self) -> Option<String> {
    None
  }

  fn on_unauthorized(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRecovery {
  /// Replay the rejected request with this token.
  Retry { token: String },
  SignedOut,
}
