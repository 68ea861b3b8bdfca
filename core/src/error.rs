// flexlease/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::lifecycle::LifecycleError;

#[derive(Debug, Error)]
pub enum FlexleaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Payment gateway failed for order '{order_id}'. Source: {source}")]
    Payment {
        order_id: String,
        #[source]
        source: AnyhowError,
    },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error in user-provided handler or external operation. Source: {source}")]
    External {
        #[source]
        source: AnyhowError,
    },

    #[error("Internal flexlease error: {0}")]
    Internal(String),
}

// Errors raised by caller-supplied gateways and auth handlers arrive as anyhow::Error.
impl From<AnyhowError> for FlexleaseError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a FlexleaseError that was boxed into anyhow further down the stack
    // instead of nesting External(External(..)).
    match err.downcast::<FlexleaseError>() {
      Ok(inner) => inner,
      Err(err) => FlexleaseError::External { source: err },
    }
  }
}

pub type FlexleaseResult<T, E = FlexleaseError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anyhow_wrapping_a_flexlease_error_is_unwrapped() {
    let wrapped = anyhow::Error::new(FlexleaseError::Config("bad digits".to_string()));
    match FlexleaseError::from(wrapped) {
      FlexleaseError::Config(msg) => assert_eq!(msg, "bad digits"),
      other => panic!("Expected FlexleaseError::Config, got {:?}", other),
    }
  }

  #[test]
  fn foreign_anyhow_error_becomes_external() {
    let err = FlexleaseError::from(anyhow::anyhow!("socket closed"));
    assert!(matches!(err, FlexleaseError::External { .. }));
    assert!(err.to_string().contains("socket closed"));
  }
}
