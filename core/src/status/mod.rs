// flexlease/src/status/mod.rs

//! Presentation lookups for order and dispute states.
//!
//! Every lookup is total: an unrecognized code is echoed back as its own label
//! with the [`Tone::Default`] tone.

pub mod dispute;
pub mod order;

pub use dispute::{
  dispute_actor_label, dispute_option_label, DisputeResolutionOption, DisputeStatus, DISPUTE_OPTIONS,
};
pub use order::{order_status_color, order_status_label, OrderStatus};

/// Severity tier used to colour a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
  Warning,
  Processing,
  Success,
  Purple,
  Green,
  Orange,
  Blue,
  Red,
  Default,
}

impl Tone {
  pub fn as_str(&self) -> &'static str {
    match self {
      Tone::Warning => "warning",
      Tone::Processing => "processing",
      Tone::Success => "success",
      Tone::Purple => "purple",
      Tone::Green => "green",
      Tone::Orange => "orange",
      Tone::Blue => "blue",
      Tone::Red => "red",
      Tone::Default => "default",
    }
  }
}

impl std::fmt::Display for Tone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
