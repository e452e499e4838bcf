//! Trimkit Core — error types and trimming rule configuration.

pub mod error;
pub mod rules;

pub use error::{Error, Result};
pub use rules::TrimRules;
