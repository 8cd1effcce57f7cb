// crates/engine/src/domain/error.rs
use std::path::PathBuf;

use thiserror::Error;

use super::types::TrustVerdict;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("usage: {0}")]
  Usage(String),

  #[error("failed to read certificate file {}: {source}", path.display())]
  File {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("allocation failed: {0}")]
  Allocation(String),

  #[error("certificate #{index} is not a valid DER-encoded X.509 certificate")]
  MalformedCertificate { index: usize },

  #[error("failed to create trust evaluation context: {0}")]
  TrustContextCreation(String),

  #[error("trust evaluation failed: {0}")]
  Evaluation(String),

  #[error("certificate chain failed validation (verdict: {verdict})")]
  ChainValidation { verdict: TrustVerdict },

  #[error("configuration: {0}")]
  Config(String),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("feature not enabled: {0}")]
  Feature(&'static str),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Process exit codes. `Success` is never produced from an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
  Success = 0,
  ValidationFailed = 1,
  Usage = 2,
  Fatal = 3,
}

impl ExitStatus {
  pub fn code(self) -> u8 {
    self as u8
  }
}

impl EngineError {
  /// True when the chain was evaluated and found untrusted, as opposed to the
  /// tool failing to get that far.
  pub fn is_validation_failure(&self) -> bool {
    matches!(self, EngineError::ChainValidation { .. })
  }

  pub fn exit_status(&self) -> ExitStatus {
    match self {
      EngineError::ChainValidation { .. } => ExitStatus::ValidationFailed,
      EngineError::Usage(_) | EngineError::Config(_) => ExitStatus::Usage,
      _ => ExitStatus::Fatal,
    }
  }

  pub fn exit_code(&self) -> u8 {
    self.exit_status().code()
  }
}
