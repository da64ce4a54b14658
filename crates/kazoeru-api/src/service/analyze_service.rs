//! Text Statistics Service

use kazoeru::models::{AnalyzePayload, TextStats};
use kazoeru::{analyze, validate};

use crate::errors::Result;

/// Common interface for the text statistics service
///
/// This trait allows swapping production implementation (`AnalyzeServiceFull`) with
/// test stubs/mocks.
pub trait AnalyzeService: Send + Sync {
  /// Validates the payload and computes text statistics
  ///
  /// # Errors
  /// - Validation error (wrong payload shape, unknown keys, invalid value, etc.)
  fn analyze(&self, payload: AnalyzePayload) -> Result<TextStats>;
}

/// Text Statistics Service
///
/// Validation and analysis are pure functions over the payload, so the service
/// holds no state and can be shared freely across workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeServiceFull;

impl AnalyzeServiceFull {
  /// Creates the service
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Validates the payload and computes text statistics
  ///
  /// # Arguments
  /// * `payload` - Raw payload as deserialized at the JSON boundary
  ///
  /// # Returns
  /// Statistics for the validated text
  ///
  /// # Errors
  /// The first failing validation check, converted to `ApiError::Validation`
  pub fn analyze(&self, payload: AnalyzePayload) -> Result<TextStats> {
    let text = validate(&payload)?;

    Ok(analyze(&text))
  }
}

/// Production implementation of trait `AnalyzeService`
impl AnalyzeService for AnalyzeServiceFull {
  fn analyze(&self, payload: AnalyzePayload) -> Result<TextStats> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    AnalyzeServiceFull::analyze(self, payload)
  }
}
