//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AnalyzeService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Text statistics service
  ///
  /// - Production: `Arc::new(AnalyzeServiceFull::new())`
  /// - Test: `Arc::new(StubAnalyzeService)`
  pub service: Arc<dyn AnalyzeService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnalyzeService>) -> Self {
    Self { config, service }
  }
}
