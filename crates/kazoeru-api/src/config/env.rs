//! Config loading from environment variables

use super::constants::DEFAULT_BIND_ADDR;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// `KAZOERU_API_BASE_URL` overrides the default bind address.
  /// Unset variables fall back to defaults, so loading never fails.
  #[must_use]
  pub fn from_env() -> Self {
    let bind_addr =
      std::env::var("KAZOERU_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    Self { bind_addr }
  }
}
