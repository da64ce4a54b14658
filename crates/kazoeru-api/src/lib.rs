//! kazoeru-api crate
//!
//! Web server providing text statistics as HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Text Statistics
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "hello world"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use kazoeru::{AnalyzePayload, TextStats};
pub use service::AnalyzeServiceFull;
