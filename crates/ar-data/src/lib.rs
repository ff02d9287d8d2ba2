//! Data layer: HTTP implementations of the core service traits
//!
//! Each backing service (schema introspection, report execution, dashboard
//! persistence) gets one client struct over a shared HTTP wrapper. Calls are
//! a single round trip; failures surface the raw server text and are left
//! for the caller to retry manually.

pub mod dashboards;
pub mod gateway;
mod http;
pub mod reports;
pub mod schema;

use ar_core::ValidationError;
use thiserror::Error;

// Re-exports
pub use dashboards::HttpDashboardStore;
pub use gateway::ReportGateway;
pub use reports::HttpReportStore;
pub use schema::HttpSchemaService;

/// Errors that can occur talking to the backing services
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `body` carries the raw server text for display
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
