//! Sitewarden error types.

use thiserror::Error;

/// Errors that can occur while validating a deployment license.
///
/// These are component-level failures. The orchestrator never lets one
/// escape to the request handler; every variant ends up folded into a
/// [`ValidationOutcome`](crate::protocol::models::ValidationOutcome).
#[derive(Debug, Error)]
pub enum SitewardenError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// License key does not have the expected four-segment shape.
    #[error("Invalid license key format ({segments} segments)")]
    InvalidFormat {
        /// Number of dash-separated segments found.
        segments: usize,
    },

    /// License expiry date is in the past.
    #[error("License has expired")]
    Expired,

    /// Checksum segment does not match the rest of the key.
    #[error("License checksum mismatch")]
    ChecksumMismatch,

    /// HTTP transport error communicating with the licensing endpoint.
    ///
    /// Covers network failures, timeouts, and non-2xx responses.
    #[error("License endpoint transport error: {0}")]
    RemoteTransport(String),

    /// Licensing endpoint response could not be interpreted.
    #[error("Protocol error: {0}")]
    ProtocolError(String),
}
