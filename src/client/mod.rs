//! Remote validation client.

pub mod http;

use crate::protocol::models::{ValidateRequest, ValidationOutcome};
use crate::SitewardenError;

/// A validator that can answer a signed validation request.
///
/// [`http::HttpValidator`] implements this against the real endpoint;
/// tests substitute counting stubs.
pub trait RemoteValidator: Send + Sync {
    /// Submit the request and return the endpoint's verdict.
    ///
    /// Implementations perform a single attempt; retries and fallbacks
    /// belong to the orchestrator.
    fn validate(&self, request: &ValidateRequest) -> Result<ValidationOutcome, SitewardenError>;
}
