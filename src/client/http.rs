//! Reqwest-based client for the licensing endpoint.

use crate::client::RemoteValidator;
use crate::config::SitewardenConfig;
use crate::protocol::models::{ValidateRequest, ValidationOutcome};
use crate::SitewardenError;
use reqwest::blocking::Client;

/// Blocking HTTP validator.
///
/// Posts the signed JSON payload and maps every failure mode — connect
/// error, timeout, non-2xx status, unparseable body — onto
/// [`SitewardenError`] so the orchestrator can fall back.
pub struct HttpValidator {
    client: Client,
    endpoint: String,
}

impl HttpValidator {
    /// Create a validator from config.
    ///
    /// The request timeout comes from `config.remote_timeout`; a request
    /// is never left pending past it.
    pub fn new(config: &SitewardenConfig) -> Result<Self, SitewardenError> {
        let client = Client::builder()
            .timeout(config.remote_timeout)
            .build()
            .map_err(|e| {
                SitewardenError::RemoteTransport(format!("Failed to create client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this validator posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteValidator for HttpValidator {
    fn validate(&self, request: &ValidateRequest) -> Result<ValidationOutcome, SitewardenError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| SitewardenError::RemoteTransport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SitewardenError::RemoteTransport(format!(
                "Validation failed: {}",
                status.as_u16()
            )));
        }

        response
            .json::<ValidationOutcome>()
            .map_err(|e| SitewardenError::ProtocolError(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_creation() {
        let config = SitewardenConfig::default();
        let validator = HttpValidator::new(&config);
        assert!(validator.is_ok());
    }

    #[test]
    fn validator_uses_configured_endpoint() {
        let config = SitewardenConfig {
            endpoint: "https://licensing.internal/validate".to_string(),
            ..SitewardenConfig::default()
        };
        let validator = HttpValidator::new(&config).unwrap();
        assert_eq!(validator.endpoint(), "https://licensing.internal/validate");
    }
}
