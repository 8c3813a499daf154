//! Request and response shapes for the licensing endpoint.

use serde::{Deserialize, Serialize};

/// Message attached to the fail-open grace outcome.
pub const GRACE_PERIOD_MESSAGE: &str =
    "License validation temporarily unavailable - grace period active";

/// Signed validation request body (`POST /validate`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    /// The deployment's license key.
    pub license_key: String,

    /// Domain the deployment serves.
    pub domain: String,

    /// Agency identifier.
    pub agency_id: String,

    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,

    /// HMAC-SHA256 over the other fields, hex-encoded.
    pub signature: String,
}

/// Result of a validation attempt.
///
/// This is both the endpoint's response shape and the value every
/// orchestrator path resolves to. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Whether the deployment may serve requests.
    pub valid: bool,

    /// Human-readable explanation of the outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// How many deployments this license currently has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_count: Option<u64>,

    /// How many deployments this license allows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_deployments: Option<u64>,
}

impl ValidationOutcome {
    /// A valid outcome with the given message.
    pub fn valid_with(message: &str) -> Self {
        Self {
            valid: true,
            message: Some(message.to_string()),
            deployment_count: None,
            max_deployments: None,
        }
    }

    /// An invalid outcome with the given message.
    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
            deployment_count: None,
            max_deployments: None,
        }
    }

    /// The fail-open outcome used when validation infrastructure is
    /// unavailable. Valid to the consumer; only the message differs.
    pub fn grace_period() -> Self {
        Self::valid_with(GRACE_PERIOD_MESSAGE)
    }

    /// Whether the deployment allowance still has room.
    ///
    /// Invalid outcomes never have room. When either counter is absent
    /// the license is treated as unlimited.
    pub fn deployments_within_limit(&self) -> bool {
        if !self.valid {
            return false;
        }
        match (self.deployment_count, self.max_deployments) {
            (Some(count), Some(max)) => count < max,
            _ => true,
        }
    }
}
