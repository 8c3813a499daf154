//! Sitewarden configuration.

use std::env;
use std::time::Duration;

/// Default licensing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nexus-starter.com/validate";

/// How long a validation result stays fresh in the cache (one hour).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Timeout applied to each remote validation request.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for sitewarden license gating.
///
/// All settings come from the deployment environment; see [`Self::from_env`].
/// A missing license key is a valid configuration — the orchestrator turns
/// it into an invalid outcome instead of refusing to start.
#[derive(Debug, Clone)]
pub struct SitewardenConfig {
    /// The deployment's license key, if one is configured.
    pub license_key: Option<String>,

    /// Agency identifier sent with remote validation requests.
    pub agency_id: String,

    /// Shared secret used to sign remote validation requests.
    pub shared_secret: String,

    /// Domain this deployment serves. Part of the cache key and the
    /// signed request payload.
    pub domain: String,

    /// Development mode: validation is bypassed entirely.
    pub dev_mode: bool,

    /// Whether license enforcement is active. Deployment variants that
    /// ship without licensing (fundraiser sites) turn this off at startup.
    pub licensing_enabled: bool,

    /// URL of the remote validation endpoint.
    pub endpoint: String,

    /// Timeout for the remote validation request.
    pub remote_timeout: Duration,

    /// Time-to-live for cached validation results.
    pub cache_ttl: Duration,
}

impl Default for SitewardenConfig {
    fn default() -> Self {
        Self {
            license_key: None,
            agency_id: String::new(),
            shared_secret: "default-secret".to_string(),
            domain: "localhost".to_string(),
            dev_mode: false,
            licensing_enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl SitewardenConfig {
    /// Build a configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `SITEWARDEN_LICENSE_KEY` — the license key (absence is allowed)
    /// - `SITEWARDEN_AGENCY_ID` — agency identifier
    /// - `SITEWARDEN_SECRET` — request signing secret
    /// - `SITEWARDEN_DOMAIN` — domain override
    /// - `SITEWARDEN_DEV_MODE` — truthy value enables the dev bypass
    /// - `SITEWARDEN_DISABLED` — truthy value turns enforcement off
    /// - `SITEWARDEN_ENDPOINT` — validation endpoint override
    ///
    /// Unset or empty values fall back to [`Default`].
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.license_key = env::var("SITEWARDEN_LICENSE_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        if let Ok(agency_id) = env::var("SITEWARDEN_AGENCY_ID") {
            config.agency_id = agency_id;
        }
        if let Some(secret) = env::var("SITEWARDEN_SECRET").ok().filter(|v| !v.is_empty()) {
            config.shared_secret = secret;
        }
        if let Some(domain) = env::var("SITEWARDEN_DOMAIN").ok().filter(|v| !v.is_empty()) {
            config.domain = domain;
        }
        if let Some(endpoint) = env::var("SITEWARDEN_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty())
        {
            config.endpoint = endpoint;
        }

        config.dev_mode = env::var("SITEWARDEN_DEV_MODE")
            .map(|v| flag_enabled(&v))
            .unwrap_or(false);
        config.licensing_enabled = !env::var("SITEWARDEN_DISABLED")
            .map(|v| flag_enabled(&v))
            .unwrap_or(false);

        config
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), crate::SitewardenError> {
        if self.endpoint.is_empty() {
            return Err(crate::SitewardenError::ConfigError(
                "endpoint cannot be empty".to_string(),
            ));
        }
        if self.domain.is_empty() {
            return Err(crate::SitewardenError::ConfigError(
                "domain cannot be empty".to_string(),
            ));
        }
        if self.shared_secret.is_empty() {
            return Err(crate::SitewardenError::ConfigError(
                "shared_secret cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Interpret an environment flag value.
fn flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = SitewardenConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_domain_is_rejected() {
        let config = SitewardenConfig {
            domain: String::new(),
            ..SitewardenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let config = SitewardenConfig {
            endpoint: String::new(),
            ..SitewardenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = SitewardenConfig {
            shared_secret: String::new(),
            ..SitewardenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_license_key_is_still_valid_config() {
        let config = SitewardenConfig::default();
        assert!(config.license_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn flag_parsing() {
        assert!(flag_enabled("1"));
        assert!(flag_enabled("true"));
        assert!(flag_enabled("TRUE"));
        assert!(flag_enabled(" yes "));
        assert!(flag_enabled("on"));
        assert!(!flag_enabled("0"));
        assert!(!flag_enabled("false"));
        assert!(!flag_enabled(""));
        assert!(!flag_enabled("off"));
    }
}
