//! License orchestrator - the main public API.
//!
//! Sequences cache lookup, remote validation, offline fallback, and the
//! fail-open grace policy. Every path resolves to a
//! [`ValidationOutcome`] value; nothing here panics or returns an error
//! into the request handler.

use crate::cache::{cache_key, ValidationCache};
use crate::client::http::HttpValidator;
use crate::client::RemoteValidator;
use crate::clock::{Clock, SystemClock};
use crate::config::SitewardenConfig;
use crate::crypto::signature::sign_request;
use crate::key;
use crate::protocol::models::{ValidateRequest, ValidationOutcome};
use crate::SitewardenError;
use std::sync::Arc;

/// Message returned when license enforcement is switched off at startup.
pub const DISABLED_MESSAGE: &str = "License enforcement disabled";

/// Message returned by the development-mode short-circuit.
pub const DEV_MODE_MESSAGE: &str = "Development mode - License validation bypassed";

/// Message returned when no license key is configured.
pub const NO_KEY_MESSAGE: &str = "No license key provided";

/// Orchestrates license validation for one deployment.
///
/// Create one instance per process and reuse it for every request; the
/// result cache lives inside.
pub struct LicenseManager {
    config: SitewardenConfig,
    clock: Arc<dyn Clock>,
    remote: Arc<dyn RemoteValidator>,
    cache: ValidationCache,
}

impl LicenseManager {
    /// Create a manager with the system clock and the HTTP validator.
    ///
    /// # Errors
    /// Returns an error if configuration validation fails or the HTTP
    /// client cannot be built. A missing license key is not an error
    /// here; it surfaces as an invalid outcome from [`Self::validate`].
    pub fn new(config: SitewardenConfig) -> Result<Self, SitewardenError> {
        config.validate()?;
        let remote: Arc<dyn RemoteValidator> = Arc::new(HttpValidator::new(&config)?);
        Ok(Self::assemble(config, Arc::new(SystemClock), remote))
    }

    /// Create a manager with an injected clock and remote validator.
    #[cfg(any(test, feature = "test-seams"))]
    pub fn with_parts(
        config: SitewardenConfig,
        clock: Arc<dyn Clock>,
        remote: Arc<dyn RemoteValidator>,
    ) -> Result<Self, SitewardenError> {
        config.validate()?;
        Ok(Self::assemble(config, clock, remote))
    }

    fn assemble(
        config: SitewardenConfig,
        clock: Arc<dyn Clock>,
        remote: Arc<dyn RemoteValidator>,
    ) -> Self {
        let cache = ValidationCache::new(config.cache_ttl);
        Self {
            config,
            clock,
            remote,
            cache,
        }
    }

    /// Validate this deployment's license.
    ///
    /// Sequencing:
    /// 1. Enforcement disabled: valid, no checks run.
    /// 2. Development mode: valid, no checks run.
    /// 3. No license key configured: invalid, no checks run.
    /// 4. Cache hit within TTL: cached outcome returned verbatim.
    /// 5. Remote validation; on remote failure, the offline key check
    ///    decides. Either result is cached.
    /// 6. If the remote attempt could not even be constructed, the
    ///    grace-period outcome is returned (and not cached).
    pub fn validate(&self) -> ValidationOutcome {
        if !self.config.licensing_enabled {
            return ValidationOutcome::valid_with(DISABLED_MESSAGE);
        }

        if self.config.dev_mode {
            tracing::info!("development mode, license validation bypassed");
            return ValidationOutcome::valid_with(DEV_MODE_MESSAGE);
        }

        let Some(license_key) = self
            .config
            .license_key
            .as_deref()
            .filter(|k| !k.is_empty())
        else {
            return ValidationOutcome::invalid(NO_KEY_MESSAGE);
        };

        let entry_key = cache_key(license_key, &self.config.domain);
        if let Some(cached) = self.cache.get(&entry_key, self.clock.as_ref()) {
            tracing::debug!(domain = %self.config.domain, "validation served from cache");
            return cached;
        }

        match self.validate_uncached(license_key) {
            Ok(outcome) => {
                self.cache
                    .set(&entry_key, outcome.clone(), self.clock.as_ref());
                outcome
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "license validation unavailable, grace period active"
                );
                ValidationOutcome::grace_period()
            }
        }
    }

    /// Whether the deployment allowance reported by validation still has
    /// room for this deployment.
    pub fn check_deployment_limit(&self) -> bool {
        self.validate().deployments_within_limit()
    }

    /// Current configuration.
    pub fn config(&self) -> &SitewardenConfig {
        &self.config
    }

    /// Remote validation with offline fallback.
    ///
    /// An `Err` from here means the attempt could not be constructed at
    /// all; the caller maps that onto the grace-period outcome.
    fn validate_uncached(&self, license_key: &str) -> Result<ValidationOutcome, SitewardenError> {
        let timestamp = self.clock.now_millis();
        let signature = sign_request(
            license_key,
            &self.config.domain,
            &self.config.agency_id,
            timestamp,
            &self.config.shared_secret,
        )?;

        let request = ValidateRequest {
            license_key: license_key.to_string(),
            domain: self.config.domain.clone(),
            agency_id: self.config.agency_id.clone(),
            timestamp,
            signature,
        };

        match self.remote.validate(&request) {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "remote validation failed, falling back to offline check"
                );
                Ok(self.validate_offline(license_key))
            }
        }
    }

    /// Offline key validation, folded into an outcome.
    fn validate_offline(&self, license_key: &str) -> ValidationOutcome {
        match key::validate(license_key, self.clock.as_ref()) {
            Ok(()) => ValidationOutcome::valid_with("License validated locally"),
            Err(SitewardenError::Expired) => ValidationOutcome::invalid("License has expired"),
            Err(SitewardenError::ChecksumMismatch) => {
                ValidationOutcome::invalid("Invalid license key")
            }
            Err(_) => ValidationOutcome::invalid("Invalid license key format"),
        }
    }
}
