//! # Sitewarden
//!
//! **Deployment license validation and request gating for generated sites.**
//!
//! Sitewarden decides, once per request, whether a site deployment is
//! licensed to serve. It validates the deployment's license key against a
//! remote licensing endpoint, falls back to an offline format check when
//! the endpoint is unreachable, and caches the verdict for an hour.
//!
//! ## Features
//!
//! - **Signed remote validation** — requests carry an HMAC-SHA256
//!   signature over key, domain, agency, and timestamp
//! - **Offline fallback** — segment, expiry, and checksum checks run
//!   locally when the endpoint is down
//! - **Hour-long result cache** — one remote call per deployment per hour
//! - **Fail-open grace period** — a licensing outage never takes a
//!   deployment down; the verdict degrades to a soft-valid with a warning
//! - **Request gate** — invalid verdicts become a fixed 403 page, valid
//!   ones forward untouched
//!
//! ## Quickstart
//!
//! ```no_run
//! use sitewarden::{gate_request, GateDecision, LicenseManager, SitewardenConfig};
//!
//! fn main() -> Result<(), sitewarden::SitewardenError> {
//!     let config = SitewardenConfig::from_env();
//!     let manager = LicenseManager::new(config)?;
//!
//!     // Per request:
//!     let outcome = manager.validate();
//!     match gate_request(&outcome) {
//!         GateDecision::Forward => { /* serve the request */ }
//!         GateDecision::Block(page) => {
//!             // answer with page.status and page.body
//!             let _ = page;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure policy
//!
//! No call in this crate panics into the request handler or returns an
//! error from the per-request path. Remote failures resolve to the
//! offline check; if even that cannot be attempted, the verdict is the
//! grace-period outcome (valid, with a warning message). Hard failures —
//! no key, bad format, expired, checksum mismatch — are the only verdicts
//! the gate turns into a 403.
//!
//! The offline checksum is a truncated keyed hash acting as a tamper
//! deterrent, not a security boundary; the remote endpoint is the
//! authoritative check.
//!
//! ## Configuration
//!
//! See [`SitewardenConfig::from_env`] for the recognized environment
//! variables. A deployment without a license key starts fine and is
//! blocked at the gate; a deployment with `SITEWARDEN_DISABLED` set
//! skips enforcement entirely.

#![deny(warnings)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/sitewarden/0.1.0")]

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Crypto layer
pub mod crypto;

// Key format layer
pub mod key;

// Protocol layer
pub mod protocol;

// Client layer
pub mod client;

// Cache layer
pub mod cache;

// Gate layer
pub mod gate;

// Manager (main public API)
pub mod manager;

// Re-exports for public API
pub use clock::{Clock, SystemClock};
pub use client::RemoteValidator;
pub use config::SitewardenConfig;
pub use errors::SitewardenError;
pub use gate::{gate_request, BlockedPage, GateDecision};
pub use manager::LicenseManager;
pub use protocol::models::ValidationOutcome;

#[cfg(any(test, feature = "test-seams"))]
pub use clock::MockClock;
