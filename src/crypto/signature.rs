//! Request signing for the licensing endpoint.

use crate::SitewardenError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a validation request.
///
/// HMAC-SHA256 over `key:domain:agencyId:timestamp` with the shared
/// secret, hex-encoded. The caller supplies the same timestamp it puts in
/// the request payload.
pub fn sign_request(
    license_key: &str,
    domain: &str,
    agency_id: &str,
    timestamp_millis: i64,
    secret: &str,
) -> Result<String, SitewardenError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SitewardenError::ConfigError(format!("Invalid signing secret: {}", e)))?;

    let data = format!(
        "{}:{}:{}:{}",
        license_key, domain, agency_id, timestamp_millis
    );
    mac.update(data.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i64 = 1_767_225_600_000;

    #[test]
    fn signature_is_hex_sha256_length() {
        let sig = sign_request("key", "example.com", "agency-1", TS, "secret").unwrap();
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_is_deterministic() {
        let a = sign_request("key", "example.com", "agency-1", TS, "secret").unwrap();
        let b = sign_request("key", "example.com", "agency-1", TS, "secret").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn signature_covers_every_component() {
        let base = sign_request("key", "example.com", "agency-1", TS, "secret").unwrap();

        let other_key = sign_request("key2", "example.com", "agency-1", TS, "secret").unwrap();
        let other_domain = sign_request("key", "other.com", "agency-1", TS, "secret").unwrap();
        let other_agency = sign_request("key", "example.com", "agency-2", TS, "secret").unwrap();
        let other_ts = sign_request("key", "example.com", "agency-1", TS + 1, "secret").unwrap();
        let other_secret = sign_request("key", "example.com", "agency-1", TS, "secret2").unwrap();

        for other in [other_key, other_domain, other_agency, other_ts, other_secret] {
            assert_ne!(base, other);
        }
    }
}
