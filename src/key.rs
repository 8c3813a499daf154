//! License key parsing and offline validation.
//!
//! Keys have four dash-separated segments:
//! `<id>-<domain binding>-<base64 expiry>-<checksum>`. The expiry segment
//! is a base64-encoded ISO 8601 date; the checksum covers the first three
//! segments joined by dashes.

use crate::clock::Clock;
use crate::crypto::checksum::key_checksum;
use crate::SitewardenError;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, NaiveDate, Utc};

/// Number of segments in a well-formed key.
const KEY_SEGMENTS: usize = 4;

/// A license key split into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    /// Identifier segment.
    pub id: String,

    /// Domain-binding segment.
    pub domain_binding: String,

    /// Base64-encoded expiry date.
    pub expiry_encoded: String,

    /// Truncated checksum over the first three segments.
    pub checksum: String,
}

impl ParsedKey {
    /// Split a raw key into its segments.
    pub fn parse(key: &str) -> Result<Self, SitewardenError> {
        let parts: Vec<&str> = key.split('-').collect();
        if parts.len() != KEY_SEGMENTS {
            return Err(SitewardenError::InvalidFormat {
                segments: parts.len(),
            });
        }

        Ok(Self {
            id: parts[0].to_string(),
            domain_binding: parts[1].to_string(),
            expiry_encoded: parts[2].to_string(),
            checksum: parts[3].to_string(),
        })
    }

    /// Recompute the checksum the key should carry.
    pub fn expected_checksum(&self) -> String {
        key_checksum(&format!(
            "{}-{}-{}",
            self.id, self.domain_binding, self.expiry_encoded
        ))
    }

    /// Compare the carried checksum against the recomputed one.
    pub fn verify_checksum(&self) -> Result<(), SitewardenError> {
        if self.checksum != self.expected_checksum() {
            return Err(SitewardenError::ChecksumMismatch);
        }
        Ok(())
    }

    /// Whether the key's expiry is in the past.
    ///
    /// A corrupt expiry segment counts as expired. Tampering with the
    /// segment buys nothing: the key stops working instead of erroring.
    pub fn is_expired(&self, clock: &dyn Clock) -> bool {
        match decode_expiry(&self.expiry_encoded) {
            Some(expiry) => clock.now_utc() > expiry,
            None => true,
        }
    }
}

/// Validate a key entirely offline: shape, checksum, expiry.
pub fn validate(key: &str, clock: &dyn Clock) -> Result<(), SitewardenError> {
    let parsed = ParsedKey::parse(key)?;
    parsed.verify_checksum()?;
    if parsed.is_expired(clock) {
        return Err(SitewardenError::Expired);
    }
    Ok(())
}

/// Decode the expiry segment to a UTC instant.
///
/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date
/// (midnight UTC).
fn decode_expiry(encoded: &str) -> Option<DateTime<Utc>> {
    let bytes = STANDARD.decode(encoded).ok()?;
    let text = String::from_utf8(bytes).ok()?;

    if let Ok(instant) = DateTime::parse_from_rfc3339(text.trim()) {
        return Some(instant.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    const NOW: &str = "2026-06-01T00:00:00Z";

    fn encode_expiry(expiry: &str) -> String {
        STANDARD.encode(expiry)
    }

    /// Assemble a key with a correct checksum.
    fn make_key(id: &str, domain: &str, expiry: &str) -> String {
        let body = format!("{}-{}-{}", id, domain, encode_expiry(expiry));
        format!("{}-{}", body, key_checksum(&body))
    }

    #[test]
    fn well_formed_future_key_is_valid() {
        let clock = MockClock::from_rfc3339(NOW);
        let key = make_key("SW1", "examplecom", "2030-01-01T00:00:00Z");
        assert!(validate(&key, &clock).is_ok());
    }

    #[test]
    fn date_only_expiry_is_accepted() {
        let clock = MockClock::from_rfc3339(NOW);
        let key = make_key("SW1", "examplecom", "2030-01-01");
        assert!(validate(&key, &clock).is_ok());
    }

    #[test]
    fn too_few_segments_is_invalid_format() {
        let clock = MockClock::from_rfc3339(NOW);
        let result = validate("SW1-examplecom-MjAzMA==", &clock);
        assert!(matches!(
            result,
            Err(SitewardenError::InvalidFormat { segments: 3 })
        ));
    }

    #[test]
    fn too_many_segments_is_invalid_format() {
        let clock = MockClock::from_rfc3339(NOW);
        let result = validate("SW1-example-com-MjAzMA==-abcd1234", &clock);
        assert!(matches!(
            result,
            Err(SitewardenError::InvalidFormat { segments: 5 })
        ));
    }

    #[test]
    fn wrong_checksum_is_rejected() {
        let clock = MockClock::from_rfc3339(NOW);
        let body = format!("SW1-examplecom-{}", encode_expiry("2030-01-01T00:00:00Z"));
        let key = format!("{}-00000000", body);
        assert!(matches!(
            validate(&key, &clock),
            Err(SitewardenError::ChecksumMismatch)
        ));
    }

    #[test]
    fn wrong_checksum_wins_over_expiry() {
        // Checksum mismatch is reported even when the key is also expired.
        let clock = MockClock::from_rfc3339(NOW);
        let body = format!("SW1-examplecom-{}", encode_expiry("2020-01-01T00:00:00Z"));
        let key = format!("{}-00000000", body);
        assert!(matches!(
            validate(&key, &clock),
            Err(SitewardenError::ChecksumMismatch)
        ));
    }

    #[test]
    fn past_expiry_with_correct_checksum_is_expired() {
        let clock = MockClock::from_rfc3339(NOW);
        let key = make_key("SW1", "examplecom", "2020-01-01T00:00:00Z");
        assert!(matches!(
            validate(&key, &clock),
            Err(SitewardenError::Expired)
        ));
    }

    #[test]
    fn corrupt_expiry_segment_counts_as_expired() {
        // Not base64 at all, but the checksum over it is correct. The key
        // must fail closed as expired, not error out.
        let clock = MockClock::from_rfc3339(NOW);
        let body = "SW1-examplecom-%%%%";
        let key = format!("{}-{}", body, key_checksum(body));
        assert!(matches!(
            validate(&key, &clock),
            Err(SitewardenError::Expired)
        ));
    }

    #[test]
    fn undecodable_date_counts_as_expired() {
        // Valid base64, but the plaintext is not a date.
        let clock = MockClock::from_rfc3339(NOW);
        let key = make_key("SW1", "examplecom", "not a date");
        assert!(matches!(
            validate(&key, &clock),
            Err(SitewardenError::Expired)
        ));
    }

    #[test]
    fn parse_extracts_segments() {
        let key = make_key("SW1", "examplecom", "2030-01-01T00:00:00Z");
        let parsed = ParsedKey::parse(&key).unwrap();
        assert_eq!(parsed.id, "SW1");
        assert_eq!(parsed.domain_binding, "examplecom");
        assert_eq!(parsed.expiry_encoded, encode_expiry("2030-01-01T00:00:00Z"));
        assert_eq!(parsed.checksum, parsed.expected_checksum());
    }
}
