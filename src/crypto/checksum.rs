//! License key checksum computation.

use md5::{Digest, Md5};

/// Number of hex characters kept from the digest.
const CHECKSUM_LEN: usize = 8;

/// Compute the checksum segment for the given key material.
///
/// MD5, hex-encoded, truncated to 8 characters — the format license keys
/// are issued with. This is a tamper deterrent for the offline fallback
/// only; the remote endpoint remains the authoritative check.
pub fn key_checksum(data: &str) -> String {
    let digest = Md5::digest(data.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(CHECKSUM_LEN);
    encoded
}
