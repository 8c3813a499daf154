//! Process-lifetime cache of validation outcomes.
//!
//! One entry per (license key, domain) pair — in practice one per
//! deployment. Entries are never evicted; a stale entry is ignored on
//! lookup and overwritten by the next store.

use crate::clock::Clock;
use crate::protocol::models::ValidationOutcome;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Build the cache key for a (license key, domain) pair.
pub fn cache_key(license_key: &str, domain: &str) -> String {
    format!("{}-{}", license_key, domain)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: ValidationOutcome,
    stored_at: DateTime<Utc>,
}

/// Mutex-guarded TTL cache.
///
/// Shared across concurrent request handlers. Two validations may race
/// between lookup and store; the worst case is a redundant remote call
/// writing an equivalent fresh entry.
#[derive(Debug)]
pub struct ValidationCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ValidationCache {
    /// Create an empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up a fresh entry. Entries at or past the TTL behave as a miss.
    pub fn get(&self, key: &str, clock: &dyn Clock) -> Option<ValidationOutcome> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;

        let age = clock.now_utc().signed_duration_since(entry.stored_at);
        match age.to_std() {
            Ok(age) if age < self.ttl => Some(entry.outcome.clone()),
            Ok(_) => None,
            // Negative age: the entry was stored "in the future" relative
            // to this clock reading. Still fresh.
            Err(_) => Some(entry.outcome.clone()),
        }
    }

    /// Store an outcome, overwriting any previous entry for the key.
    pub fn set(&self, key: &str, outcome: ValidationOutcome, clock: &dyn Clock) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    outcome,
                    stored_at: clock.now_utc(),
                },
            );
        }
    }
}
