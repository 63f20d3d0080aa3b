// Cache store for raw API payloads.
// Handles TTL checking and last-write-wins replacement of entries.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

use super::signature::RequestSignature;

/// Default freshness window: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached payload and the moment it was stored.
///
/// Age is measured on the monotonic clock, so wall-clock adjustments never extend or
/// shorten the freshness window.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub data: Value,
    pub cached_at: Instant,
}

impl CacheEntry {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
        }
    }

    /// Check if this entry is older than the TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() > ttl
    }

    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// In-memory response cache owned by a single client.
///
/// Expired entries are never removed; they are simply replaced by the next `set` for
/// the same signature. The lock is only held for the map operation itself.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<RequestSignature, CacheEntry>>,
    ttl: Duration,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Raw lookup, regardless of age.
    pub fn get(&self, signature: &RequestSignature) -> Option<CacheEntry> {
        self.lock().get(signature).cloned()
    }

    /// Store `data` stamped with the current time.
    pub fn set(&self, signature: RequestSignature, data: Value) {
        let _ = self.lock().insert(signature, CacheEntry::new(data));
    }

    /// Payload for `signature` if it was stored within the freshness window.
    pub fn read_if_valid(&self, signature: &RequestSignature) -> Option<Value> {
        match self.get(signature) {
            Some(entry) if entry.is_valid(self.ttl) => Some(entry.data),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<RequestSignature, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
