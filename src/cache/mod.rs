// Cache module for in-memory response caching.
// Keeps raw GitHub API payloads for a fixed freshness window, keyed by request signature.

pub mod signature;
pub mod store;

pub use signature::{RequestOptions, RequestSignature};
pub use store::{CacheEntry, DEFAULT_TTL, ResponseCache};
