//! Cache Key Module
//!
//! Derives deterministic, content-based cache keys from query text.

use sha2::{Digest, Sha256};

// == Query Hash ==
/// Computes the cache key for a query: lowercase hex SHA-256 of the text.
///
/// The key depends only on the query content, so identical queries always
/// map to the same entry regardless of when or where they were issued.
pub fn query_hash(query: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(query.as_bytes());
    format!("{:x}", hasher.finalize())
}
