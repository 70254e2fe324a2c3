//! Configuration Module
//!
//! Handles loading, validating, and updating cache configuration.

use std::env;

use crate::error::{ConfigError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Maximum entry age in milliseconds before it is considered stale
    pub ttl_ms: u64,
    /// Background sweep interval in milliseconds
    pub cleanup_interval_ms: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 24 hours)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Sweep interval in milliseconds (default: 1 hour)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_size),
            ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_ms),
            cleanup_interval_ms: env::var("CACHE_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval_ms),
        }
    }

    /// Validates that every configured bound is positive.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(ConfigError::InvalidMaxSize);
        }
        if self.ttl_ms == 0 {
            return Err(ConfigError::InvalidTtl);
        }
        if self.cleanup_interval_ms == 0 {
            return Err(ConfigError::InvalidCleanupInterval);
        }
        Ok(())
    }

    /// Merges a partial update into this configuration.
    ///
    /// Validates the merged result before applying it, so a rejected update
    /// leaves the configuration unchanged. Existing entries are not purged
    /// or resized retroactively; new bounds apply on subsequent operations.
    pub fn apply_update(&mut self, update: &CacheConfigUpdate) -> Result<()> {
        let merged = Self {
            max_size: update.max_size.unwrap_or(self.max_size),
            ttl_ms: update.ttl_ms.unwrap_or(self.ttl_ms),
            cleanup_interval_ms: update
                .cleanup_interval_ms
                .unwrap_or(self.cleanup_interval_ms),
        };
        merged.validate()?;
        *self = merged;
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            ttl_ms: 24 * 60 * 60 * 1000,
            cleanup_interval_ms: 60 * 60 * 1000,
        }
    }
}

// == Partial Config ==
/// Partial configuration for live updates; unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct CacheConfigUpdate {
    /// New maximum entry count, if supplied
    pub max_size: Option<usize>,
    /// New TTL in milliseconds, if supplied
    pub ttl_ms: Option<u64>,
    /// New sweep interval in milliseconds, if supplied
    pub cleanup_interval_ms: Option<u64>,
}
