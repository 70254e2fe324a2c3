//! Error types for the response cache
//!
//! Provides unified error handling using thiserror.
//!
//! The error surface is deliberately narrow: cache reads and writes never
//! fail (a failed read is a miss, a failed write is a no-op), so the only
//! fallible operations are configuration construction and update.

use thiserror::Error;

// == Config Error Enum ==
/// Validation error for cache configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// max_size must be a positive entry count
    #[error("Invalid max_size: must be greater than zero")]
    InvalidMaxSize,

    /// ttl_ms must be a positive duration
    #[error("Invalid ttl_ms: must be greater than zero")]
    InvalidTtl,

    /// cleanup_interval_ms must be a positive duration
    #[error("Invalid cleanup_interval_ms: must be greater than zero")]
    InvalidCleanupInterval,
}

// == Result Type Alias ==
/// Convenience Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
