//! Errors raised while building or loading navigation configuration.
//!
//! Resolution itself never fails: an unmatched path is a normal
//! [`ResolvedMatch`](crate::ResolvedMatch). Only configuration can be
//! rejected, either because it could not be read/parsed or because it breaks
//! one of the tree's invariants.
//!
//! # Examples
//!
//! ```
//! use sams_navigator::{ConfigError, NavigationConfig, NavigationEntry};
//!
//! let config = NavigationConfig::new()
//!     .section(NavigationEntry::new("home", "Home").path("/home"))
//!     .section(NavigationEntry::new("home", "Home again").path("/home2"));
//!
//! let err = config.validate().unwrap_err();
//! assert!(matches!(err, ConfigError::DuplicateId { .. }));
//! assert_eq!(err.to_string(), "Duplicate navigation entry id: home");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read navigation config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON config could not be parsed
    #[cfg(feature = "serde")]
    #[error("Invalid JSON navigation config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config could not be parsed
    #[cfg(feature = "serde")]
    #[error("Invalid TOML navigation config: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither `.json` nor `.toml`
    #[error("Unsupported navigation config format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Entry has an empty id
    #[error("Navigation entry with title '{title}' has an empty id")]
    EmptyId { title: String },

    /// Two entries (at any level) share an id
    #[error("Duplicate navigation entry id: {id}")]
    DuplicateId { id: String },

    /// Entry has an empty title
    #[error("Navigation entry '{id}' has an empty title")]
    EmptyTitle { id: String },

    /// Internal entry path does not start with '/'
    #[error("Navigation entry '{id}' has relative path '{path}'")]
    RelativePath { id: String, path: String },

    /// Resolution cache created with zero capacity
    #[error("Resolution cache capacity must be non-zero")]
    ZeroCapacity,
}
