//! Error types for catalog loading and target resolution.

use std::path::PathBuf;

/// Errors that can occur while loading catalogs or resolving a target.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error reading catalog files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file not found.
    #[error("catalog file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Board name absent from the board catalog.
    #[error("unknown board '{name}', available boards: {available}")]
    UnknownBoard { name: String, available: String },

    /// Platform name referenced by a board but absent from the platform catalog.
    #[error("unknown platform '{name}', available platforms: {available}")]
    UnknownPlatform { name: String, available: String },

    /// Architecture name referenced by a platform but absent from the
    /// architecture catalog.
    #[error(
        "undefined architecture '{name}' for platform '{platform}', \
         available architectures: {available}"
    )]
    UndefinedArchitecture {
        name: String,
        platform: String,
        available: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
