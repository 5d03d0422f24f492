//! Error types for build-context construction.

/// Errors that can occur while building the per-process context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// A second build context was created in the same process.
    #[error("build context already created")]
    AlreadyInitialized,

    /// Neither the environment variable nor the compiled-in constant is set.
    #[error("undefined toolchain constant {name}")]
    UndefinedToolchainConstant { name: &'static str },

    /// The external toolchain query could not produce a library path.
    ///
    /// This is the one failure that originates outside the process's own
    /// configuration data.
    #[error("toolchain query failed: `{command}`: {detail}")]
    ToolchainQueryFailed { command: String, detail: String },

    /// Catalog loading or target resolution failure.
    #[error(transparent)]
    Target(#[from] forge_targets::TargetError),

    /// I/O error from path creation, discovery, or tracking.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for context operations.
pub type Result<T> = std::result::Result<T, ContextError>;
