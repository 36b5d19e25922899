use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the allocation categorizer.
///
/// Parsing and aggregation are infallible by contract: malformed input
/// degrades to the `Unknown` bucket and never surfaces here. These
/// variants cover the surrounding machinery only.
#[derive(Error, Debug)]
pub enum CategorizerError {
    /// An input file passed via `--input` could not be read.
    #[error("Failed to read input file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the allocsum crates.
pub type Result<T> = std::result::Result<T, CategorizerError>;
