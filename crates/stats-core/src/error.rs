use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the profile stats updater.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The `GH_TOKEN` credential is absent from the environment.
    #[error("GH_TOKEN not found in environment variables")]
    MissingToken,

    /// The API answered with a non-success HTTP status.
    #[error("Query failed with code {0}")]
    QueryStatus(u16),

    /// The API answered 200 but the GraphQL payload carries errors.
    #[error("Query returned errors: {0}")]
    QueryErrors(String),

    /// The API answered 200 with neither data nor errors.
    #[error("Query returned an empty payload")]
    EmptyPayload,

    /// A JSON payload could not be parsed into the expected shape.
    #[error("Failed to parse response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An HTML fragment could not be read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An HTML fragment could not be written back to disk.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;
