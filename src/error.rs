use std::path::PathBuf;

/// Errors surfaced by dataset loading, configuration and label lookups.
///
/// Degenerate supports and the iteration cap are not errors: the former
/// rejects a single rule, the latter is reported as a `MiningWarning`.
#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("unable to open transaction source {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no item owns position {0}")]
    UnknownItem(usize),

    #[error("item label '{0}' was never added")]
    UnknownLabel(String),

    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AprioriError>;
