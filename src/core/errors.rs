use std::path::PathBuf;

/// All domain errors for ShiftSwap.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ShiftSwapError {
    #[error(
        "Invalid request: missing or malformed {}\n\n  \
         All of --from, --to, --with and --reason are required.\n  \
         Dates must look like ISO datetime, e.g. 2026-01-12T07:00",
        fields.join(", ")
    )]
    Validation { fields: Vec<String> },

    #[error(
        "No request found with id: {id}\n\n  \
         Run 'shiftswap list' to see existing requests."
    )]
    NotFound { id: String },

    #[error(
        "Data file is corrupt: {path}\n  {detail}\n\n  \
         Expected a JSON document of the form {{\"requests\": [...]}}.\n  \
         Fix or remove the file; a missing file is recreated empty."
    )]
    CorruptData { path: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShiftSwapError>;
