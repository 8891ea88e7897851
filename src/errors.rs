use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("Failed to read corpus {path}: {source}")]
    CorpusReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invocation count must be at least 1")]
    InvalidInvocations,

    #[error("Mutability must be a finite number \u{2265} 0 (got {value})")]
    InvalidMutability { value: f64 },

    #[error("Failed to create sample log {path}: {source}")]
    LogCreateError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write sample log {path}: {source}")]
    LogWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
