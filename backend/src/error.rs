//! Error taxonomy for the generator core
//!
//! Every failure is local to the one operation that produced it. Nothing
//! here is retried automatically; callers branch on the variant (e.g. treat
//! `Io` on load as "no prior state" but stop on `CorruptState`).

use thiserror::Error;

/// Errors produced by registry lookups, generators, state codecs and I/O
#[derive(Debug, Error)]
pub enum RngError {
    /// Requested algorithm name is not in the registry
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Serialized state is tagged for a different algorithm than the target
    #[error("Algorithm mismatch: generator is '{expected}', state is tagged '{found}'")]
    AlgorithmMismatch { expected: String, found: String },

    /// Payload size or shape is invalid for the claimed algorithm
    #[error("Corrupt state: {0}")]
    CorruptState(String),

    /// Open/read/write/flush failure at the storage boundary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bound passed to a ranged draw is outside what the generator can produce
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Generator is pinned at a fixed point and cannot produce the request
    #[error("Degenerate state: {0}")]
    DegenerateState(String),

    /// Generator configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, RngError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RngError = io.into();
        assert!(matches!(err, RngError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_mismatch_message_names_both_algorithms() {
        let err = RngError::AlgorithmMismatch {
            expected: "taus".to_string(),
            found: "mt19937".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("taus"));
        assert!(msg.contains("mt19937"));
    }
}
