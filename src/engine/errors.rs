//! Error types for the sorting engine

use thiserror::Error;

/// Errors produced while selecting or running an algorithm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The key does not name one of the six catalog algorithms
    #[error(
        "unknown algorithm '{key}' (expected one of: bubble, selection, insertion, merge, quick, heap)"
    )]
    UnknownAlgorithm { key: String },
}
