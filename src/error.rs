use thiserror::Error;

/// Result type for name service operations.
pub type Result<T> = std::result::Result<T, NameError>;

/// Errors that can occur while pulling names from the name service.
#[derive(Debug, Error)]
pub enum NameError {
    /// The fetch to the name service failed (connection error, non-success
    /// status, or timeout). Propagated verbatim from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The name service responded but the parsed batch was empty. This is a
    /// service-level anomaly, not a network fault.
    #[error("name service at {url} returned no names")]
    EmptyBatch {
        /// URL of the endpoint that returned the empty batch
        url: String,
    },

    /// The requested name kind is not in the fixed enumeration. Purely
    /// local, no I/O attempted.
    #[error("unknown name kind: {0}")]
    UnknownKind(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}
