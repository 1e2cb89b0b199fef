use thiserror::Error;

/// Failures of a single composite request. None of them are retried.
#[derive(Debug, Error)]
pub enum CompositeError {
    /// The photo payload is missing, not a data URL, or cannot be decoded.
    #[error("{0}")]
    InvalidInput(String),
    /// The overlay asset is absent on the server.
    #[error("{0}")]
    MissingAsset(String),
    /// Decoding the asset, blending, or encoding the output failed.
    #[error("{0}")]
    Processing(String),
    /// The encoded output could not be persisted.
    #[error("{0}")]
    Storage(String),
}
