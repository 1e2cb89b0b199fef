use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Twilio not configured")]
    NotConfigured,
    /// The provider answered with an error; `message` is its own wording.
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
}
