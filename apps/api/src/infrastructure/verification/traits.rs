use crate::domain::verification::{
    entity::{VerificationCheck, VerificationTicket},
    errors::VerificationError,
};
use async_trait::async_trait;

/// A phone-verification provider that delivers one-time codes and checks them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Starts a verification by sending a code to `phone` over SMS.
    async fn send(&self, phone: &str) -> Result<VerificationTicket, VerificationError>;

    /// Checks `code` against the pending verification for `phone`.
    async fn check(&self, phone: &str, code: &str)
    -> Result<VerificationCheck, VerificationError>;

    fn is_configured(&self) -> bool;
}
