use super::traits::VerificationService;
use crate::domain::verification::{
    entity::{VerificationCheck, VerificationTicket},
    errors::VerificationError,
};
use async_trait::async_trait;

/// Stand-in used when no provider credentials are configured. Every call fails.
pub struct UnconfiguredVerification;

#[async_trait]
impl VerificationService for UnconfiguredVerification {
    async fn send(&self, _phone: &str) -> Result<VerificationTicket, VerificationError> {
        Err(VerificationError::NotConfigured)
    }

    async fn check(
        &self,
        _phone: &str,
        _code: &str,
    ) -> Result<VerificationCheck, VerificationError> {
        Err(VerificationError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
