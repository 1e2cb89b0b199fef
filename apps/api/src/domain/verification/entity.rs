use serde::{Deserialize, Serialize};

/// Status the provider reports for a correct code.
pub const APPROVED_STATUS: &str = "approved";

/// A code delivery started by the verification provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationTicket {
    pub sid: String,
    pub status: String,
}

/// The provider's verdict on a submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCheck {
    pub status: String,
}

impl VerificationCheck {
    pub fn is_approved(&self) -> bool {
        self.status == APPROVED_STATUS
    }
}
