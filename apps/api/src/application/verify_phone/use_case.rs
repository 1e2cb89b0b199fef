use crate::{
    domain::verification::{entity::VerificationTicket, errors::VerificationError},
    infrastructure::verification::traits::VerificationService,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Outcome of checking a submitted code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeCheckOutcome {
    Approved,
    /// Provider answered but did not approve; carries its status (`pending`, `canceled`, ...).
    Rejected { status: String },
}

pub struct VerifyPhoneUseCase {
    provider: Arc<dyn VerificationService>,
}

impl VerifyPhoneUseCase {
    pub fn new(provider: Arc<dyn VerificationService>) -> Self {
        Self { provider }
    }

    #[instrument(skip(self, phone), fields(phone = %mask_phone(phone)))]
    pub async fn send_code(&self, phone: &str) -> Result<VerificationTicket, VerificationError> {
        let ticket = self.provider.send(phone).await?;
        info!("Verification {} started with status {}", ticket.sid, ticket.status);
        Ok(ticket)
    }

    #[instrument(skip(self, phone, code), fields(phone = %mask_phone(phone)))]
    pub async fn check_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<CodeCheckOutcome, VerificationError> {
        let check = self.provider.check(phone, code).await?;
        if check.is_approved() {
            info!("Phone verified");
            Ok(CodeCheckOutcome::Approved)
        } else {
            warn!("Verification check returned {}", check.status);
            Ok(CodeCheckOutcome::Rejected {
                status: check.status,
            })
        }
    }
}

/// Keeps only the last four digits for logs.
fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
