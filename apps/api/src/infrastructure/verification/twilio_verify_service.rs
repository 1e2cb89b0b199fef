use super::traits::VerificationService;
use crate::domain::verification::{
    entity::{VerificationCheck, VerificationTicket},
    errors::VerificationError,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://verify.twilio.com";

#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    message: Option<String>,
    code: Option<i64>,
}

/// Twilio Verify v2 client sending codes over SMS.
pub struct TwilioVerifyService {
    client: Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
    service_sid: String,
}

impl TwilioVerifyService {
    pub fn new(
        api_base: String,
        account_sid: String,
        auth_token: String,
        service_sid: String,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            account_sid,
            auth_token,
            service_sid,
        })
    }

    fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/v2/Services/{}/{}",
            self.api_base, self.service_sid, resource
        )
    }

    async fn post<T: DeserializeOwned>(
        &self,
        resource: &str,
        form: &[(&str, &str)],
    ) -> Result<T, VerificationError> {
        let response = self
            .client
            .post(self.endpoint(resource))
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(form)
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| VerificationError::Transport(format!("Unexpected provider response: {}", e)))
    }
}

async fn provider_error(response: Response) -> VerificationError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = parse_error_message(&body)
        .unwrap_or_else(|| format!("Verification provider returned HTTP {}", status));
    warn!(provider_status = status, "Verification provider error: {}", message);
    VerificationError::Provider { status, message }
}

fn parse_error_message(body: &str) -> Option<String> {
    let parsed: TwilioErrorBody = serde_json::from_str(body).ok()?;
    if let Some(code) = parsed.code {
        debug!(twilio_error_code = code);
    }
    parsed.message.filter(|m| !m.is_empty())
}

#[async_trait]
impl VerificationService for TwilioVerifyService {
    async fn send(&self, phone: &str) -> Result<VerificationTicket, VerificationError> {
        self.post("Verifications", &[("To", phone), ("Channel", "sms")])
            .await
    }

    async fn check(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationCheck, VerificationError> {
        self.post("VerificationCheck", &[("To", phone), ("Code", code)])
            .await
    }

    fn is_configured(&self) -> bool {
        true
    }
}
