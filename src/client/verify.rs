//! Phone verification and hosted session resources.

use super::{ApiClient, TextWaveError};
use crate::domain::{
    CheckVerificationResponse, CreateSessionOptions, SendVerificationOptions,
    SendVerificationResponse, ValidateSessionResponse, VerifySession,
};
use crate::transport;

/// Phone verification (`/verify`).
#[derive(Clone)]
pub struct Verify {
    api: ApiClient,
    sessions: Sessions,
}

impl Verify {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self {
            sessions: Sessions::new(api.clone()),
            api,
        }
    }

    /// Hosted verification sessions, namespaced under verify.
    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    /// Start a verification for `phone`.
    ///
    /// The response carries the generated code only in sandbox/test contexts;
    /// never rely on it being present.
    pub async fn send(
        &self,
        phone: &str,
        options: SendVerificationOptions,
    ) -> Result<SendVerificationResponse, TextWaveError> {
        let body = transport::send_verification_body(phone, &options);
        let raw = self.api.post("/verify", Some(body)).await?;
        Ok(SendVerificationResponse::from_value(&raw))
    }

    /// Check a code against a pending verification.
    pub async fn check(
        &self,
        id: &str,
        code: &str,
    ) -> Result<CheckVerificationResponse, TextWaveError> {
        let body = transport::check_verification_body(code);
        let raw = self
            .api
            .post(&format!("/verify/{id}/check"), Some(body))
            .await?;
        Ok(CheckVerificationResponse::from_value(&raw))
    }
}

/// Hosted verification sessions (`/verify/sessions`).
#[derive(Clone)]
pub struct Sessions {
    api: ApiClient,
}

impl Sessions {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        success_url: &str,
        options: CreateSessionOptions,
    ) -> Result<VerifySession, TextWaveError> {
        let body = transport::create_session_body(success_url, &options);
        let raw = self.api.post("/verify/sessions", Some(body)).await?;
        Ok(VerifySession::from_value(&raw))
    }

    pub async fn validate(&self, token: &str) -> Result<ValidateSessionResponse, TextWaveError> {
        let body = transport::validate_session_body(token);
        let raw = self.api.post("/verify/sessions/validate", Some(body)).await?;
        Ok(ValidateSessionResponse::from_value(&raw))
    }
}
