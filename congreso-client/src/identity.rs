//! Identity provider client
//!
//! Account creation against the external authentication backend. The only
//! provider error the import flow branches on is "email already in use",
//! so it is a first-class variant; everything else is a rejection carrying
//! the provider's message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provider error code for an email that is already registered
const EMAIL_EXISTS: &str = "EMAIL_EXISTS";
/// Marker some SDK layers wrap the same condition in
const EMAIL_IN_USE_MARKER: &str = "email-already-in-use";

/// Identity provider error type
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The email is already registered with the provider
    #[error("email already in use")]
    EmailAlreadyInUse,

    /// The provider rejected the signup for another reason
    #[error("identity provider rejected signup: {0}")]
    Rejected(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl IdentityError {
    /// Map a provider error message to the typed variant. The substring
    /// check covers SDK-wrapped spellings of the same condition.
    pub fn from_provider_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(EMAIL_EXISTS) || message.contains(EMAIL_IN_USE_MARKER) {
            IdentityError::EmailAlreadyInUse
        } else {
            IdentityError::Rejected(message)
        }
    }
}

/// Creates authentication principals from email/password pairs
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a principal; returns the provider's opaque uid
    async fn create_identity(&self, email: &str, password: &str) -> Result<String, IdentityError>;
}

#[async_trait]
impl<T: IdentityProvider + ?Sized> IdentityProvider for std::sync::Arc<T> {
    async fn create_identity(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        (**self).create_identity(email, password).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

/// Identity Toolkit REST client (`accounts:signUp`)
#[derive(Debug, Clone)]
pub struct FirebaseIdentity {
    client: reqwest::Client,
    signup_url: String,
    api_key: String,
}

impl FirebaseIdentity {
    pub const DEFAULT_SIGNUP_URL: &'static str =
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp";

    pub fn new(api_key: impl Into<String>) -> Result<Self, IdentityError> {
        Self::with_endpoint(Self::DEFAULT_SIGNUP_URL, api_key)
    }

    /// Point at a non-default endpoint (emulator, test server)
    pub fn with_endpoint(
        signup_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            signup_url: signup_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentity {
    async fn create_identity(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        let request = SignUpRequest {
            email,
            password,
            return_secure_token: true,
        };
        let resp = self
            .client
            .post(&self.signup_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return match serde_json::from_str::<ProviderErrorBody>(&text) {
                Ok(body) => Err(IdentityError::from_provider_message(body.error.message)),
                Err(_) => Err(IdentityError::Rejected(format!("HTTP {status}: {text}"))),
            };
        }

        let body: SignUpResponse = serde_json::from_str(&text)
            .map_err(|e| IdentityError::InvalidResponse(format!("signUp response: {e}")))?;
        Ok(body.local_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_exists_code_is_typed() {
        assert!(matches!(
            IdentityError::from_provider_message("EMAIL_EXISTS"),
            IdentityError::EmailAlreadyInUse
        ));
    }

    #[test]
    fn test_sdk_wrapped_marker_is_typed() {
        assert!(matches!(
            IdentityError::from_provider_message("Firebase: Error (auth/email-already-in-use)."),
            IdentityError::EmailAlreadyInUse
        ));
    }

    #[test]
    fn test_other_codes_are_rejections() {
        assert!(matches!(
            IdentityError::from_provider_message("WEAK_PASSWORD : Password should be at least 6 characters"),
            IdentityError::Rejected(_)
        ));
    }
}
