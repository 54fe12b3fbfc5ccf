//! Import configuration, read from environment variables
//!
//! The organization and event the batch registers against are runtime
//! configuration, never inlined constants: the same binary serves every
//! event.

use crate::batch::ImportOptions;
use congreso_client::FirebaseIdentity;
use std::time::Duration;

/// Default pause before each identity-provider signup, tuned to stay under
/// the provider's account-creation rate limit.
const DEFAULT_SIGNUP_DELAY_MS: u64 = 1000;

/// congreso-import configuration, from environment variables
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Conference API base URL
    pub api_base_url: String,
    /// Bearer token for the conference API
    pub api_token: Option<String>,
    /// Identity provider signUp endpoint
    pub identity_signup_url: String,
    /// Identity provider API key
    pub identity_api_key: String,
    /// Organization new members are created under
    pub organization_id: String,
    /// Event every attendance record is keyed to
    pub event_id: String,
    /// Pause before each identity-provider signup
    pub signup_delay: Duration,
}

impl ImportConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("CONGRESO_API_URL")
                .expect("CONGRESO_API_URL must be set"),
            api_token: std::env::var("CONGRESO_API_TOKEN").ok(),
            identity_signup_url: std::env::var("CONGRESO_IDENTITY_SIGNUP_URL")
                .unwrap_or_else(|_| FirebaseIdentity::DEFAULT_SIGNUP_URL.to_string()),
            identity_api_key: std::env::var("CONGRESO_IDENTITY_API_KEY")
                .expect("CONGRESO_IDENTITY_API_KEY must be set"),
            organization_id: std::env::var("CONGRESO_ORGANIZATION_ID")
                .expect("CONGRESO_ORGANIZATION_ID must be set"),
            event_id: std::env::var("CONGRESO_EVENT_ID").expect("CONGRESO_EVENT_ID must be set"),
            signup_delay: Duration::from_millis(
                std::env::var("CONGRESO_SIGNUP_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SIGNUP_DELAY_MS),
            ),
        }
    }

    /// Options handed to the batch engine
    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            organization_id: self.organization_id.clone(),
            event_id: self.event_id.clone(),
            signup_delay: self.signup_delay,
        }
    }
}
