//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{SupportMessage, SupportThread};

// ─────────────────────────────────────────────────────────────────────────────
// Auth DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Email/password login body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailPassCredentials {
    pub email: String,
    pub password: String,
}

/// Body for registering a new auth identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterIdentityRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SignupMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupMetadata {
    #[serde(rename = "__signup_extra")]
    pub signup_extra: SignupExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupExtra {
    pub created_at: DateTime<Utc>,
}

impl SignupMetadata {
    pub fn now() -> Self {
        Self {
            signup_extra: SignupExtra {
                created_at: Utc::now(),
            },
        }
    }
}

/// Answer of the login and register routes.
///
/// Third-party providers answer with a redirect location instead of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthResponse {
    Token { token: String },
    Redirect { location: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Support DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadsResponse {
    pub threads: Vec<SupportThread>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<SupportMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub thread: SupportThread,
}

/// The active support thread and its messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub thread: SupportThread,
    pub messages: Vec<SupportMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_token() {
        let resp: AuthResponse = serde_json::from_str(r#"{"token":"jwt"}"#).unwrap();
        assert_eq!(resp, AuthResponse::Token { token: "jwt".into() });
    }

    #[test]
    fn test_auth_response_redirect() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"location":"https://idp.example.com"}"#).unwrap();
        assert!(matches!(resp, AuthResponse::Redirect { .. }));
    }

    #[test]
    fn test_register_identity_wire_format() {
        let req = RegisterIdentityRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            metadata: Some(SignupMetadata::now()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["confirmPassword"], "pw");
        assert!(json["metadata"]["__signup_extra"]["created_at"].is_string());
    }
}
