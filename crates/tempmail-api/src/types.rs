//! Wire types for the backend JSON API.
//!
//! Field names follow the server's camelCase JSON; Rust-side naming is
//! snake_case via `rename_all`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope every endpoint uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the server considers the request successful.
    pub success: bool,
    /// Human-readable status or error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Endpoint-specific payload.
    #[serde(default)]
    pub data: Option<T>,
}

/// Authenticated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned user id.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Disposable addresses issued at the account level.
    #[serde(default)]
    pub temp_emails: Vec<String>,
}

/// A message in the inbox or outbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned message id.
    pub id: String,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Whether the server has marked the message read.
    #[serde(default)]
    pub is_read: bool,
    /// True for sent mail (outbox), false for received (inbox).
    #[serde(default)]
    pub is_outbound: bool,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}

/// AI-generated compose suggestion. Purely advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Suggested subject line.
    pub subject: String,
    /// Suggested body text.
    pub body: String,
}

/// Payload returned by signup and login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    /// The authenticated user record.
    pub user: User,
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
}

/// Payload of `GET auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserData {
    pub user: User,
}

/// Payload of `POST email/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TempEmailData {
    pub temp_email: String,
}

/// Payload of the inbox/outbox listings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessagesData {
    pub emails: Vec<Message>,
}

/// Payload of `GET email/:id` and `POST email/send`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageData {
    pub email: Message,
}

/// Body of `POST auth/signup`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

/// Body of `POST auth/login`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of the endpoints keyed on an email address alone.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}

/// Body of `POST auth/verify-otp`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OtpRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

/// Body of `POST auth/reset-password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub new_password: &'a str,
}

/// Body of `POST email/send`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
}

/// Body of `POST email/generate-ai`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PromptRequest<'a> {
    pub prompt: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_with_data() {
        let json = r#"{"success":true,"data":{"tempEmail":"abc@x.com"}}"#;
        let envelope: Envelope<TempEmailData> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert_eq!(envelope.data.unwrap().temp_email, "abc@x.com");
    }

    #[test]
    fn envelope_failure_with_message() {
        let json = r#"{"success":false,"message":"Invalid credentials"}"#;
        let envelope: Envelope<AuthData> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn user_camel_case_fields() {
        let json = r#"{"id":"u1","email":"a@b.com","name":"Ann","tempEmails":["x@y.com"]}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.temp_emails, vec!["x@y.com"]);
    }

    #[test]
    fn user_temp_emails_default_empty() {
        let json = r#"{"id":"u1","email":"a@b.com","name":"Ann"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.temp_emails.is_empty());
    }

    #[test]
    fn message_camel_case_fields() {
        let json = r#"{
            "id":"m1","from":"a@x.com","to":"b@y.com",
            "subject":"hi","body":"hello",
            "isRead":true,"isOutbound":false,
            "createdAt":"2024-05-01T12:00:00Z"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(message.is_read);
        assert!(!message.is_outbound);
        assert_eq!(message.created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn reset_password_request_wire_name() {
        let body = ResetPasswordRequest {
            email: "a@b.com",
            new_password: "secret123",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"newPassword\""));
    }

    #[test]
    fn user_round_trip() {
        let user = User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "Ann".to_string(),
            temp_emails: vec!["x@y.com".to_string()],
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"tempEmails\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
