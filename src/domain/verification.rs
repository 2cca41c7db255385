use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::Metadata;
use crate::domain::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verification lifecycle status as reported by the server.
///
/// The wire string is preserved as-is even when unknown to this crate.
pub struct VerificationStatus(String);

impl VerificationStatus {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The status string as provided by the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this status to a known variant, if one exists.
    pub fn known(&self) -> Option<KnownVerificationStatus> {
        KnownVerificationStatus::from_wire(&self.0)
    }

    pub fn is_pending(&self) -> bool {
        self.known() == Some(KnownVerificationStatus::Pending)
    }

    pub fn is_verified(&self) -> bool {
        self.known() == Some(KnownVerificationStatus::Verified)
    }

    pub fn is_expired(&self) -> bool {
        self.known() == Some(KnownVerificationStatus::Expired)
    }

    pub fn is_failed(&self) -> bool {
        self.known() == Some(KnownVerificationStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known verification statuses supported by this crate.
pub enum KnownVerificationStatus {
    Pending,
    Verified,
    Expired,
    Failed,
}

impl KnownVerificationStatus {
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "pending" => Self::Pending,
            "verified" => Self::Verified,
            "expired" => Self::Expired,
            "failed" => Self::Failed,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery channel for verification codes.
///
/// Unknown wire values are preserved; absent values default to SMS.
pub struct Channel(String);

impl Channel {
    pub fn sms() -> Self {
        Self("sms".to_owned())
    }

    pub fn whatsapp() -> Self {
        Self("whatsapp".to_owned())
    }

    pub fn email() -> Self {
        Self("email".to_owned())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn known(&self) -> Option<KnownChannel> {
        KnownChannel::from_wire(&self.0)
    }

    pub fn is_sms(&self) -> bool {
        self.known() == Some(KnownChannel::Sms)
    }

    pub fn is_whatsapp(&self) -> bool {
        self.known() == Some(KnownChannel::Whatsapp)
    }

    pub fn is_email(&self) -> bool {
        self.known() == Some(KnownChannel::Email)
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::sms()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownChannel {
    Sms,
    Whatsapp,
    Email,
}

impl KnownChannel {
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "sms" => Self::Sms,
            "whatsapp" => Self::Whatsapp,
            "email" => Self::Email,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A phone verification attempt.
pub struct Verification {
    pub id: Option<String>,
    pub status: Option<VerificationStatus>,
    pub phone: Option<String>,
    pub delivery_status: Option<String>,
    pub attempts: i64,
    pub max_attempts: i64,
    pub channel: Channel,
    pub expires_at: Option<DateTime<Utc>>,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub sandbox: bool,
    pub app_name: Option<String>,
    pub template_id: Option<String>,
    pub profile_id: Option<String>,
    pub metadata: Metadata,
}

impl Verification {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            status: schema::str_field(raw, &["status"]).map(VerificationStatus::new),
            phone: schema::str_field(raw, &["phone"]),
            delivery_status: schema::str_field(raw, &["delivery_status", "deliveryStatus"]),
            attempts: schema::i64_field(raw, &["attempts"], 0),
            max_attempts: schema::i64_field(raw, &["max_attempts", "maxAttempts"], 3),
            channel: schema::str_field(raw, &["channel"])
                .map(Channel::new)
                .unwrap_or_default(),
            expires_at: schema::timestamp_field(raw, &["expires_at", "expiresAt"]),
            verified_at: schema::timestamp_field(raw, &["verified_at", "verifiedAt"]),
            created_at: schema::timestamp_field(raw, &["created_at", "createdAt"]),
            sandbox: schema::bool_field(raw, &["sandbox"], false),
            app_name: schema::str_field(raw, &["app_name", "appName"]),
            template_id: schema::str_field(raw, &["template_id", "templateId"]),
            profile_id: schema::str_field(raw, &["profile_id", "profileId"]),
            metadata: schema::map_field(raw, &["metadata"]),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(
            &mut full,
            "status",
            &self.status.as_ref().map(|s| s.as_str().to_owned()),
        );
        schema::put_str(&mut full, "phone", &self.phone);
        schema::put_str(&mut full, "delivery_status", &self.delivery_status);
        schema::put_i64(&mut full, "attempts", self.attempts);
        schema::put_i64(&mut full, "max_attempts", self.max_attempts);
        schema::put_str(&mut full, "channel", &Some(self.channel.as_str().to_owned()));
        schema::put_timestamp(&mut full, "expires_at", &self.expires_at);
        schema::put_timestamp(&mut full, "verified_at", &self.verified_at);
        schema::put_timestamp(&mut full, "created_at", &self.created_at);
        schema::put_bool(&mut full, "sandbox", self.sandbox);
        schema::put_str(&mut full, "app_name", &self.app_name);
        schema::put_str(&mut full, "template_id", &self.template_id);
        schema::put_str(&mut full, "profile_id", &self.profile_id);
        schema::put_map(&mut full, "metadata", &self.metadata);
        schema::compact(full)
    }

    pub fn is_pending(&self) -> bool {
        self.status.as_ref().is_some_and(VerificationStatus::is_pending)
    }

    pub fn is_verified(&self) -> bool {
        self.status.as_ref().is_some_and(VerificationStatus::is_verified)
    }

    pub fn is_expired(&self) -> bool {
        self.status.as_ref().is_some_and(VerificationStatus::is_expired)
    }

    pub fn is_failed(&self) -> bool {
        self.status.as_ref().is_some_and(VerificationStatus::is_failed)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Response of `Verify::send`.
pub struct SendVerificationResponse {
    pub verification: Verification,
    /// Present only in sandbox/test contexts. Never assume it is set.
    pub code: Option<String>,
}

impl SendVerificationResponse {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            verification: Verification::from_value(
                schema::field(raw, &["verification"]).unwrap_or(&Value::Null),
            ),
            code: schema::str_field(raw, &["code"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Response of `Verify::check`.
///
/// `verification` may be absent, e.g. when the check failed outright.
pub struct CheckVerificationResponse {
    pub valid: bool,
    pub status: Option<VerificationStatus>,
    pub verification: Option<Verification>,
}

impl CheckVerificationResponse {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            valid: schema::bool_field(raw, &["valid"], false),
            status: schema::str_field(raw, &["status"]).map(VerificationStatus::new),
            verification: schema::field(raw, &["verification"]).map(Verification::from_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_snake_and_camel_case_identically() {
        let snake = Verification::from_value(&json!({
            "id": "v1",
            "status": "pending",
            "phone": "+15551234567",
            "max_attempts": 5,
            "app_name": "Demo",
            "expires_at": "2024-01-15T10:30:00Z"
        }));
        let camel = Verification::from_value(&json!({
            "id": "v1",
            "status": "pending",
            "phone": "+15551234567",
            "maxAttempts": 5,
            "appName": "Demo",
            "expiresAt": "2024-01-15T10:30:00Z"
        }));
        assert_eq!(snake, camel);
        assert_eq!(snake.max_attempts, 5);
        assert_eq!(snake.app_name.as_deref(), Some("Demo"));
    }

    #[test]
    fn snake_case_wins_when_both_keys_present() {
        let verification = Verification::from_value(&json!({
            "max_attempts": 5,
            "maxAttempts": 9
        }));
        assert_eq!(verification.max_attempts, 5);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let verification = Verification::from_value(&json!({}));
        assert_eq!(verification.id, None);
        assert_eq!(verification.status, None);
        assert_eq!(verification.attempts, 0);
        assert_eq!(verification.max_attempts, 3);
        assert!(verification.channel.is_sms());
        assert!(!verification.sandbox);
        assert!(verification.metadata.is_empty());
        assert!(!verification.is_pending());
    }

    #[test]
    fn status_predicates_are_exclusive() {
        let verification = Verification::from_value(&json!({"status": "verified"}));
        assert!(verification.is_verified());
        assert!(!verification.is_pending());
        assert!(!verification.is_expired());
        assert!(!verification.is_failed());
    }

    #[test]
    fn unknown_status_and_channel_are_preserved() {
        let verification = Verification::from_value(&json!({
            "status": "snoozed",
            "channel": "carrier-pigeon"
        }));
        let status = verification.status.as_ref().unwrap();
        assert_eq!(status.as_str(), "snoozed");
        assert_eq!(status.known(), None);
        assert!(!verification.is_pending() && !verification.is_failed());
        assert_eq!(verification.channel.as_str(), "carrier-pigeon");
        assert_eq!(verification.channel.known(), None);
    }

    #[test]
    fn malformed_expiry_is_absorbed() {
        let verification = Verification::from_value(&json!({
            "id": "v1",
            "expires_at": "not-a-date"
        }));
        assert_eq!(verification.id.as_deref(), Some("v1"));
        assert_eq!(verification.expires_at, None);
    }

    #[test]
    fn serialization_compacts_and_round_trips() {
        let verification = Verification::from_value(&json!({
            "id": "v1",
            "status": "pending",
            "created_at": "2024-01-15T10:30:00Z"
        }));
        let serialized = verification.to_value();
        assert_eq!(
            serialized,
            json!({
                "id": "v1",
                "status": "pending",
                "created_at": "2024-01-15T10:30:00Z",
                "attempts": 0,
                "max_attempts": 3,
                "channel": "sms",
                "sandbox": false,
                "metadata": {}
            })
        );
        assert_eq!(Verification::from_value(&serialized), verification);
    }

    #[test]
    fn send_response_decodes_nested_verification_and_optional_code() {
        let response = SendVerificationResponse::from_value(&json!({
            "verification": {"id": "v1", "status": "pending", "phone": "+15551234567"},
            "code": "123456"
        }));
        assert!(response.verification.is_pending());
        assert_eq!(response.code.as_deref(), Some("123456"));

        let live = SendVerificationResponse::from_value(&json!({
            "verification": {"id": "v2", "status": "pending"}
        }));
        assert_eq!(live.code, None);
    }

    #[test]
    fn check_response_tolerates_missing_verification() {
        let response = CheckVerificationResponse::from_value(&json!({"valid": false}));
        assert!(!response.valid);
        assert_eq!(response.verification, None);

        let response = CheckVerificationResponse::from_value(&json!({
            "valid": true,
            "status": "verified",
            "verification": {"id": "v1", "status": "verified"}
        }));
        assert!(response.valid);
        assert!(response.verification.unwrap().is_verified());
    }
}
