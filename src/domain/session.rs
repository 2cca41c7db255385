//! Hosted verification sessions.
//!
//! Session endpoints emit camelCase keys only, so these two models decode a
//! single naming convention with no snake_case fallback, unlike the rest of
//! the layer. Their serialized form uses the same camelCase keys so output
//! re-decodes cleanly.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::Metadata;
use crate::domain::schema;

#[derive(Debug, Clone, PartialEq)]
/// A hosted verification session the end user is redirected through.
pub struct VerifySession {
    pub id: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
    pub brand_name: Option<String>,
    pub brand_color: Option<String>,
    pub phone: Option<String>,
    pub verification_id: Option<String>,
    pub token: Option<String>,
    pub metadata: Metadata,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl VerifySession {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            url: schema::str_field(raw, &["url"]),
            status: schema::str_field(raw, &["status"]),
            success_url: schema::str_field(raw, &["successUrl"]),
            cancel_url: schema::str_field(raw, &["cancelUrl"]),
            brand_name: schema::str_field(raw, &["brandName"]),
            brand_color: schema::str_field(raw, &["brandColor"]),
            phone: schema::str_field(raw, &["phone"]),
            verification_id: schema::str_field(raw, &["verificationId"]),
            token: schema::str_field(raw, &["token"]),
            metadata: schema::map_field(raw, &["metadata"]),
            expires_at: schema::timestamp_field(raw, &["expiresAt"]),
            created_at: schema::timestamp_field(raw, &["createdAt"]),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "url", &self.url);
        schema::put_str(&mut full, "status", &self.status);
        schema::put_str(&mut full, "successUrl", &self.success_url);
        schema::put_str(&mut full, "cancelUrl", &self.cancel_url);
        schema::put_str(&mut full, "brandName", &self.brand_name);
        schema::put_str(&mut full, "brandColor", &self.brand_color);
        schema::put_str(&mut full, "phone", &self.phone);
        schema::put_str(&mut full, "verificationId", &self.verification_id);
        schema::put_str(&mut full, "token", &self.token);
        schema::put_map(&mut full, "metadata", &self.metadata);
        schema::put_timestamp(&mut full, "expiresAt", &self.expires_at);
        schema::put_timestamp(&mut full, "createdAt", &self.created_at);
        schema::compact(full)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Response of `Sessions::validate`.
pub struct ValidateSessionResponse {
    pub valid: bool,
    pub session_id: Option<String>,
    pub phone: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub metadata: Metadata,
}

impl ValidateSessionResponse {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            valid: schema::bool_field(raw, &["valid"], false),
            session_id: schema::str_field(raw, &["sessionId"]),
            phone: schema::str_field(raw, &["phone"]),
            verified_at: schema::timestamp_field(raw, &["verifiedAt"]),
            metadata: schema::map_field(raw, &["metadata"]),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_bool(&mut full, "valid", self.valid);
        schema::put_str(&mut full, "sessionId", &self.session_id);
        schema::put_str(&mut full, "phone", &self.phone);
        schema::put_timestamp(&mut full, "verifiedAt", &self.verified_at);
        schema::put_map(&mut full, "metadata", &self.metadata);
        schema::compact(full)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_camel_case_keys() {
        let session = VerifySession::from_value(&json!({
            "id": "vs1",
            "url": "https://verify.example/s/vs1",
            "status": "pending",
            "successUrl": "https://app.example/ok",
            "cancelUrl": "https://app.example/cancel",
            "brandName": "Acme",
            "verificationId": "v1",
            "expiresAt": "2024-01-15T10:30:00Z"
        }));
        assert_eq!(session.id.as_deref(), Some("vs1"));
        assert_eq!(session.success_url.as_deref(), Some("https://app.example/ok"));
        assert_eq!(session.brand_name.as_deref(), Some("Acme"));
        assert!(session.expires_at.is_some());
    }

    #[test]
    fn snake_case_keys_are_not_recognized() {
        // Session endpoints use one convention only; no snake_case fallback.
        let session = VerifySession::from_value(&json!({
            "success_url": "https://app.example/ok",
            "brand_name": "Acme"
        }));
        assert_eq!(session.success_url, None);
        assert_eq!(session.brand_name, None);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let session = VerifySession::from_value(&json!({}));
        assert_eq!(session.id, None);
        assert!(session.metadata.is_empty());

        let validated = ValidateSessionResponse::from_value(&json!({}));
        assert!(!validated.valid);
        assert_eq!(validated.session_id, None);
    }

    #[test]
    fn serialization_round_trips_camel_case() {
        let session = VerifySession::from_value(&json!({
            "id": "vs1",
            "successUrl": "https://app.example/ok",
            "createdAt": "2024-01-15T10:30:00Z"
        }));
        let serialized = session.to_value();
        assert_eq!(
            serialized,
            json!({
                "id": "vs1",
                "successUrl": "https://app.example/ok",
                "createdAt": "2024-01-15T10:30:00Z",
                "metadata": {}
            })
        );
        assert_eq!(VerifySession::from_value(&serialized), session);
    }

    #[test]
    fn validate_response_decodes_fields() {
        let validated = ValidateSessionResponse::from_value(&json!({
            "valid": true,
            "sessionId": "vs1",
            "phone": "+15551234567",
            "verifiedAt": "2024-01-15T10:30:00Z",
            "metadata": {"orderId": "o42"}
        }));
        assert!(validated.valid);
        assert_eq!(validated.session_id.as_deref(), Some("vs1"));
        assert_eq!(validated.metadata.get("orderId"), Some(&json!("o42")));
    }
}
