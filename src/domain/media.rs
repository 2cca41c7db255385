use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::Metadata;
use crate::domain::schema;

#[derive(Debug, Clone, PartialEq)]
/// An uploaded media file.
///
/// The upload response shape is server-owned, so the full mapping is retained
/// as-is; accessors cover the common fields.
pub struct MediaFile {
    raw: Metadata,
}

impl MediaFile {
    pub fn from_value(value: &Value) -> Self {
        Self {
            raw: value.as_object().cloned().unwrap_or_default(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        schema::field(&self.raw, &["id"]).and_then(Value::as_str)
    }

    pub fn url(&self) -> Option<&str> {
        schema::field(&self.raw, &["url"]).and_then(Value::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        schema::field(&self.raw, &["content_type", "contentType"]).and_then(Value::as_str)
    }

    pub fn filename(&self) -> Option<&str> {
        schema::field(&self.raw, &["filename"]).and_then(Value::as_str)
    }

    pub fn size_bytes(&self) -> Option<i64> {
        schema::opt_i64_field(&self.raw, &["size_bytes", "sizeBytes"])
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        schema::timestamp_field(&self.raw, &["created_at", "createdAt"])
    }

    /// Raw access to any response field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.raw.clone())
    }
}
