use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::Metadata;
use crate::domain::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template kind (`type` on the wire). Unknown values are preserved; absent
/// values default to custom.
pub struct TemplateKind(String);

impl TemplateKind {
    pub fn preset() -> Self {
        Self("preset".to_owned())
    }

    pub fn custom() -> Self {
        Self("custom".to_owned())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn known(&self) -> Option<KnownTemplateKind> {
        KnownTemplateKind::from_wire(&self.0)
    }

    pub fn is_preset(&self) -> bool {
        self.known() == Some(KnownTemplateKind::Preset)
    }

    pub fn is_custom(&self) -> bool {
        self.known() == Some(KnownTemplateKind::Custom)
    }
}

impl Default for TemplateKind {
    fn default() -> Self {
        Self::custom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownTemplateKind {
    Preset,
    Custom,
}

impl KnownTemplateKind {
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "preset" => Self::Preset,
            "custom" => Self::Custom,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A reusable verification message template.
pub struct Template {
    pub id: Option<String>,
    pub name: Option<String>,
    pub body: Option<String>,
    pub kind: TemplateKind,
    pub locale: Option<String>,
    pub variables: Vec<String>,
    pub is_default: bool,
    pub is_published: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            name: schema::str_field(raw, &["name"]),
            body: schema::str_field(raw, &["body"]),
            kind: schema::str_field(raw, &["type"])
                .map(TemplateKind::new)
                .unwrap_or_default(),
            locale: schema::str_field(raw, &["locale"]),
            variables: schema::str_list_field(raw, &["variables"]),
            is_default: schema::bool_field(raw, &["is_default", "isDefault"], false),
            is_published: schema::bool_field(raw, &["is_published", "isPublished"], false),
            created_at: schema::timestamp_field(raw, &["created_at", "createdAt"]),
            updated_at: schema::timestamp_field(raw, &["updated_at", "updatedAt"]),
        }
    }

    /// Decode the `{"templates": [...]}` envelope of the list endpoint.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        schema::value_list_field(raw, &["templates"])
            .iter()
            .map(Self::from_value)
            .collect()
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "name", &self.name);
        schema::put_str(&mut full, "body", &self.body);
        schema::put_str(&mut full, "type", &Some(self.kind.as_str().to_owned()));
        schema::put_str(&mut full, "locale", &self.locale);
        schema::put_str_list(&mut full, "variables", &self.variables);
        schema::put_bool(&mut full, "is_default", self.is_default);
        schema::put_bool(&mut full, "is_published", self.is_published);
        schema::put_timestamp(&mut full, "created_at", &self.created_at);
        schema::put_timestamp(&mut full, "updated_at", &self.updated_at);
        schema::compact(full)
    }
}
