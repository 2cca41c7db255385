use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::Metadata;
use crate::domain::schema;

#[derive(Debug, Clone, PartialEq)]
/// A single contact.
pub struct Contact {
    pub id: Option<String>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub metadata: Metadata,
    pub opted_out: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Lists this contact belongs to. `None` when the server omitted the
    /// field, `Some(vec![])` when it sent an empty membership.
    pub lists: Option<Vec<ContactListRef>>,
}

impl Contact {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            phone_number: schema::str_field(raw, &["phone_number", "phoneNumber"]),
            name: schema::str_field(raw, &["name"]),
            email: schema::str_field(raw, &["email"]),
            metadata: schema::map_field(raw, &["metadata"]),
            opted_out: schema::bool_field(raw, &["opted_out", "optedOut"], false),
            created_at: schema::timestamp_field(raw, &["created_at", "createdAt"]),
            updated_at: schema::timestamp_field(raw, &["updated_at", "updatedAt"]),
            lists: schema::array_field(raw, &["lists"])
                .map(|items| items.iter().map(ContactListRef::from_value).collect()),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "phone_number", &self.phone_number);
        schema::put_str(&mut full, "name", &self.name);
        schema::put_str(&mut full, "email", &self.email);
        schema::put_map(&mut full, "metadata", &self.metadata);
        schema::put_bool(&mut full, "opted_out", self.opted_out);
        schema::put_timestamp(&mut full, "created_at", &self.created_at);
        schema::put_timestamp(&mut full, "updated_at", &self.updated_at);
        full.insert(
            "lists".to_owned(),
            self.lists
                .as_ref()
                .map(|lists| Value::Array(lists.iter().map(ContactListRef::to_value).collect()))
                .unwrap_or(Value::Null),
        );
        schema::compact(full)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Minimal list reference embedded in [`Contact::lists`].
pub struct ContactListRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl ContactListRef {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            name: schema::str_field(raw, &["name"]),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "name", &self.name);
        schema::compact(full)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Minimal contact reference embedded in [`ContactList::contacts`].
pub struct ContactRef {
    pub id: Option<String>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ContactRef {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            phone_number: schema::str_field(raw, &["phone_number", "phoneNumber"]),
            name: schema::str_field(raw, &["name"]),
            email: schema::str_field(raw, &["email"]),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "phone_number", &self.phone_number);
        schema::put_str(&mut full, "name", &self.name);
        schema::put_str(&mut full, "email", &self.email);
        schema::compact(full)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A named list of contacts.
pub struct ContactList {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_count: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Member preview, only materialized when the server sent it.
    pub contacts: Option<Vec<ContactRef>>,
    pub contacts_total: Option<i64>,
}

impl ContactList {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            name: schema::str_field(raw, &["name"]),
            description: schema::str_field(raw, &["description"]),
            contact_count: schema::i64_field(raw, &["contact_count", "contactCount"], 0),
            created_at: schema::timestamp_field(raw, &["created_at", "createdAt"]),
            updated_at: schema::timestamp_field(raw, &["updated_at", "updatedAt"]),
            contacts: schema::array_field(raw, &["contacts"])
                .map(|items| items.iter().map(ContactRef::from_value).collect()),
            contacts_total: schema::opt_i64_field(raw, &["contacts_total", "contactsTotal"]),
        }
    }

    /// Decode the `{"lists": [...]}` envelope of the list endpoint.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        schema::value_list_field(raw, &["lists"])
            .iter()
            .map(Self::from_value)
            .collect()
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "name", &self.name);
        schema::put_str(&mut full, "description", &self.description);
        schema::put_i64(&mut full, "contact_count", self.contact_count);
        schema::put_timestamp(&mut full, "created_at", &self.created_at);
        schema::put_timestamp(&mut full, "updated_at", &self.updated_at);
        full.insert(
            "contacts".to_owned(),
            self.contacts
                .as_ref()
                .map(|contacts| Value::Array(contacts.iter().map(ContactRef::to_value).collect()))
                .unwrap_or(Value::Null),
        );
        schema::put_opt_i64(&mut full, "contacts_total", self.contacts_total);
        schema::compact(full)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One page of contacts plus the paging cursor the caller drives iteration with.
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl ContactPage {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            contacts: schema::value_list_field(raw, &["contacts"])
                .iter()
                .map(Contact::from_value)
                .collect(),
            total: schema::i64_field(raw, &["total"], 0),
            limit: schema::i64_field(raw, &["limit"], 0),
            offset: schema::i64_field(raw, &["offset"], 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a bulk contact import.
pub struct ImportOutcome {
    pub imported: i64,
    pub skipped_duplicates: i64,
    /// Per-entry error records, kept raw: their shape is server-owned.
    pub errors: Vec<Value>,
    pub total_errors: i64,
}

impl ImportOutcome {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            imported: schema::i64_field(raw, &["imported"], 0),
            skipped_duplicates: schema::i64_field(
                raw,
                &["skipped_duplicates", "skippedDuplicates"],
                0,
            ),
            errors: schema::value_list_field(raw, &["errors"]),
            total_errors: schema::i64_field(raw, &["total_errors", "totalErrors"], 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of adding contacts to a list.
pub struct AddedContacts {
    pub added_count: i64,
}

impl AddedContacts {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            added_count: schema::i64_field(raw, &["added_count", "addedCount"], 0),
        }
    }
}
