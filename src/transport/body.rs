//! Request-body and query-string normalization primitives.
//!
//! Two omission policies exist, and they are not interchangeable:
//!
//! - `push_*`: presence-omission. The key is included only when the caller
//!   supplied a value that is neither absent nor empty/falsy. `None`,
//!   `Some("")`, `Some(false)`, `Some(0)`, and empty maps/lists all omit the
//!   key, because for these fields "not specified" and "explicitly empty" are
//!   indistinguishable to the server.
//! - `patch_*`: nil-sensitive inclusion, driven by [`Patch`]. `Keep` omits,
//!   `Clear` sends JSON `null`, and `Set` always sends the value, even when it
//!   is empty, false, or zero. Used for the fields that support "clear this
//!   field" distinct from "leave unchanged".

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::schema::format_timestamp;
use crate::domain::{Metadata, Patch};

pub(crate) fn push_str(body: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            body.insert(key.to_owned(), Value::String(value.to_owned()));
        }
    }
}

pub(crate) fn push_u32(body: &mut Map<String, Value>, key: &str, value: Option<u32>) {
    if let Some(value) = value {
        if value != 0 {
            body.insert(key.to_owned(), Value::from(value));
        }
    }
}

pub(crate) fn push_bool(body: &mut Map<String, Value>, key: &str, value: Option<bool>) {
    if value == Some(true) {
        body.insert(key.to_owned(), Value::Bool(true));
    }
}

pub(crate) fn push_map(body: &mut Map<String, Value>, key: &str, value: Option<&Metadata>) {
    if let Some(value) = value {
        if !value.is_empty() {
            body.insert(key.to_owned(), Value::Object(value.clone()));
        }
    }
}

pub(crate) fn push_str_list(body: &mut Map<String, Value>, key: &str, value: Option<&[String]>) {
    if let Some(value) = value {
        if !value.is_empty() {
            body.insert(
                key.to_owned(),
                Value::Array(value.iter().cloned().map(Value::String).collect()),
            );
        }
    }
}

pub(crate) fn push_timestamp(
    body: &mut Map<String, Value>,
    key: &str,
    value: Option<&DateTime<Utc>>,
) {
    if let Some(value) = value {
        body.insert(key.to_owned(), Value::String(format_timestamp(value)));
    }
}

pub(crate) fn patch_str(body: &mut Map<String, Value>, key: &str, value: &Patch<String>) {
    match value {
        Patch::Keep => {}
        Patch::Clear => {
            body.insert(key.to_owned(), Value::Null);
        }
        Patch::Set(value) => {
            body.insert(key.to_owned(), Value::String(value.clone()));
        }
    }
}

pub(crate) fn patch_bool(body: &mut Map<String, Value>, key: &str, value: &Patch<bool>) {
    match value {
        Patch::Keep => {}
        Patch::Clear => {
            body.insert(key.to_owned(), Value::Null);
        }
        Patch::Set(value) => {
            body.insert(key.to_owned(), Value::Bool(*value));
        }
    }
}

pub(crate) fn patch_map(body: &mut Map<String, Value>, key: &str, value: &Patch<Metadata>) {
    match value {
        Patch::Keep => {}
        Patch::Clear => {
            body.insert(key.to_owned(), Value::Null);
        }
        Patch::Set(value) => {
            body.insert(key.to_owned(), Value::Object(value.clone()));
        }
    }
}

pub(crate) fn patch_timestamp(
    body: &mut Map<String, Value>,
    key: &str,
    value: &Patch<DateTime<Utc>>,
) {
    match value {
        Patch::Keep => {}
        Patch::Clear => {
            body.insert(key.to_owned(), Value::Null);
        }
        Patch::Set(value) => {
            body.insert(key.to_owned(), Value::String(format_timestamp(value)));
        }
    }
}

pub(crate) fn query_str(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            params.push((key.to_owned(), value.to_owned()));
        }
    }
}

pub(crate) fn query_u32(params: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value {
        if value != 0 {
            params.push((key.to_owned(), value.to_string()));
        }
    }
}
