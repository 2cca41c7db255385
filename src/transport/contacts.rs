use serde_json::{Map, Value};

use super::body::{
    patch_map, patch_str, push_map, push_str, push_str_list, query_str, query_u32,
};
use crate::domain::{
    ContactImportEntry, CreateContactListOptions, CreateContactOptions, ImportContactsOptions,
    ListContactListsOptions, ListContactsOptions, UpdateContact, UpdateContactList,
};

pub(crate) fn list_contacts_query(options: &ListContactsOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    query_u32(&mut params, "limit", options.limit);
    query_u32(&mut params, "offset", options.offset);
    query_str(&mut params, "search", options.search.as_deref());
    query_str(&mut params, "listId", options.list_id.as_deref());
    params
}

pub(crate) fn create_contact_body(phone_number: &str, options: &CreateContactOptions) -> Value {
    let mut body = Map::new();
    body.insert(
        "phoneNumber".to_owned(),
        Value::String(phone_number.to_owned()),
    );
    push_str(&mut body, "name", options.name.as_deref());
    push_str(&mut body, "email", options.email.as_deref());
    push_map(&mut body, "metadata", options.metadata.as_ref());
    Value::Object(body)
}

pub(crate) fn update_contact_body(update: &UpdateContact) -> Value {
    let mut body = Map::new();
    patch_str(&mut body, "name", &update.name);
    patch_str(&mut body, "email", &update.email);
    patch_map(&mut body, "metadata", &update.metadata);
    Value::Object(body)
}

/// Entries arrive in the caller's convention and leave in the wire's:
/// `opted_in_at` becomes `optedInAt`, `list_id` becomes `listId`. This is the
/// one encoder that renames keys instead of merely selecting them.
pub(crate) fn import_contacts_body(
    entries: &[ContactImportEntry],
    options: &ImportContactsOptions,
) -> Value {
    let contacts = entries
        .iter()
        .map(|entry| {
            let mut wire = Map::new();
            wire.insert("phone".to_owned(), Value::String(entry.phone.clone()));
            push_str(&mut wire, "name", entry.name.as_deref());
            push_str(&mut wire, "email", entry.email.as_deref());
            push_str(&mut wire, "optedInAt", entry.opted_in_at.as_deref());
            Value::Object(wire)
        })
        .collect();

    let mut body = Map::new();
    body.insert("contacts".to_owned(), Value::Array(contacts));
    push_str(&mut body, "listId", options.list_id.as_deref());
    push_str(&mut body, "optedInAt", options.opted_in_at.as_deref());
    Value::Object(body)
}

pub(crate) fn list_contact_lists_query(options: &ListContactListsOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    query_u32(&mut params, "limit", options.limit);
    query_u32(&mut params, "offset", options.offset);
    params
}

pub(crate) fn create_contact_list_body(name: &str, options: &CreateContactListOptions) -> Value {
    let mut body = Map::new();
    body.insert("name".to_owned(), Value::String(name.to_owned()));
    push_str(&mut body, "description", options.description.as_deref());
    Value::Object(body)
}

/// `name` is presence-omitted, `description` is nil-sensitive: a list
/// description can be cleared, a name cannot.
pub(crate) fn update_contact_list_body(update: &UpdateContactList) -> Value {
    let mut body = Map::new();
    push_str(&mut body, "name", update.name.as_deref());
    patch_str(&mut body, "description", &update.description);
    Value::Object(body)
}

pub(crate) fn add_contacts_body(contact_ids: &[String]) -> Value {
    let mut body = Map::new();
    push_str_list(&mut body, "contactIds", Some(contact_ids));
    Value::Object(body)
}
