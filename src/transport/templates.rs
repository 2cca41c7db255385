use serde_json::{Map, Value};

use super::body::{patch_bool, push_str, query_u32};
use crate::domain::{CreateTemplateOptions, ListTemplatesOptions, UpdateTemplate};

pub(crate) fn list_templates_query(options: &ListTemplatesOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    query_u32(&mut params, "limit", options.limit);
    query_u32(&mut params, "offset", options.offset);
    params
}

pub(crate) fn create_template_body(
    name: &str,
    template_body: &str,
    options: &CreateTemplateOptions,
) -> Value {
    let mut body = Map::new();
    body.insert("name".to_owned(), Value::String(name.to_owned()));
    body.insert("body".to_owned(), Value::String(template_body.to_owned()));
    push_str(&mut body, "locale", options.locale.as_deref());
    patch_bool(&mut body, "isPublished", &options.is_published);
    Value::Object(body)
}

/// `is_published` is tri-state so `Set(false)` unpublishes instead of being
/// dropped as falsy.
pub(crate) fn update_template_body(update: &UpdateTemplate) -> Value {
    let mut body = Map::new();
    push_str(&mut body, "name", update.name.as_deref());
    push_str(&mut body, "body", update.body.as_deref());
    push_str(&mut body, "locale", update.locale.as_deref());
    patch_bool(&mut body, "isPublished", &update.is_published);
    Value::Object(body)
}
