use serde_json::{Map, Value};

use super::body::{push_map, push_str};
use crate::domain::CreateSessionOptions;

pub(crate) fn create_session_body(success_url: &str, options: &CreateSessionOptions) -> Value {
    let mut body = Map::new();
    body.insert(
        "successUrl".to_owned(),
        Value::String(success_url.to_owned()),
    );
    push_str(&mut body, "cancelUrl", options.cancel_url.as_deref());
    push_str(&mut body, "brandName", options.brand_name.as_deref());
    push_str(&mut body, "brandColor", options.brand_color.as_deref());
    push_str(&mut body, "phone", options.phone.as_deref());
    push_map(&mut body, "metadata", options.metadata.as_ref());
    Value::Object(body)
}

pub(crate) fn validate_session_body(token: &str) -> Value {
    let mut body = Map::new();
    body.insert("token".to_owned(), Value::String(token.to_owned()));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_body_includes_only_supplied_fields() {
        let body = create_session_body("https://app.example/ok", &CreateSessionOptions::default());
        assert_eq!(body, json!({"successUrl": "https://app.example/ok"}));

        let body = create_session_body(
            "https://app.example/ok",
            &CreateSessionOptions {
                cancel_url: Some("https://app.example/cancel".to_owned()),
                brand_name: Some("Acme".to_owned()),
                brand_color: Some("#ff6600".to_owned()),
                phone: None,
                metadata: None,
            },
        );
        assert_eq!(
            body,
            json!({
                "successUrl": "https://app.example/ok",
                "cancelUrl": "https://app.example/cancel",
                "brandName": "Acme",
                "brandColor": "#ff6600"
            })
        );
    }

    #[test]
    fn validate_body_wraps_token() {
        assert_eq!(
            validate_session_body("tok_123"),
            json!({"token": "tok_123"})
        );
    }
}
