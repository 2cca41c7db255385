use serde_json::{Map, Value};

use super::body::{push_map, push_str, push_u32};
use crate::domain::SendVerificationOptions;

pub(crate) fn send_verification_body(phone: &str, options: &SendVerificationOptions) -> Value {
    let mut body = Map::new();
    body.insert("phone".to_owned(), Value::String(phone.to_owned()));
    push_str(
        &mut body,
        "channel",
        options.channel.as_ref().map(|channel| channel.as_str()),
    );
    push_u32(&mut body, "codeLength", options.code_length);
    push_u32(&mut body, "expiresIn", options.expires_in);
    push_u32(&mut body, "maxAttempts", options.max_attempts);
    push_str(&mut body, "templateId", options.template_id.as_deref());
    push_str(&mut body, "profileId", options.profile_id.as_deref());
    push_str(&mut body, "appName", options.app_name.as_deref());
    push_str(&mut body, "locale", options.locale.as_deref());
    push_map(&mut body, "metadata", options.metadata.as_ref());
    Value::Object(body)
}

pub(crate) fn check_verification_body(code: &str) -> Value {
    let mut body = Map::new();
    body.insert("code".to_owned(), Value::String(code.to_owned()));
    Value::Object(body)
}
