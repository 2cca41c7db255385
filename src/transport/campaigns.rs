use serde_json::{Map, Value};

use super::body::{
    patch_str, patch_timestamp, push_str, push_str_list, push_timestamp, query_str, query_u32,
};
use crate::domain::{CreateCampaignOptions, ListCampaignsOptions, UpdateCampaign};

pub(crate) fn list_campaigns_query(options: &ListCampaignsOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    query_u32(&mut params, "limit", options.limit);
    query_u32(&mut params, "offset", options.offset);
    query_str(
        &mut params,
        "status",
        options.status.as_ref().map(|status| status.as_str()),
    );
    params
}

pub(crate) fn create_campaign_body(name: &str, text: &str, options: &CreateCampaignOptions) -> Value {
    let mut body = Map::new();
    body.insert("name".to_owned(), Value::String(name.to_owned()));
    body.insert("text".to_owned(), Value::String(text.to_owned()));
    push_str_list(
        &mut body,
        "contactListIds",
        Some(&options.contact_list_ids),
    );
    push_str(&mut body, "templateId", options.template_id.as_deref());
    push_timestamp(&mut body, "scheduledAt", options.scheduled_at.as_ref());
    push_str(&mut body, "timezone", options.timezone.as_deref());
    Value::Object(body)
}

/// `template_id` and `scheduled_at` are nil-sensitive: clearing them detaches
/// the template or unschedules the send, which is distinct from leaving them
/// unchanged.
pub(crate) fn update_campaign_body(update: &UpdateCampaign) -> Value {
    let mut body = Map::new();
    push_str(&mut body, "name", update.name.as_deref());
    push_str(&mut body, "text", update.text.as_deref());
    push_str_list(
        &mut body,
        "contactListIds",
        update.contact_list_ids.as_deref(),
    );
    patch_str(&mut body, "templateId", &update.template_id);
    patch_timestamp(&mut body, "scheduledAt", &update.scheduled_at);
    push_str(&mut body, "timezone", update.timezone.as_deref());
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{CampaignStatus, Patch};
    use crate::domain::schema::parse_timestamp;

    use super::*;

    #[test]
    fn create_body_includes_only_supplied_fields() {
        let body = create_campaign_body("Launch", "We are live!", &CreateCampaignOptions::default());
        assert_eq!(body, json!({"name": "Launch", "text": "We are live!"}));

        let options = CreateCampaignOptions {
            contact_list_ids: vec!["L1".to_owned(), "L2".to_owned()],
            template_id: Some("t1".to_owned()),
            scheduled_at: parse_timestamp("2024-02-01T09:00:00Z"),
            timezone: Some("America/New_York".to_owned()),
        };
        let body = create_campaign_body("Launch", "We are live!", &options);
        assert_eq!(
            body,
            json!({
                "name": "Launch",
                "text": "We are live!",
                "contactListIds": ["L1", "L2"],
                "templateId": "t1",
                "scheduledAt": "2024-02-01T09:00:00Z",
                "timezone": "America/New_York"
            })
        );
    }

    #[test]
    fn update_with_no_arguments_produces_empty_body() {
        assert_eq!(update_campaign_body(&UpdateCampaign::default()), json!({}));
    }

    #[test]
    fn update_clear_includes_explicit_nulls() {
        let body = update_campaign_body(&UpdateCampaign {
            template_id: Patch::Clear,
            scheduled_at: Patch::Clear,
            ..Default::default()
        });
        assert_eq!(body, json!({"templateId": null, "scheduledAt": null}));
    }

    #[test]
    fn update_with_only_name_contains_only_name() {
        let body = update_campaign_body(&UpdateCampaign {
            name: Some("Renamed".to_owned()),
            ..Default::default()
        });
        assert_eq!(body, json!({"name": "Renamed"}));
    }

    #[test]
    fn list_query_includes_status_filter() {
        let params = list_campaigns_query(&ListCampaignsOptions {
            limit: Some(10),
            offset: None,
            status: Some(CampaignStatus::new("scheduled")),
        });
        assert_eq!(
            params,
            vec![
                ("limit".to_owned(), "10".to_owned()),
                ("status".to_owned(), "scheduled".to_owned()),
            ]
        );
    }
}
