use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::Metadata;
use crate::domain::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign lifecycle status as reported by the server.
///
/// The wire string is preserved as-is even when unknown to this crate.
pub struct CampaignStatus(String);

impl CampaignStatus {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn known(&self) -> Option<KnownCampaignStatus> {
        KnownCampaignStatus::from_wire(&self.0)
    }

    pub fn is_draft(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Draft)
    }

    pub fn is_scheduled(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Scheduled)
    }

    pub fn is_sending(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Sending)
    }

    pub fn is_sent(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Sent)
    }

    pub fn is_paused(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Paused)
    }

    pub fn is_cancelled(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Cancelled)
    }

    pub fn is_failed(&self) -> bool {
        self.known() == Some(KnownCampaignStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownCampaignStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Paused,
    Cancelled,
    Failed,
}

impl KnownCampaignStatus {
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "draft" => Self::Draft,
            "scheduled" => Self::Scheduled,
            "sending" => Self::Sending,
            "sent" => Self::Sent,
            "paused" => Self::Paused,
            "cancelled" => Self::Cancelled,
            "failed" => Self::Failed,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A bulk messaging campaign.
pub struct Campaign {
    pub id: Option<String>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub template_id: Option<String>,
    pub contact_list_ids: Vec<String>,
    pub status: Option<CampaignStatus>,
    pub recipient_count: i64,
    pub sent_count: i64,
    pub delivered_count: i64,
    pub failed_count: i64,
    pub estimated_credits: f64,
    pub credits_used: f64,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub timezone: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Campaign {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            name: schema::str_field(raw, &["name"]),
            text: schema::str_field(raw, &["text"]),
            template_id: schema::str_field(raw, &["template_id", "templateId"]),
            contact_list_ids: schema::str_list_field(raw, &["contact_list_ids", "contactListIds"]),
            status: schema::str_field(raw, &["status"]).map(CampaignStatus::new),
            recipient_count: schema::i64_field(raw, &["recipient_count", "recipientCount"], 0),
            sent_count: schema::i64_field(raw, &["sent_count", "sentCount"], 0),
            delivered_count: schema::i64_field(raw, &["delivered_count", "deliveredCount"], 0),
            failed_count: schema::i64_field(raw, &["failed_count", "failedCount"], 0),
            estimated_credits: schema::f64_field(raw, &["estimated_credits", "estimatedCredits"], 0.0),
            credits_used: schema::f64_field(raw, &["credits_used", "creditsUsed"], 0.0),
            scheduled_at: schema::timestamp_field(raw, &["scheduled_at", "scheduledAt"]),
            timezone: schema::str_field(raw, &["timezone"]),
            started_at: schema::timestamp_field(raw, &["started_at", "startedAt"]),
            completed_at: schema::timestamp_field(raw, &["completed_at", "completedAt"]),
            created_at: schema::timestamp_field(raw, &["created_at", "createdAt"]),
            updated_at: schema::timestamp_field(raw, &["updated_at", "updatedAt"]),
        }
    }

    /// Decode the `{"campaigns": [...]}` envelope of the list endpoint.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        schema::value_list_field(raw, &["campaigns"])
            .iter()
            .map(Self::from_value)
            .collect()
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_str(&mut full, "name", &self.name);
        schema::put_str(&mut full, "text", &self.text);
        schema::put_str(&mut full, "template_id", &self.template_id);
        schema::put_str_list(&mut full, "contact_list_ids", &self.contact_list_ids);
        schema::put_str(
            &mut full,
            "status",
            &self.status.as_ref().map(|s| s.as_str().to_owned()),
        );
        schema::put_i64(&mut full, "recipient_count", self.recipient_count);
        schema::put_i64(&mut full, "sent_count", self.sent_count);
        schema::put_i64(&mut full, "delivered_count", self.delivered_count);
        schema::put_i64(&mut full, "failed_count", self.failed_count);
        schema::put_f64(&mut full, "estimated_credits", self.estimated_credits);
        schema::put_f64(&mut full, "credits_used", self.credits_used);
        schema::put_timestamp(&mut full, "scheduled_at", &self.scheduled_at);
        schema::put_str(&mut full, "timezone", &self.timezone);
        schema::put_timestamp(&mut full, "started_at", &self.started_at);
        schema::put_timestamp(&mut full, "completed_at", &self.completed_at);
        schema::put_timestamp(&mut full, "created_at", &self.created_at);
        schema::put_timestamp(&mut full, "updated_at", &self.updated_at);
        schema::compact(full)
    }

    pub fn is_draft(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_draft)
    }

    pub fn is_scheduled(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_scheduled)
    }

    pub fn is_sending(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_sending)
    }

    pub fn is_sent(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_sent)
    }

    pub fn is_paused(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_paused)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_cancelled)
    }

    pub fn is_failed(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_failed)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Cost and audience estimate for a campaign before sending.
pub struct CampaignPreview {
    pub id: Option<String>,
    pub recipient_count: i64,
    pub estimated_segments: i64,
    pub estimated_credits: f64,
    pub current_balance: f64,
    pub has_enough_credits: bool,
    pub breakdown: Option<Metadata>,
}

impl CampaignPreview {
    pub fn from_value(value: &Value) -> Self {
        let empty = Metadata::new();
        let raw = value.as_object().unwrap_or(&empty);
        Self {
            id: schema::str_field(raw, &["id"]),
            recipient_count: schema::i64_field(raw, &["recipient_count", "recipientCount"], 0),
            estimated_segments: schema::i64_field(
                raw,
                &["estimated_segments", "estimatedSegments"],
                0,
            ),
            estimated_credits: schema::f64_field(raw, &["estimated_credits", "estimatedCredits"], 0.0),
            current_balance: schema::f64_field(raw, &["current_balance", "currentBalance"], 0.0),
            has_enough_credits: schema::bool_field(
                raw,
                &["has_enough_credits", "hasEnoughCredits"],
                false,
            ),
            breakdown: schema::opt_map_field(raw, &["breakdown"]),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut full = Map::new();
        schema::put_str(&mut full, "id", &self.id);
        schema::put_i64(&mut full, "recipient_count", self.recipient_count);
        schema::put_i64(&mut full, "estimated_segments", self.estimated_segments);
        schema::put_f64(&mut full, "estimated_credits", self.estimated_credits);
        schema::put_f64(&mut full, "current_balance", self.current_balance);
        schema::put_bool(&mut full, "has_enough_credits", self.has_enough_credits);
        schema::put_opt_map(&mut full, "breakdown", &self.breakdown);
        schema::compact(full)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_snake_and_camel_case_identically() {
        let snake = Campaign::from_value(&json!({
            "id": "cp1",
            "template_id": "t1",
            "contact_list_ids": ["L1", "L2"],
            "recipient_count": 120,
            "estimated_credits": 12.5,
            "scheduled_at": "2024-02-01T09:00:00Z"
        }));
        let camel = Campaign::from_value(&json!({
            "id": "cp1",
            "templateId": "t1",
            "contactListIds": ["L1", "L2"],
            "recipientCount": 120,
            "estimatedCredits": 12.5,
            "scheduledAt": "2024-02-01T09:00:00Z"
        }));
        assert_eq!(snake, camel);
        assert_eq!(snake.contact_list_ids, vec!["L1", "L2"]);
        assert_eq!(snake.recipient_count, 120);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let campaign = Campaign::from_value(&json!({}));
        assert_eq!(campaign.id, None);
        assert_eq!(campaign.status, None);
        assert!(campaign.contact_list_ids.is_empty());
        assert_eq!(campaign.recipient_count, 0);
        assert_eq!(campaign.credits_used, 0.0);
        assert!(!campaign.is_draft());
    }

    #[test]
    fn status_predicates_are_exclusive() {
        let campaign = Campaign::from_value(&json!({"status": "sent"}));
        assert!(campaign.is_sent());
        assert!(!campaign.is_draft());
        assert!(!campaign.is_scheduled());
        assert!(!campaign.is_sending());
        assert!(!campaign.is_paused());
        assert!(!campaign.is_cancelled());
        assert!(!campaign.is_failed());
    }

    #[test]
    fn unknown_status_is_preserved() {
        let campaign = Campaign::from_value(&json!({"status": "archived"}));
        let status = campaign.status.as_ref().unwrap();
        assert_eq!(status.as_str(), "archived");
        assert_eq!(status.known(), None);
        assert!(!campaign.is_sent());
    }

    #[test]
    fn serialization_compacts_and_round_trips() {
        let campaign = Campaign::from_value(&json!({
            "id": "cp1",
            "status": "draft",
            "contactListIds": ["L1"]
        }));
        let serialized = campaign.to_value();
        assert_eq!(
            serialized,
            json!({
                "id": "cp1",
                "status": "draft",
                "contact_list_ids": ["L1"],
                "recipient_count": 0,
                "sent_count": 0,
                "delivered_count": 0,
                "failed_count": 0,
                "estimated_credits": 0.0,
                "credits_used": 0.0
            })
        );
        assert_eq!(Campaign::from_value(&serialized), campaign);
    }

    #[test]
    fn preview_decodes_both_conventions_and_breakdown() {
        let preview = CampaignPreview::from_value(&json!({
            "id": "cp1",
            "recipientCount": 1000,
            "estimatedSegments": 2,
            "estimatedCredits": 20.0,
            "currentBalance": 12.5,
            "hasEnoughCredits": false,
            "breakdown": {"US": 800, "CA": 200}
        }));
        assert_eq!(preview.recipient_count, 1000);
        assert_eq!(preview.estimated_segments, 2);
        assert!(!preview.has_enough_credits);
        assert_eq!(preview.breakdown.as_ref().unwrap().len(), 2);

        let defaults = CampaignPreview::from_value(&json!({}));
        assert_eq!(defaults.recipient_count, 0);
        assert!(!defaults.has_enough_credits);
        assert_eq!(defaults.breakdown, None);
    }

    #[test]
    fn list_envelope_decodes() {
        let campaigns = Campaign::list_from_value(&json!({
            "campaigns": [{"id": "cp1"}, {"id": "cp2"}]
        }));
        assert_eq!(campaigns.len(), 2);
    }
}
