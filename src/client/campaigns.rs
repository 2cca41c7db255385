//! Campaign resource.

use serde_json::Value;

use super::{ApiClient, TextWaveError};
use crate::domain::{
    Campaign, CampaignPreview, CreateCampaignOptions, ListCampaignsOptions, UpdateCampaign,
};
use crate::transport;

/// Bulk messaging campaigns (`/campaigns`).
#[derive(Clone)]
pub struct Campaigns {
    api: ApiClient,
}

impl Campaigns {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, options: ListCampaignsOptions) -> Result<Vec<Campaign>, TextWaveError> {
        let raw = self
            .api
            .get("/campaigns", transport::list_campaigns_query(&options))
            .await?;
        Ok(Campaign::list_from_value(&raw))
    }

    pub async fn get(&self, id: &str) -> Result<Campaign, TextWaveError> {
        let raw = self.api.get(&format!("/campaigns/{id}"), Vec::new()).await?;
        Ok(Campaign::from_value(&raw))
    }

    pub async fn create(
        &self,
        name: &str,
        text: &str,
        options: CreateCampaignOptions,
    ) -> Result<Campaign, TextWaveError> {
        let body = transport::create_campaign_body(name, text, &options);
        let raw = self.api.post("/campaigns", Some(body)).await?;
        Ok(Campaign::from_value(&raw))
    }

    /// Update a campaign. `template_id` and `scheduled_at` support clear
    /// semantics via [`Patch`](crate::domain::Patch).
    pub async fn update(&self, id: &str, update: UpdateCampaign) -> Result<Campaign, TextWaveError> {
        let body = transport::update_campaign_body(&update);
        let raw = self
            .api
            .patch(&format!("/campaigns/{id}"), Some(body))
            .await?;
        Ok(Campaign::from_value(&raw))
    }

    pub async fn delete(&self, id: &str) -> Result<Value, TextWaveError> {
        self.api.delete(&format!("/campaigns/{id}")).await
    }

    /// Estimate audience size and credit cost without sending.
    pub async fn preview(&self, id: &str) -> Result<CampaignPreview, TextWaveError> {
        let raw = self
            .api
            .post(&format!("/campaigns/{id}/preview"), None)
            .await?;
        Ok(CampaignPreview::from_value(&raw))
    }

    /// Start sending immediately, regardless of schedule.
    pub async fn send_now(&self, id: &str) -> Result<Campaign, TextWaveError> {
        let raw = self.api.post(&format!("/campaigns/{id}/send"), None).await?;
        Ok(Campaign::from_value(&raw))
    }

    pub async fn pause(&self, id: &str) -> Result<Campaign, TextWaveError> {
        let raw = self
            .api
            .post(&format!("/campaigns/{id}/pause"), None)
            .await?;
        Ok(Campaign::from_value(&raw))
    }

    pub async fn cancel(&self, id: &str) -> Result<Campaign, TextWaveError> {
        let raw = self
            .api
            .post(&format!("/campaigns/{id}/cancel"), None)
            .await?;
        Ok(Campaign::from_value(&raw))
    }
}
