//! Verification template resource.

use serde_json::Value;

use super::{ApiClient, TextWaveError};
use crate::domain::{CreateTemplateOptions, ListTemplatesOptions, Template, UpdateTemplate};
use crate::transport;

/// Verification message templates (`/verify/templates`).
#[derive(Clone)]
pub struct Templates {
    api: ApiClient,
}

impl Templates {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, options: ListTemplatesOptions) -> Result<Vec<Template>, TextWaveError> {
        let raw = self
            .api
            .get("/verify/templates", transport::list_templates_query(&options))
            .await?;
        Ok(Template::list_from_value(&raw))
    }

    pub async fn get(&self, id: &str) -> Result<Template, TextWaveError> {
        let raw = self
            .api
            .get(&format!("/verify/templates/{id}"), Vec::new())
            .await?;
        Ok(Template::from_value(&raw))
    }

    pub async fn create(
        &self,
        name: &str,
        body: &str,
        options: CreateTemplateOptions,
    ) -> Result<Template, TextWaveError> {
        let payload = transport::create_template_body(name, body, &options);
        let raw = self.api.post("/verify/templates", Some(payload)).await?;
        Ok(Template::from_value(&raw))
    }

    /// Update a template. `is_published` is tri-state: `Set(false)`
    /// unpublishes, `Keep` leaves it untouched.
    pub async fn update(&self, id: &str, update: UpdateTemplate) -> Result<Template, TextWaveError> {
        let payload = transport::update_template_body(&update);
        let raw = self
            .api
            .patch(&format!("/verify/templates/{id}"), Some(payload))
            .await?;
        Ok(Template::from_value(&raw))
    }

    pub async fn delete(&self, id: &str) -> Result<Value, TextWaveError> {
        self.api.delete(&format!("/verify/templates/{id}")).await
    }
}
