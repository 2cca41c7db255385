use chrono::{DateTime, Utc};

use crate::domain::Metadata;
use crate::domain::campaign::CampaignStatus;
use crate::domain::verification::Channel;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Tri-state update field: distinguishes "leave unchanged" from "clear on the
/// server" from "set to a value".
///
/// Fields typed `Patch` support clear semantics: `Clear` serializes the key as
/// JSON `null`, and `Set` always includes the key, even for empty or falsy
/// values. `Keep` omits the key entirely.
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListContactsOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
    pub list_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateContactOptions {
    pub name: Option<String>,
    pub email: Option<String>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default)]
/// Update payload for a contact. All three fields support clear semantics.
pub struct UpdateContact {
    pub name: Patch<String>,
    pub email: Patch<String>,
    pub metadata: Patch<Metadata>,
}

#[derive(Debug, Clone)]
/// One entry of a bulk contact import, in the caller's naming convention.
/// The wire rename (`opted_in_at` → `optedInAt`) happens at encode time.
pub struct ContactImportEntry {
    pub phone: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub opted_in_at: Option<String>,
}

impl ContactImportEntry {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            name: None,
            email: None,
            opted_in_at: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImportContactsOptions {
    pub list_id: Option<String>,
    pub opted_in_at: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListContactListsOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateContactListOptions {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Update payload for a contact list. `description` supports clear semantics;
/// `name` does not (an empty name is indistinguishable from "unchanged").
pub struct UpdateContactList {
    pub name: Option<String>,
    pub description: Patch<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SendVerificationOptions {
    pub channel: Option<Channel>,
    pub code_length: Option<u32>,
    pub expires_in: Option<u32>,
    pub max_attempts: Option<u32>,
    pub template_id: Option<String>,
    pub profile_id: Option<String>,
    pub app_name: Option<String>,
    pub locale: Option<String>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateSessionOptions {
    pub cancel_url: Option<String>,
    pub brand_name: Option<String>,
    pub brand_color: Option<String>,
    pub phone: Option<String>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default)]
pub struct ListTemplatesOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTemplateOptions {
    pub locale: Option<String>,
    pub is_published: Patch<bool>,
}

#[derive(Debug, Clone, Default)]
/// Update payload for a template. `is_published` is tri-state so an explicit
/// `Set(false)` unpublishes rather than being dropped as falsy.
pub struct UpdateTemplate {
    pub name: Option<String>,
    pub body: Option<String>,
    pub locale: Option<String>,
    pub is_published: Patch<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ListCampaignsOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<CampaignStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateCampaignOptions {
    pub contact_list_ids: Vec<String>,
    pub template_id: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Update payload for a campaign. `template_id` and `scheduled_at` support
/// clear semantics (detach the template, unschedule the send).
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub text: Option<String>,
    pub contact_list_ids: Option<Vec<String>>,
    pub template_id: Patch<String>,
    pub scheduled_at: Patch<DateTime<Utc>>,
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_defaults_to_keep() {
        let update = UpdateCampaign::default();
        assert!(update.template_id.is_keep());
        assert!(update.scheduled_at.is_keep());
        assert_eq!(Patch::<String>::default(), Patch::Keep);
    }
}
