//! Transport layer: request bodies and query strings in the wire's conventions.

mod body;
mod campaigns;
mod contacts;
mod sessions;
mod templates;
mod verify;

pub(crate) use campaigns::{create_campaign_body, list_campaigns_query, update_campaign_body};
pub(crate) use contacts::{
    add_contacts_body, create_contact_body, create_contact_list_body, import_contacts_body,
    list_contact_lists_query, list_contacts_query, update_contact_body, update_contact_list_body,
};
pub(crate) use sessions::{create_session_body, validate_session_body};
pub(crate) use templates::{create_template_body, list_templates_query, update_template_body};
pub(crate) use verify::{check_verification_body, send_verification_body};
