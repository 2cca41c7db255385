//! Domain layer: schema-tolerant models and strong types (no I/O).

mod campaign;
mod contact;
mod media;
mod request;
pub(crate) mod schema;
mod session;
mod template;
mod validation;
mod value;
mod verification;

pub use campaign::{Campaign, CampaignPreview, CampaignStatus, KnownCampaignStatus};
pub use contact::{
    AddedContacts, Contact, ContactList, ContactListRef, ContactPage, ContactRef, ImportOutcome,
};
pub use media::MediaFile;
pub use request::{
    ContactImportEntry, CreateCampaignOptions, CreateContactListOptions, CreateContactOptions,
    CreateSessionOptions, CreateTemplateOptions, ImportContactsOptions, ListCampaignsOptions,
    ListContactListsOptions, ListContactsOptions, ListTemplatesOptions, Patch,
    SendVerificationOptions, UpdateCampaign, UpdateContact, UpdateContactList, UpdateTemplate,
};
pub use session::{ValidateSessionResponse, VerifySession};
pub use template::{KnownTemplateKind, Template, TemplateKind};
pub use validation::ValidationError;
pub use value::{ApiKey, PhoneNumber};
pub use verification::{
    Channel, CheckVerificationResponse, KnownChannel, KnownVerificationStatus,
    SendVerificationResponse, Verification, VerificationStatus,
};

/// Free-form key/value mapping attached to several entities.
///
/// Defaults to empty on decode so callers can iterate without a presence check.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
