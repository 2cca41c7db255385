//! Typed Rust client for the TextWave messaging & verification HTTP API.
//!
//! The design is split into three layers: a domain layer of schema-tolerant
//! models (the server emits snake_case or camelCase field names depending on
//! API version; models accept both, snake_case taking precedence), a transport
//! layer for wire-format quirks (optional request fields are omitted, a few
//! update fields support explicit clearing), and a client layer orchestrating
//! requests per resource.
//!
//! ```rust,no_run
//! use textwave::{ApiKey, SendVerificationOptions, TextWaveClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textwave::TextWaveError> {
//!     let client = TextWaveClient::new(ApiKey::new("...")?);
//!     let sent = client
//!         .verify()
//!         .send("+15551234567", SendVerificationOptions::default())
//!         .await?;
//!     println!("verification id: {:?}", sent.verification.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Campaigns, ContactLists, Contacts, Media, Sessions, Templates, TextWaveClient,
    TextWaveClientBuilder, TextWaveError, Verify,
};
pub use domain::{
    AddedContacts, ApiKey, Campaign, CampaignPreview, CampaignStatus, Channel,
    CheckVerificationResponse, Contact, ContactImportEntry, ContactList, ContactListRef,
    ContactPage, ContactRef, CreateCampaignOptions, CreateContactListOptions,
    CreateContactOptions, CreateSessionOptions, CreateTemplateOptions, ImportContactsOptions,
    ImportOutcome, KnownCampaignStatus, KnownChannel, KnownTemplateKind,
    KnownVerificationStatus, ListCampaignsOptions, ListContactListsOptions, ListContactsOptions,
    ListTemplatesOptions, MediaFile, Metadata, Patch, PhoneNumber, SendVerificationOptions,
    SendVerificationResponse, Template, TemplateKind, UpdateCampaign, UpdateContact,
    UpdateContactList, UpdateTemplate, ValidateSessionResponse, ValidationError, Verification,
    VerificationStatus, VerifySession,
};
