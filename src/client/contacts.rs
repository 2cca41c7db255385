//! Contact and contact-list resources.

use serde_json::Value;

use super::{ApiClient, TextWaveError};
use crate::domain::{
    AddedContacts, Contact, ContactImportEntry, ContactList, ContactPage,
    CreateContactListOptions, CreateContactOptions, ImportContactsOptions, ImportOutcome,
    ListContactListsOptions, ListContactsOptions, UpdateContact, UpdateContactList,
};
use crate::transport;

/// Contact management (`/contacts`).
#[derive(Clone)]
pub struct Contacts {
    api: ApiClient,
    lists: ContactLists,
}

impl Contacts {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self {
            lists: ContactLists::new(api.clone()),
            api,
        }
    }

    #[cfg(test)]
    pub(crate) fn core(&self) -> &ApiClient {
        &self.api
    }

    /// Contact-list operations, namespaced under contacts.
    pub fn lists(&self) -> &ContactLists {
        &self.lists
    }

    /// Fetch one page of contacts. The caller drives pagination via
    /// `limit`/`offset`; no fetching loop happens here.
    pub async fn list(&self, options: ListContactsOptions) -> Result<ContactPage, TextWaveError> {
        let raw = self
            .api
            .get("/contacts", transport::list_contacts_query(&options))
            .await?;
        Ok(ContactPage::from_value(&raw))
    }

    pub async fn get(&self, id: &str) -> Result<Contact, TextWaveError> {
        let raw = self.api.get(&format!("/contacts/{id}"), Vec::new()).await?;
        Ok(Contact::from_value(&raw))
    }

    pub async fn create(
        &self,
        phone_number: &str,
        options: CreateContactOptions,
    ) -> Result<Contact, TextWaveError> {
        let body = transport::create_contact_body(phone_number, &options);
        let raw = self.api.post("/contacts", Some(body)).await?;
        Ok(Contact::from_value(&raw))
    }

    /// Update a contact. All fields support clear semantics via
    /// [`Patch`](crate::domain::Patch).
    pub async fn update(&self, id: &str, update: UpdateContact) -> Result<Contact, TextWaveError> {
        let body = transport::update_contact_body(&update);
        let raw = self
            .api
            .patch(&format!("/contacts/{id}"), Some(body))
            .await?;
        Ok(Contact::from_value(&raw))
    }

    /// Delete a contact. Returns the server's raw result: deletions have no
    /// canonical body.
    pub async fn delete(&self, id: &str) -> Result<Value, TextWaveError> {
        self.api.delete(&format!("/contacts/{id}")).await
    }

    /// Bulk-import contacts. Entries are given in this crate's naming
    /// convention and translated to the wire's camelCase on encode.
    pub async fn import_contacts(
        &self,
        entries: &[ContactImportEntry],
        options: ImportContactsOptions,
    ) -> Result<ImportOutcome, TextWaveError> {
        let body = transport::import_contacts_body(entries, &options);
        let raw = self.api.post("/contacts/import", Some(body)).await?;
        Ok(ImportOutcome::from_value(&raw))
    }
}

/// Contact-list management (`/contact-lists`).
#[derive(Clone)]
pub struct ContactLists {
    api: ApiClient,
}

impl ContactLists {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(
        &self,
        options: ListContactListsOptions,
    ) -> Result<Vec<ContactList>, TextWaveError> {
        let raw = self
            .api
            .get("/contact-lists", transport::list_contact_lists_query(&options))
            .await?;
        Ok(ContactList::list_from_value(&raw))
    }

    pub async fn get(&self, id: &str) -> Result<ContactList, TextWaveError> {
        let raw = self
            .api
            .get(&format!("/contact-lists/{id}"), Vec::new())
            .await?;
        Ok(ContactList::from_value(&raw))
    }

    pub async fn create(
        &self,
        name: &str,
        options: CreateContactListOptions,
    ) -> Result<ContactList, TextWaveError> {
        let body = transport::create_contact_list_body(name, &options);
        let raw = self.api.post("/contact-lists", Some(body)).await?;
        Ok(ContactList::from_value(&raw))
    }

    /// Update a list. `description` supports clear semantics; `name` does not.
    pub async fn update(
        &self,
        id: &str,
        update: UpdateContactList,
    ) -> Result<ContactList, TextWaveError> {
        let body = transport::update_contact_list_body(&update);
        let raw = self
            .api
            .patch(&format!("/contact-lists/{id}"), Some(body))
            .await?;
        Ok(ContactList::from_value(&raw))
    }

    pub async fn delete(&self, id: &str) -> Result<Value, TextWaveError> {
        self.api.delete(&format!("/contact-lists/{id}")).await
    }

    pub async fn add_contacts(
        &self,
        id: &str,
        contact_ids: &[String],
    ) -> Result<AddedContacts, TextWaveError> {
        let body = transport::add_contacts_body(contact_ids);
        let raw = self
            .api
            .post(&format!("/contact-lists/{id}/contacts"), Some(body))
            .await?;
        Ok(AddedContacts::from_value(&raw))
    }
}
