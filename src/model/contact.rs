//! Contact records and the draft collected by the add dialog

use crate::error::{ContactError, ContactField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A single address-book entry
///
/// Contacts are immutable once created. Identity is the `id`; two contacts
/// with the same id are the same contact regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Build a contact with a freshly generated id
    ///
    /// Fields are trimmed. Fails when the trimmed name is empty.
    pub fn create(name: &str, email: &str, phone: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::Validation(ContactField::Name));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
        })
    }

    /// First eight characters of the id, enough to tell rows apart on screen
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contact {}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Unvalidated form input from the add dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Check that every required field is non-blank
    ///
    /// Reports the first blank field in form order.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::all() {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::Validation(field));
            }
        }
        Ok(())
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
        }
    }
}

/// Immutable, ordered view of the store's contacts at one point in time
///
/// Cloning is cheap; the view renders from this and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct ContactSnapshot {
    contacts: Arc<[Contact]>,
}

impl ContactSnapshot {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: contacts.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Row index of the contact with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }
}
