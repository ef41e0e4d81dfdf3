//! Contact store backends
//!
//! `ContactStore` is the contract any persistence backend must satisfy.
//! Two backends ship: an in-memory list and a JSON document on disk.

use crate::error::ContactError;
use crate::model::Contact;
use chrono::{DateTime, Local};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Current version of the contacts document
const FORMAT_VERSION: u32 = 1;

/// Owner of the authoritative, insertion-ordered contact list
pub trait ContactStore {
    /// Current contacts in insertion order
    fn list(&self) -> Vec<Contact>;

    /// Create and append a contact with a fresh id
    fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<Contact, ContactError>;

    /// Remove the contact with `id`, returning whether anything was removed
    fn delete(&mut self, id: &str) -> Result<bool, ContactError>;

    /// Short description for the status bar and logs
    fn describe(&self) -> String;
}

// ═══════════════════════════════════════════════════════════════════════════════
// In-memory backend
// ═══════════════════════════════════════════════════════════════════════════════

/// Volatile store; contents are lost on exit
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: Vec<Contact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactStore for MemoryStore {
    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<Contact, ContactError> {
        let contact = Contact::create(name, email, phone)?;
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    fn delete(&mut self, id: &str) -> Result<bool, ContactError> {
        Ok(remove_by_id(&mut self.contacts, id).is_some())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

fn remove_by_id(contacts: &mut Vec<Contact>, id: &str) -> Option<(usize, Contact)> {
    let index = contacts.iter().position(|c| c.id == id)?;
    Some((index, contacts.remove(index)))
}

/// Loaded contacts must have non-empty unique ids and non-blank names
fn check_contacts(path: &Path, contacts: &[Contact]) -> Result<(), ContactError> {
    let invalid = |reason: String| ContactError::InvalidDocument {
        path: path.to_path_buf(),
        reason,
    };

    let mut seen = HashSet::with_capacity(contacts.len());
    for (index, contact) in contacts.iter().enumerate() {
        if contact.id.trim().is_empty() {
            return Err(invalid(format!("contact #{} has an empty id", index + 1)));
        }
        if contact.name.trim().is_empty() {
            return Err(invalid(format!("contact {} has a blank name", contact.id)));
        }
        if !seen.insert(contact.id.as_str()) {
            return Err(invalid(format!("id {} appears more than once", contact.id)));
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// JSON file backend
// ═══════════════════════════════════════════════════════════════════════════════

/// On-disk document
#[derive(Debug, Serialize, Deserialize)]
struct ContactDocument {
    version: u32,
    saved_at: DateTime<Local>,
    contacts: Vec<Contact>,
}

/// Store persisted as a pretty-printed JSON document
///
/// Every mutation rewrites the whole document. A failed write rolls the
/// in-memory list back so `list()` always matches what is on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl JsonFileStore {
    /// Open the document at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ContactError> {
        let path = path.into();

        if !path.exists() {
            info!("event=store_open backend=json status=new path={}", path.display());
            return Ok(Self {
                path,
                contacts: Vec::new(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| ContactError::Storage {
            path: path.clone(),
            source,
        })?;

        let document: ContactDocument =
            serde_json::from_str(&contents).map_err(|source| ContactError::Format {
                path: path.clone(),
                source,
            })?;

        if document.version != FORMAT_VERSION {
            return Err(ContactError::UnsupportedVersion {
                path,
                version: document.version,
            });
        }

        check_contacts(&path, &document.contacts)?;

        info!(
            "event=store_open backend=json status=ok path={} contacts={}",
            path.display(),
            document.contacts.len()
        );

        Ok(Self {
            path,
            contacts: document.contacts,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ContactError> {
        let storage_err = |source| ContactError::Storage {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(storage_err)?;
            }
        }

        let document = ContactDocument {
            version: FORMAT_VERSION,
            saved_at: Local::now(),
            contacts: self.contacts.clone(),
        };
        let json = serde_json::to_string_pretty(&document).map_err(|source| {
            ContactError::Format {
                path: self.path.clone(),
                source,
            }
        })?;

        // Write beside the target, then rename over it
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(storage_err)?;
        fs::rename(&tmp_path, &self.path).map_err(storage_err)?;

        debug!(
            "event=store_persist path={} contacts={}",
            self.path.display(),
            self.contacts.len()
        );
        Ok(())
    }
}

impl ContactStore for JsonFileStore {
    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<Contact, ContactError> {
        let contact = Contact::create(name, email, phone)?;
        self.contacts.push(contact.clone());

        if let Err(err) = self.persist() {
            self.contacts.pop();
            return Err(err);
        }
        Ok(contact)
    }

    fn delete(&mut self, id: &str) -> Result<bool, ContactError> {
        let Some((index, removed)) = remove_by_id(&mut self.contacts, id) else {
            return Ok(false);
        };

        if let Err(err) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(err);
        }
        Ok(true)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
