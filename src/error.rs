//! Error types for the contact store and controller
//!
//! The UI layer works in `anyhow::Result`; the store layer reports these typed
//! errors so the view can tell a validation problem (recoverable in the
//! dialog) from a backend failure (shown as a toast).

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Input fields of a contact, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub fn all() -> [ContactField; 3] {
        [ContactField::Name, ContactField::Email, ContactField::Phone]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Phone,
            ContactField::Phone => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Phone,
            ContactField::Email => ContactField::Name,
            ContactField::Phone => ContactField::Email,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    Validation(ContactField),

    #[error("failed to access contacts file {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("contacts file {path} is not valid: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("contacts file {path} has unsupported version {version}")]
    UnsupportedVersion { path: PathBuf, version: u32 },

    #[error("contacts file {path} is inconsistent: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },
}

impl ContactError {
    /// Whether the user can fix this by editing the form
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::Validation(_))
    }

    /// The offending field for validation errors
    pub fn field(&self) -> Option<ContactField> {
        match self {
            ContactError::Validation(field) => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(ContactField::Phone.next(), ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Phone);
        for field in ContactField::all() {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_validation_message() {
        let err = ContactError::Validation(ContactField::Email);
        assert_eq!(err.to_string(), "Email is required");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some(ContactField::Email));
    }

    #[test]
    fn test_storage_error_is_not_validation() {
        let err = ContactError::Storage {
            path: PathBuf::from("/tmp/contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_validation());
        assert!(err.field().is_none());
        assert!(err.to_string().contains("/tmp/contacts.json"));
    }
}
