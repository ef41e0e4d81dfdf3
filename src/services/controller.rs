//! Contact controller
//!
//! Thin pass-through from the view to a `ContactStore`. Every mutation hands
//! back a fresh `ContactSnapshot` so the view re-renders from store state
//! instead of patching its own rows.

use super::store::ContactStore;
use crate::error::ContactError;
use crate::model::{Contact, ContactDraft, ContactSnapshot};
use log::{debug, info, warn};

pub struct ContactController {
    store: Box<dyn ContactStore>,
}

impl ContactController {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        info!("event=controller_init backend={}", store.describe());
        Self { store }
    }

    /// Current contacts, in insertion order
    pub fn snapshot(&self) -> ContactSnapshot {
        ContactSnapshot::new(self.store.list())
    }

    /// Validate and add a contact, returning it with the updated snapshot
    pub fn add(&mut self, draft: &ContactDraft) -> Result<(Contact, ContactSnapshot), ContactError> {
        draft.validate()?;

        match self.store.add(&draft.name, &draft.email, &draft.phone) {
            Ok(contact) => {
                info!("event=contact_added id={}", contact.id);
                Ok((contact, self.snapshot()))
            }
            Err(err) => {
                if err.is_validation() {
                    debug!("event=contact_add_rejected error={}", err);
                } else {
                    warn!("event=contact_add_failed error={}", err);
                }
                Err(err)
            }
        }
    }

    /// Delete by id; an unknown id is not an error and yields `false`
    pub fn delete(&mut self, id: &str) -> Result<(bool, ContactSnapshot), ContactError> {
        match self.store.delete(id) {
            Ok(removed) => {
                if removed {
                    info!("event=contact_deleted id={}", id);
                } else {
                    info!("event=contact_delete_noop id={}", id);
                }
                Ok((removed, self.snapshot()))
            }
            Err(err) => {
                warn!("event=contact_delete_failed id={} error={}", id, err);
                Err(err)
            }
        }
    }

    pub fn backend(&self) -> String {
        self.store.describe()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ContactField;
    use crate::services::store::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Store wrapper that counts calls, for asserting the view left it alone
    pub(crate) struct CountingStore {
        inner: MemoryStore,
        pub adds: Rc<Cell<usize>>,
        pub deletes: Rc<Cell<usize>>,
    }

    impl CountingStore {
        pub(crate) fn new() -> (Self, Rc<Cell<usize>>, Rc<Cell<usize>>) {
            let adds = Rc::new(Cell::new(0));
            let deletes = Rc::new(Cell::new(0));
            let store = Self {
                inner: MemoryStore::new(),
                adds: Rc::clone(&adds),
                deletes: Rc::clone(&deletes),
            };
            (store, adds, deletes)
        }
    }

    impl ContactStore for CountingStore {
        fn list(&self) -> Vec<Contact> {
            self.inner.list()
        }

        fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<Contact, ContactError> {
            self.adds.set(self.adds.get() + 1);
            self.inner.add(name, email, phone)
        }

        fn delete(&mut self, id: &str) -> Result<bool, ContactError> {
            self.deletes.set(self.deletes.get() + 1);
            self.inner.delete(id)
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    /// Store whose writes always fail
    pub(crate) struct BrokenStore;

    impl ContactStore for BrokenStore {
        fn list(&self) -> Vec<Contact> {
            Vec::new()
        }

        fn add(&mut self, _: &str, _: &str, _: &str) -> Result<Contact, ContactError> {
            Err(broken_err())
        }

        fn delete(&mut self, _: &str) -> Result<bool, ContactError> {
            Err(broken_err())
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn broken_err() -> ContactError {
        ContactError::Storage {
            path: "/dev/full".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        }
    }

    #[test]
    fn test_add_returns_contact_and_new_snapshot() {
        let mut controller = ContactController::new(Box::new(MemoryStore::new()));
        assert!(controller.snapshot().is_empty());

        let (contact, snapshot) = controller
            .add(&ContactDraft::new("Ana", "ana@x.com", "111"))
            .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(0), Some(&contact));
        assert_eq!(controller.snapshot().len(), 1);
    }

    #[test]
    fn test_invalid_draft_never_reaches_store() {
        let (store, adds, _) = CountingStore::new();
        let mut controller = ContactController::new(Box::new(store));

        let err = controller
            .add(&ContactDraft::new("", "ana@x.com", "111"))
            .unwrap_err();

        assert!(matches!(err, ContactError::Validation(ContactField::Name)));
        assert_eq!(adds.get(), 0);
    }

    #[test]
    fn test_delete_missing_id_returns_false() {
        let mut controller = ContactController::new(Box::new(MemoryStore::new()));
        controller
            .add(&ContactDraft::new("Ana", "ana@x.com", "111"))
            .unwrap();

        let (removed, snapshot) = controller.delete("nope").unwrap();
        assert!(!removed);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_backend_errors_propagate() {
        let mut controller = ContactController::new(Box::new(BrokenStore));
        assert!(controller
            .add(&ContactDraft::new("Ana", "ana@x.com", "111"))
            .is_err());
        assert!(controller.delete("1").is_err());
    }
}
