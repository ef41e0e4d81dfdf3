//! Model layer - contact data and presentation state
//!
//! - `Contact` / `ContactSnapshot` - records and the read-only view of the store
//! - `ModalStack` - modal overlay management
//! - `ToastQueue` - transient notifications
//! - `ViewState` - the main view's interaction state

pub mod contact;
pub mod modal;
pub mod toast;
pub mod ui;

pub use contact::{Contact, ContactDraft, ContactSnapshot};
pub use modal::{Modal, ModalStack};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use ui::{DeleteRequest, DialogResult, ViewState};
