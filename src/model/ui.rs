//! View state - presentation state separate from contact data

use super::contact::Contact;
use super::modal::Modal;

/// Interaction state of the main view, derived from the top modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    AddDialogOpen,
    ConfirmingDelete,
    /// Help or quit overlay; neither touches contact data
    Overlay,
}

impl ViewState {
    pub fn from_modal(modal: Option<&Modal>) -> Self {
        match modal {
            None => ViewState::Idle,
            Some(Modal::AddContact) => ViewState::AddDialogOpen,
            Some(Modal::ConfirmDelete { .. }) => ViewState::ConfirmingDelete,
            Some(Modal::QuitConfirm) | Some(Modal::Help) => ViewState::Overlay,
        }
    }
}

/// How the add-contact dialog was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed(Contact),
    Cancelled,
}

/// Outcome of pressing Delete on the main view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    /// Ask the user to confirm removing this contact
    Confirm { id: String, name: String },
    /// Nothing is selected
    NoSelection,
}
