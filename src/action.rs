//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App processes
//! them to update state.

use crate::model::DialogResult;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; expires toasts
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Table Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    /// Select a row by index (mouse click)
    SelectRow(usize),
    ClearSelection,
    /// Replace the table with a fresh snapshot from the store
    Reload,

    // ─────────────────────────────────────────────────────────────────────────
    // Contacts
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the add-contact dialog
    OpenAddDialog,
    /// Validate the add dialog and save the contact
    SubmitContact,
    /// The add dialog closed
    AddDialogClosed(DialogResult),
    /// Delete the selected contact (asks for confirmation)
    RequestDelete,
    /// Confirm the pending deletion
    ConfirmDelete,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Close the top modal without acting
    CloseModal,
    OpenQuitDialog,
    OpenHelp,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::SelectRow(i) => write!(f, "SelectRow({})", i),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::Reload => write!(f, "Reload"),
            Action::OpenAddDialog => write!(f, "OpenAddDialog"),
            Action::SubmitContact => write!(f, "SubmitContact"),
            Action::AddDialogClosed(DialogResult::Confirmed(c)) => {
                write!(f, "AddDialogClosed(Confirmed({}))", c.id)
            }
            Action::AddDialogClosed(DialogResult::Cancelled) => {
                write!(f, "AddDialogClosed(Cancelled)")
            }
            Action::RequestDelete => write!(f, "RequestDelete"),
            Action::ConfirmDelete => write!(f, "ConfirmDelete"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
        }
    }
}
