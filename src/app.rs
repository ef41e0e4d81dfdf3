//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It holds the latest `ContactSnapshot` and replaces it wholesale after
//! every controller call; the table only ever renders that snapshot.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, draw_toast, AddContactDialog, ConfirmDeleteDialog, ContactTable, HelpDialog,
    HomeComponent, HomeRenderContext, QuitDialog, SubmitOutcome,
};
use crate::model::{
    ContactSnapshot, DeleteRequest, DialogResult, Modal, ModalStack, Toast, ToastQueue, ViewState,
};
use crate::services::ContactController;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{debug, info, warn};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;

pub const WELCOME_MESSAGE: &str = "Welcome to your Address Book";
pub const ADDED_MESSAGE: &str = "Contact added successfully";
pub const DELETED_MESSAGE: &str = "Contact deleted successfully";
pub const NO_SELECTION_MESSAGE: &str = "Select a contact to delete";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save contacts";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Pass-through to the contact store
    pub controller: ContactController,

    /// Contacts currently on screen
    pub contacts: ContactSnapshot,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Transient notifications
    pub toasts: ToastQueue,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Store description for the footer
    backend: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub table: ContactTable,
    pub add_dialog: AddContactDialog,
    pub confirm_delete: ConfirmDeleteDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the App with the store's current contacts loaded
    pub fn new(controller: ContactController, toast_duration: Duration) -> App {
        let contacts = controller.snapshot();
        let backend = controller.backend();

        let mut table = ContactTable::new();
        table.select_first(contacts.len());

        let mut toasts = ToastQueue::new(toast_duration);
        toasts.push(Toast::info(WELCOME_MESSAGE));

        info!(
            "event=app_ready contacts={} backend={}",
            contacts.len(),
            backend
        );

        App {
            controller,
            contacts,
            modals: ModalStack::new(),
            toasts,
            should_quit: false,
            backend,
            home: HomeComponent::new(),
            table,
            add_dialog: AddContactDialog::new(),
            confirm_delete: ConfirmDeleteDialog::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::from_modal(self.modals.top())
    }

    /// Work out what pressing Delete means for the current selection
    pub fn delete_request(&self) -> DeleteRequest {
        match self.table.selected_contact(&self.contacts) {
            Some(contact) => DeleteRequest::Confirm {
                id: contact.id.clone(),
                name: contact.name.clone(),
            },
            None => DeleteRequest::NoSelection,
        }
    }

    /// Replace the on-screen contacts, keeping the selection in range
    fn apply_snapshot(&mut self, snapshot: ContactSnapshot) {
        self.contacts = snapshot;
        self.table.clamp(self.contacts.len());
    }

    fn submit_contact(&mut self) -> Option<Action> {
        match self.add_dialog.submit(&mut self.controller) {
            SubmitOutcome::Invalid(field) => {
                debug!("event=add_dialog_invalid field={}", field);
                None
            }
            SubmitOutcome::Saved { contact, snapshot } => {
                self.apply_snapshot(snapshot);
                Some(Action::AddDialogClosed(DialogResult::Confirmed(contact)))
            }
            SubmitOutcome::Failed(err) => {
                warn!("event=add_dialog_failed error={}", err);
                self.toasts.push(Toast::error(SAVE_FAILED_MESSAGE));
                None
            }
        }
    }

    fn close_add_dialog(&mut self, result: DialogResult) {
        if self.modals.top() == Some(&Modal::AddContact) {
            self.modals.pop();
        }
        match result {
            DialogResult::Confirmed(contact) => {
                if let Some(index) = self.contacts.position(&contact.id) {
                    self.table.select(Some(index));
                }
                self.toasts.push(Toast::success(ADDED_MESSAGE));
            }
            DialogResult::Cancelled => debug!("event=add_dialog_cancelled"),
        }
        self.add_dialog.reset();
    }

    fn delete_confirmed(&mut self) {
        let Some(Modal::ConfirmDelete { id, .. }) = self.modals.pop() else {
            return;
        };

        match self.controller.delete(&id) {
            Ok((removed, snapshot)) => {
                self.apply_snapshot(snapshot);
                if removed {
                    self.toasts.push(Toast::success(DELETED_MESSAGE));
                }
            }
            Err(err) => {
                warn!("event=delete_failed id={} error={}", id, err);
                self.toasts.push(Toast::error(SAVE_FAILED_MESSAGE));
            }
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::AddContact) => self.add_dialog.handle_key_event(key),
            Some(Modal::ConfirmDelete { .. }) => self.confirm_delete.handle_key_event(key),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.home.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.modals.is_empty() {
            if let Some(action) = self.home.handle_mouse_event(mouse)? {
                return Ok(Some(action));
            }
            return Ok(self.table.handle_mouse_event(mouse, self.contacts.len()));
        }

        match self.modals.top() {
            Some(Modal::AddContact) => self.add_dialog.handle_mouse_event(mouse),
            Some(Modal::ConfirmDelete { .. }) => self.confirm_delete.handle_mouse_event(mouse),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!("event=action name={} view={:?}", action, self.view_state());
        }

        match action {
            Action::Tick => self.toasts.tick(),
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("event=app_quit");
                self.should_quit = true;
            }

            // Table navigation
            Action::NextRow => self.table.next(self.contacts.len()),
            Action::PrevRow => self.table.previous(self.contacts.len()),
            Action::FirstRow => self.table.select_first(self.contacts.len()),
            Action::LastRow => self.table.select_last(self.contacts.len()),
            Action::SelectRow(index) => {
                if index < self.contacts.len() {
                    self.table.select(Some(index));
                }
            }
            Action::ClearSelection => self.table.clear_selection(),
            Action::Reload => {
                let snapshot = self.controller.snapshot();
                self.apply_snapshot(snapshot);
            }

            // Contacts
            Action::OpenAddDialog => {
                self.add_dialog.reset();
                self.modals.push(Modal::AddContact);
            }
            Action::SubmitContact => return Ok(self.submit_contact()),
            Action::AddDialogClosed(result) => self.close_add_dialog(result),
            Action::RequestDelete => match self.delete_request() {
                DeleteRequest::Confirm { id, name } => {
                    self.confirm_delete.set_target(&name);
                    self.modals.push(Modal::ConfirmDelete { id, name });
                }
                DeleteRequest::NoSelection => {
                    self.toasts.push(Toast::warning(NO_SELECTION_MESSAGE));
                }
            },
            Action::ConfirmDelete => self.delete_confirmed(),

            // Modals
            Action::CloseModal => {
                if self.modals.top() == Some(&Modal::AddContact) {
                    return Ok(Some(Action::AddDialogClosed(DialogResult::Cancelled)));
                }
                self.modals.pop();
            }
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            contacts: &self.contacts,
            backend: &self.backend,
        };
        draw_home_screen(frame, area, &mut self.home, &mut self.table, &ctx)?;

        // Draw modal overlay if active
        match self.modals.top() {
            Some(Modal::AddContact) => self.add_dialog.draw(frame, area)?,
            Some(Modal::ConfirmDelete { .. }) => self.confirm_delete.draw(frame, area)?,
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }

        // Toasts sit above everything, including modals
        if let Some(toast) = self.toasts.current() {
            draw_toast(frame, area, toast);
        }
        Ok(())
    }
}
