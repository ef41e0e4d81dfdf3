//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod add_contact_dialog;
pub mod confirm_delete_dialog;
pub mod contact_table;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod theme;
pub mod toast;

pub use add_contact_dialog::{AddContactDialog, SubmitOutcome};
pub use confirm_delete_dialog::ConfirmDeleteDialog;
pub use contact_table::ContactTable;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup, right_aligned_buttons};
pub use quit_dialog::QuitDialog;
pub use toast::draw_toast;
