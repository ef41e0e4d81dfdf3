//! Contact persistence and the controller the view talks to
//!
//! - `ContactStore` - backend contract (in-memory or JSON file)
//! - `ContactController` - validation, logging, and snapshots over a store

pub mod controller;
pub mod store;

pub use controller::ContactController;
pub use store::{ContactStore, JsonFileStore, MemoryStore};
