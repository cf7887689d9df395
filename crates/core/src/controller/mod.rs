//! View-state controller for the mapping administration table.
//!
//! Owns the data store, the 3-state view machine, the search text, and the
//! single active edit session. Embedding surfaces drive it exclusively
//! through the `on_*` command methods and read back through the accessors;
//! side effects go through the injected collaborator traits.

mod controller;
mod store;
mod types;

pub use controller::MetadataController;
pub use store::DataStore;
pub use types::*;
