pub mod json;
pub mod memory;

use crate::domain::contact::{Contact, ContactPatch, NewContact};
use crate::errors::AppError;
use std::path::Path;

pub use json::JsonSeed;
pub use memory::{ContactStore, ContactStoreIter};

/// Where the initial contact list comes from. Read once at startup.
pub trait SeedSource {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn describe(&self) -> String;
}

/// Builds the store from a seed file on disk.
pub fn load_store(seed_path: &Path) -> Result<ContactStore, AppError> {
    let seed = JsonSeed::new(seed_path);
    let contacts = seed.load()?;

    tracing::info!(seed = %seed.describe(), count = contacts.len(), "loaded seed contacts");
    ContactStore::from_seed(contacts)
}
