pub use crate::api::{AppState, build_router};
pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactPatch, NewContact},
    uuid,
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonSeed, SeedSource, load_store};
pub use crate::validation::{Presence, validate_contact_patch, validate_new_contact};
