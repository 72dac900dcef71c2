pub mod contact;

use crate::errors::AppError;
pub use uuid::{self, Uuid};
