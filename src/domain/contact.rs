use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields of a contact that passed create validation. Has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields of a contact that passed update validation.
/// `None` keeps the value already stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn object_req() -> String {
        "\"value\" must be of type object".to_string()
    }

    pub fn required(field: &str) -> String {
        format!("\"{}\" is required", field)
    }

    pub fn string_req(field: &str) -> String {
        format!("\"{}\" must be a string", field)
    }

    pub fn empty_req(field: &str) -> String {
        format!("\"{}\" is not allowed to be empty", field)
    }

    pub fn not_allowed(field: &str) -> String {
        format!("\"{}\" is not allowed", field)
    }

    pub fn name_req() -> String {
        "\"name\" length must be at least 3 characters long".to_string()
    }

    pub fn email_req() -> String {
        "\"email\" must be a valid email".to_string()
    }

    pub fn phone_req(value: &str) -> String {
        format!(
            "\"phone\" with value \"{}\" fails to match the required pattern: /^[0-9]{{3}}-[0-9]{{3}}-[0-9]{{4}}$/",
            value
        )
    }
}

impl Contact {
    pub fn new(id: String, fields: NewContact) -> Self {
        Contact {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Builds a contact with a freshly generated id.
    pub fn with_generated_id(fields: NewContact) -> Self {
        Contact::new(Uuid::new_v4().to_string(), fields)
    }

    /// Shallow merge: set fields override, unset fields and the id are kept.
    pub fn merged(&self, patch: ContactPatch) -> Contact {
        Contact {
            id: self.id.clone(),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.unwrap_or_else(|| self.phone.clone()),
        }
    }
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

impl TryFrom<ContactPatch> for NewContact {
    type Error = AppError;

    /// A create payload is a patch with every field present.
    fn try_from(patch: ContactPatch) -> Result<Self, Self::Error> {
        let ContactPatch { name, email, phone } = patch;

        Ok(NewContact {
            name: name.ok_or_else(|| AppError::Validation(ValidationReq::required("name")))?,
            email: email.ok_or_else(|| AppError::Validation(ValidationReq::required("email")))?,
            phone: phone.ok_or_else(|| AppError::Validation(ValidationReq::required("phone")))?,
        })
    }
}
