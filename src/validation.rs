use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::contact::{ContactPatch, NewContact, ValidationReq};
use crate::errors::AppError;

/// Whether a field must appear in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

type FieldCheck = fn(&str) -> Result<Option<String>, AppError>;

/// Known fields in the order they are checked. The first failure is reported.
const FIELDS: [(&str, FieldCheck); 3] = [
    ("email", check_email),
    ("phone", check_phone),
    ("name", check_name),
];

pub fn validate_name(name: &str) -> Result<bool, AppError> {
    // At least 3 characters, counted as chars not bytes
    Ok(name.chars().count() >= 3)
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    // Local part: atext runs joined by single dots
    // Domain: dot-separated labels, no edge hyphens, alphabetic TLD
    let re = Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )?;
    Ok(re.is_match(email))
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // DDD-DDD-DDDD, digits only
    let re = Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$")?;
    Ok(re.is_match(phone))
}

fn check_name(value: &str) -> Result<Option<String>, AppError> {
    Ok((!validate_name(value)?).then(ValidationReq::name_req))
}

fn check_email(value: &str) -> Result<Option<String>, AppError> {
    Ok((!validate_email(value)?).then(ValidationReq::email_req))
}

fn check_phone(value: &str) -> Result<Option<String>, AppError> {
    Ok((!validate_phone(value)?).then(|| ValidationReq::phone_req(value)))
}

/// Validates a single field of the payload and returns its string value.
fn validate_field(
    object: &Map<String, Value>,
    field: &str,
    check: FieldCheck,
    presence: Presence,
) -> Result<Option<String>, AppError> {
    let value = match object.get(field) {
        Some(value) => value,
        None if presence == Presence::Required => {
            return Err(AppError::Validation(ValidationReq::required(field)));
        }
        None => return Ok(None),
    };

    let Some(text) = value.as_str() else {
        return Err(AppError::Validation(ValidationReq::string_req(field)));
    };

    if text.is_empty() {
        return Err(AppError::Validation(ValidationReq::empty_req(field)));
    }

    if let Some(message) = check(text)? {
        return Err(AppError::Validation(message));
    }

    Ok(Some(text.to_string()))
}

/// Runs every field rule against an untyped request body.
/// Unknown keys, `id` included, are rejected after the known fields pass.
pub fn validate_payload(body: &Value, presence: Presence) -> Result<ContactPatch, AppError> {
    let Some(object) = body.as_object() else {
        return Err(AppError::Validation(ValidationReq::object_req()));
    };

    let mut patch = ContactPatch::default();
    for (field, check) in FIELDS {
        let value = validate_field(object, field, check, presence)?;
        match field {
            "name" => patch.name = value,
            "email" => patch.email = value,
            _ => patch.phone = value,
        }
    }

    if let Some(unknown) = object
        .keys()
        .find(|key| !FIELDS.iter().any(|(field, _)| field == key))
    {
        return Err(AppError::Validation(ValidationReq::not_allowed(unknown)));
    }

    Ok(patch)
}

pub fn validate_new_contact(body: &Value) -> Result<NewContact, AppError> {
    NewContact::try_from(validate_payload(body, Presence::Required)?)
}

pub fn validate_contact_patch(body: &Value) -> Result<ContactPatch, AppError> {
    validate_payload(body, Presence::Optional)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn message(result: Result<impl std::fmt::Debug, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn field_validators() -> Result<(), AppError> {
        assert!(validate_name("Ana")?);
        assert!(!validate_name("Al")?);
        assert!(validate_name("Ștefan")?);

        assert!(validate_email("ana@x.com")?);
        assert!(!validate_email("bad")?);
        assert!(!validate_email("foo@bar")?);
        assert!(!validate_email("a b@x.com")?);
        assert!(!validate_email("a@x..com")?);
        assert!(!validate_email("a@x.com.")?);
        assert!(!validate_email("a,b@x.com")?);
        assert!(!validate_email("<a>@x.com")?);
        assert!(!validate_email("a@-x.com")?);
        assert!(!validate_email("a@x-.com")?);
        assert!(!validate_email("a@@x.com")?);
        assert!(!validate_email(".a@x.com")?);
        assert!(!validate_email("a@x.c0m")?);
        assert!(validate_email("maria.ionescu@mail.example.org")?);
        assert!(validate_email("o'neil+tag@my-host.ro")?);

        assert!(validate_phone("111-222-3333")?);
        assert!(!validate_phone("1112223333")?);
        assert!(!validate_phone("111-222-333a")?);
        assert!(!validate_phone(" 111-222-3333")?);
        Ok(())
    }

    #[test]
    fn accepts_complete_contact() -> Result<(), AppError> {
        let body = json!({"name": "Ana", "email": "ana@x.com", "phone": "111-222-3333"});
        let contact = validate_new_contact(&body)?;

        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.email, "ana@x.com");
        assert_eq!(contact.phone, "111-222-3333");
        Ok(())
    }

    #[test]
    fn create_requires_every_field() {
        let body = json!({"name": "Ana", "email": "ana@x.com"});
        assert_eq!(message(validate_new_contact(&body)), "\"phone\" is required");
    }

    #[test]
    fn email_failure_reported_before_name() {
        let body = json!({"name": "Al", "email": "bad", "phone": "111-222-3333"});
        assert_eq!(
            message(validate_new_contact(&body)),
            "\"email\" must be a valid email"
        );
    }

    #[test]
    fn malformed_email_rejected_on_create() {
        for email in ["a@x..com", "a@x.com.", "a,b@x.com", "<a>@x.com", "a@-x.com"] {
            let body = json!({"name": "Ana", "email": email, "phone": "111-222-3333"});
            assert_eq!(
                message(validate_new_contact(&body)),
                "\"email\" must be a valid email",
                "accepted {email}"
            );
        }
    }

    #[test]
    fn short_name_rejected() {
        let body = json!({"name": "Al", "email": "al@x.com", "phone": "111-222-3333"});
        assert_eq!(
            message(validate_new_contact(&body)),
            "\"name\" length must be at least 3 characters long"
        );
    }

    #[test]
    fn bad_phone_message_names_pattern() {
        let body = json!({"phone": "12345"});
        assert_eq!(
            message(validate_contact_patch(&body)),
            "\"phone\" with value \"12345\" fails to match the required pattern: /^[0-9]{3}-[0-9]{3}-[0-9]{4}$/"
        );
    }

    #[test]
    fn non_string_and_empty_values_rejected() {
        assert_eq!(
            message(validate_contact_patch(&json!({"name": null}))),
            "\"name\" must be a string"
        );
        assert_eq!(
            message(validate_contact_patch(&json!({"email": 42}))),
            "\"email\" must be a string"
        );
        assert_eq!(
            message(validate_contact_patch(&json!({"name": ""}))),
            "\"name\" is not allowed to be empty"
        );
    }

    #[test]
    fn update_fields_are_optional() -> Result<(), AppError> {
        let patch = validate_contact_patch(&json!({"phone": "999-999-9999"}))?;

        assert_eq!(patch.phone.as_deref(), Some("999-999-9999"));
        assert!(patch.name.is_none());
        assert!(patch.email.is_none());

        assert!(validate_contact_patch(&json!({}))?.is_empty());
        Ok(())
    }

    #[test]
    fn unknown_keys_and_id_rejected() {
        assert_eq!(
            message(validate_contact_patch(&json!({"id": "b2"}))),
            "\"id\" is not allowed"
        );
        assert_eq!(
            message(validate_new_contact(&json!({
                "name": "Ana", "email": "ana@x.com", "phone": "111-222-3333", "age": 3
            }))),
            "\"age\" is not allowed"
        );
    }

    #[test]
    fn body_must_be_object() {
        assert_eq!(
            message(validate_contact_patch(&json!(["Ana"]))),
            "\"value\" must be of type object"
        );
    }
}
