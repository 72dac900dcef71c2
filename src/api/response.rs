use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::borrow::Cow;

use crate::errors::AppError;

pub const LISTED: &str = "Contacts retrieved successfully";
pub const RETRIEVED: &str = "Contact retrieved successfully";
pub const UPDATED: &str = "Contact updated";
pub const DELETED: &str = "Contact deleted";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// `{message}` body shared by confirmations and every error response.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: Cow<'static, str>,
}

impl MessageBody {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataBody<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> DataBody<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// Serializes `body` up front so a serialization fault surfaces as an
/// `AppError` (and a 500) instead of escaping the handler.
pub fn respond<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(body)?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn data_body_shape() -> Result<(), AppError> {
        let body = DataBody::new(UPDATED, vec![1, 2]);
        assert_eq!(
            serde_json::to_string(&body)?,
            r#"{"message":"Contact updated","data":[1,2]}"#
        );
        Ok(())
    }

    #[test]
    fn serialization_fault_is_app_error() {
        // Non-string map keys cannot be written as JSON
        let mut bad: BTreeMap<(u8, u8), u8> = BTreeMap::new();
        bad.insert((1, 2), 3);

        let result = respond(StatusCode::OK, &bad);

        match result {
            Err(err) => assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR),
            Ok(_) => panic!("expected serialization failure"),
        }
    }

    #[test]
    fn respond_sets_status_and_content_type() -> Result<(), AppError> {
        let response = respond(StatusCode::CREATED, &MessageBody::new(DELETED))?;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"application/json"[..])
        );
        Ok(())
    }
}
