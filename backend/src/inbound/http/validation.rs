//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankField => "blank_field",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ErrorCode::MissingField,
    )
}

pub(crate) fn blank_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("{name} must not be empty"),
        ErrorCode::BlankField,
    )
}

/// Unwrap a required request field or report it as missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const TITLE: FieldName = FieldName::new("titulo");

    #[rstest]
    fn missing_field_reports_field_and_code() {
        let err = missing_field_error(TITLE);

        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: titulo");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "titulo", "code": "missing_field"}))
        );
    }

    #[rstest]
    fn blank_field_reports_field_and_code() {
        let err = blank_field_error(TITLE);

        assert_eq!(err.message(), "titulo must not be empty");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "titulo", "code": "blank_field"}))
        );
    }

    #[rstest]
    #[case(Some(1899), Ok(1899))]
    #[case(None, Err("missing required field: titulo".to_owned()))]
    fn require_unwraps_or_reports(#[case] value: Option<i32>, #[case] expected: Result<i32, String>) {
        let result = require(value, TITLE).map_err(|err| err.message().to_owned());

        assert_eq!(result, expected);
    }
}
