use std::fmt::Display;

use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError,
};
use serde::Serialize;

/// Error response carrying the message, served when debug is on.
#[derive(Debug, Serialize)]
pub struct JsonError {
    error: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl JsonError {
    pub fn new(error: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            error: error.into(),
            status_code,
        }
    }
}

impl Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonError")
            .field("error", &self.error)
            .field("status_code", &self.status_code)
            .finish()
    }
}

impl From<&dyn actix_web::ResponseError> for JsonError {
    fn from(value: &dyn actix_web::ResponseError) -> Self {
        Self {
            status_code: value.status_code(),
            error: value.to_string(),
        }
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponseBuilder::new(self.status_code).json(self)
    }
}

/// Bodyless counterpart, served in production so remote-api details leak
/// nowhere.
#[derive(Debug)]
pub struct EmptyError {
    status_code: StatusCode,
}

impl EmptyError {
    pub fn new(status_code: StatusCode) -> Self {
        Self { status_code }
    }
}

impl Display for EmptyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmptyError")
            .field("status_code", &self.status_code)
            .finish()
    }
}

impl ResponseError for EmptyError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponseBuilder::new(self.status_code).finish()
    }
}

pub fn json_config_error_handler<Err: actix_web::ResponseError + 'static>(
    err: Err,
    _: &HttpRequest,
) -> actix_web::Error {
    JsonError::from(&err as &dyn actix_web::ResponseError).into()
}
