//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain and generator failures into consistent JSON
//! responses and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use coffee_data::{ExportError, GenerationError};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        let field = match &err {
            GenerationError::InvalidDataType { .. } => "data_type",
            GenerationError::InvalidCount { .. } => "count",
            GenerationError::UnknownLocale { .. } => "locale",
            GenerationError::UnknownCity { .. } => "city",
            GenerationError::UnknownCountry { .. } => "country",
            GenerationError::UnknownOrderExtra { .. } => "extra",
            GenerationError::MismatchedFields { .. } => {
                error!(error = %err, "generator produced a non-uniform batch");
                return Error::internal(err.to_string());
            }
        };
        Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
    }
}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat { value } => Error::invalid_request(format!(
                "unsupported export format '{value}'; expected json, csv, xlsx, xml or txt"
            ))
            .with_details(json!({ "field": "format", "value": value })),
            ExportError::Serialization { .. } => {
                error!(error = %err, "export encoder failed");
                Error::internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests;
