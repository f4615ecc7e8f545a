//! Demo login handler.
//!
//! ```text
//! POST /login {"benutzername":"admin","passwort":"password"}
//! ```
//!
//! No session is established: the handler only validates the username's
//! character set, compares the pair with the configured demo credentials and
//! echoes it back.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
///
/// Example JSON:
/// `{"benutzername":"admin","passwort":"password"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Username; `username` is accepted as an alias.
    #[serde(alias = "username")]
    #[schema(example = "admin")]
    pub benutzername: String,
    /// Password; `password` is accepted as an alias.
    #[serde(alias = "password")]
    #[schema(example = "password")]
    pub passwort: String,
}

/// Echo of the accepted credentials.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Username as accepted, trimmed.
    #[schema(example = "admin")]
    pub benutzername: String,
    /// Password as submitted.
    #[schema(example = "password")]
    pub passwort: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.benutzername, &value.passwort)
    }
}

impl From<&LoginCredentials> for LoginResponse {
    fn from(value: &LoginCredentials) -> Self {
        Self {
            benutzername: value.username().to_owned(),
            passwort: value.password().to_owned(),
        }
    }
}

/// Validate the submitted pair against the demo credentials.
///
/// Uses the centralised `Error` type so clients get a consistent
/// error schema across all endpoints.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted and echoed", body = LoginResponse),
        (status = 400, description = "Malformed username or empty field", body = ErrorSchema),
        (status = 401, description = "Credentials do not match", body = ErrorSchema),
        (status = 405, description = "Method not allowed")
    ),
    tags = ["login"],
    operation_id = "login"
)]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    if !credentials.matches(&state.credentials) {
        warn!(username = credentials.username(), "login rejected");
        return Err(Error::unauthorized("invalid credentials"));
    }
    info!(username = credentials.username(), "login accepted");
    Ok(HttpResponse::Ok().json(LoginResponse::from(&credentials)))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": err.code() }))
}
