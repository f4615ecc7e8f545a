//! Test helpers for inbound HTTP components.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::domain::LoginCredentials;
use crate::inbound::http::state::HttpState;

/// Build handler state with the `admin`/`password` demo pair.
pub fn test_state() -> HttpState {
    let credentials =
        LoginCredentials::try_from_parts("admin", "password").expect("fixture credentials");
    HttpState::new(credentials)
}

/// Split a response into its status and JSON body.
pub async fn unwrap_json<B>(response: ServiceResponse<B>) -> (StatusCode, Value)
where
    B: MessageBody,
{
    let status = response.status();
    let body = test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}
