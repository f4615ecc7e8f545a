//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod export;
pub mod generate;
pub mod health;
pub mod login;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::web;

use crate::domain::Error;

/// Register every endpoint on `cfg`.
///
/// Routes are declared per resource with an explicit method so a request
/// with the wrong method receives `405 Method Not Allowed`. Extractor
/// failures are reported through the shared error envelope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::domain::LoginCredentials;
/// use backend::inbound::http::{configure, health::HealthState, state::HttpState};
///
/// let credentials = LoginCredentials::try_from_parts("admin", "password").expect("valid");
/// let _app = App::new()
///     .app_data(web::Data::new(HealthState::new()))
///     .app_data(web::Data::new(HttpState::new(credentials)))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid path: {err}")).into()
    }))
    .service(
        web::resource("/generate/{data_type}/{count}")
            .route(web::get().to(generate::generate_by_path)),
    )
    .service(
        web::resource("/generate/{data_type}").route(web::get().to(generate::generate_by_query)),
    )
    .service(web::resource("/login").route(web::post().to(login::login)))
    .service(web::resource("/export_data/{format}").route(web::get().to(export::export_demo)))
    .service(web::resource("/export/{format}").route(web::get().to(export::export_last)))
    .service(web::resource("/health/ready").route(web::get().to(health::ready)))
    .service(web::resource("/health/live").route(web::get().to(health::live)));
}
