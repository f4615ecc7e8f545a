//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COFFEE_DATA_*` environment variables and an
//! optional `.coffee_data.toml`, in that order of precedence.

use std::net::{IpAddr, SocketAddr};

use coffee_data::Locale;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{LoginCredentials, LoginValidationError};
use crate::inbound::http::state::HttpState;

/// Errors raised when settings cannot be turned into server inputs.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        /// The rejected host.
        host: String,
        /// Parser failure.
        source: std::net::AddrParseError,
    },
    /// `max_records` is zero.
    #[error("max_records must be at least 1")]
    ZeroMaxRecords,
    /// `locale` is not supported.
    #[error(transparent)]
    Locale(#[from] coffee_data::GenerationError),
    /// The demo credential pair is malformed.
    #[error("invalid demo credentials: {0}")]
    Credentials(#[from] LoginValidationError),
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_LOCALE: &str = "de_DE";
const DEFAULT_LOGIN_USERNAME: &str = "admin";
const DEFAULT_LOGIN_PASSWORD: &str = "password";

/// Backend configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COFFEE_DATA")]
pub struct AppSettings {
    /// Interface the HTTP server binds to.
    pub host: Option<String>,
    /// TCP port the HTTP server listens on.
    #[ortho_config(default = 8000)]
    pub port: u16,
    /// Largest record count a single request may ask for.
    #[ortho_config(default = 10_000)]
    pub max_records: u32,
    /// Locale used when a request does not name one.
    pub locale: Option<String>,
    /// Username of the demo credential pair.
    pub login_username: Option<String>,
    /// Password of the demo credential pair.
    pub login_password: Option<String>,
}

impl AppSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured default locale code.
    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Return the configured demo username.
    pub fn login_username(&self) -> &str {
        self.login_username
            .as_deref()
            .unwrap_or(DEFAULT_LOGIN_USERNAME)
    }

    /// Return the configured demo password.
    pub fn login_password(&self) -> &str {
        self.login_password
            .as_deref()
            .unwrap_or(DEFAULT_LOGIN_PASSWORD)
    }

    /// Socket address built from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|source| SettingsError::InvalidHost {
                host: host.to_owned(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Handler state described by these settings.
    pub fn http_state(&self) -> Result<HttpState, SettingsError> {
        if self.max_records == 0 {
            return Err(SettingsError::ZeroMaxRecords);
        }
        let locale: Locale = self.locale().parse()?;
        let credentials =
            LoginCredentials::try_from_parts(self.login_username(), self.login_password())?;
        Ok(HttpState::new(credentials)
            .with_max_records(self.max_records)
            .with_default_locale(locale))
    }
}
