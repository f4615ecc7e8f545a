//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data`. The only
//! mutable part is the last-batch slot, shared by every worker.

use std::sync::Arc;

use coffee_data::{DEFAULT_MAX_RECORDS, LastBatch, Locale};

use crate::domain::LoginCredentials;

/// Dependency bundle for HTTP handlers.
#[derive(Debug, Clone)]
pub struct HttpState {
    /// Most recent batch produced by a generate endpoint.
    pub last_batch: Arc<LastBatch>,
    /// Largest record count a single request may ask for.
    pub max_records: u32,
    /// Locale used when a request does not name one.
    pub default_locale: Locale,
    /// The demo credential pair checked by `POST /login`.
    pub credentials: LoginCredentials,
}

impl HttpState {
    /// State with an empty last-batch slot and default limits.
    pub fn new(credentials: LoginCredentials) -> Self {
        Self {
            last_batch: Arc::new(LastBatch::new()),
            max_records: DEFAULT_MAX_RECORDS,
            default_locale: Locale::default(),
            credentials,
        }
    }

    /// Override the record-count ceiling.
    #[must_use]
    pub fn with_max_records(mut self, max_records: u32) -> Self {
        self.max_records = max_records;
        self
    }

    /// Override the fallback locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }
}
