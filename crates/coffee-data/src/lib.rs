//! Synthetic test data for a coffee-shop web application.
//!
//! The crate generates batches of registration, login, profile and order
//! records filled with locale-aware fake values, and exports them as JSON,
//! CSV, XLSX, XML or a plain-text table.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Four record shapes selected by [`DataType`]
//! - Valid or deliberately invalid credentials ([`Validity`])
//! - Pinned catalogue cities and countries, order enrichments and seeds
//!   through [`GenerationOptions`]
//! - Export in every [`ExportFormat`]
//! - A console front end in [`console`]
//!
//! # Example
//!
//! ```
//! use coffee_data::{
//!     DataType, ExportFormat, GenerationOptions, RecordCount, export, generate_batch,
//! };
//!
//! let count = RecordCount::new(2, 10_000).expect("count in range");
//! let batch = generate_batch(DataType::Order, count, &GenerationOptions::default());
//! let artifact = export(&batch, ExportFormat::Csv).expect("csv export");
//!
//! let csv = String::from_utf8(artifact.into_bytes()).expect("utf-8");
//! assert!(csv.starts_with("produkt,menge,preis\n"));
//! assert_eq!(csv.lines().count(), 3);
//! ```

mod assembler;
mod atomic_io;
mod batch;
mod catalogue;
pub mod console;
mod data_type;
mod error;
mod export;
mod gender;
mod generator;
mod last_batch;
mod locale;
mod money;
mod options;
mod record;
mod validation;

pub use assembler::assemble;
pub use batch::{Batch, DEFAULT_MAX_RECORDS, RecordCount, generate_batch};
pub use catalogue::{City, Country, DISCOUNT_PERCENTAGES, OrderExtra, PRODUCTS};
pub use data_type::DataType;
pub use error::{ExportError, GenerationError};
pub use export::{ExportArtifact, ExportFormat, demo_batch, export};
pub use gender::{FEMALE_FIRST_NAMES, Gender, MALE_FIRST_NAMES, NameStyle};
pub use generator::{AGE_RANGE, FieldGenerator, QUANTITY_RANGE, SHIPPING_CENTS, UNIT_PRICE_CENTS};
pub use last_batch::LastBatch;
pub use locale::Locale;
pub use money::{EuroAmount, EuroAmountParseError};
pub use options::{GenerationOptions, OrderOptions, Validity};
pub use record::{FieldValue, Record, fields};
pub use validation::{
    PASSWORD_MAX, PASSWORD_MIN, USERNAME_MAX, USERNAME_MIN, has_malformed_characters,
    is_username_char, is_valid_password, is_valid_username,
};
