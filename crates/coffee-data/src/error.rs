//! Error types for the coffee-data crate.
//!
//! Generation and export failures are kept apart so callers can map them to
//! different outcomes: a bad record request is the caller's fault, while an
//! encoder failure is not.

use thiserror::Error;

/// Errors raised while validating a generation request or building a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested data type is not one of the known record shapes.
    #[error("unknown data type '{value}'; expected one of registrierung, login, profil, bestellung")]
    InvalidDataType {
        /// The rejected data type name.
        value: String,
    },

    /// The requested record count is outside the accepted range.
    #[error("record count {count} is outside the accepted range 1..={max}")]
    InvalidCount {
        /// The rejected count.
        count: i64,
        /// Largest count accepted by the caller.
        max: u32,
    },

    /// The requested locale is not supported.
    #[error("unknown locale '{value}'")]
    UnknownLocale {
        /// The rejected locale name.
        value: String,
    },

    /// The requested city is not in the catalogue.
    #[error("unknown city '{value}'")]
    UnknownCity {
        /// The rejected city name.
        value: String,
    },

    /// The requested country is not in the catalogue.
    #[error("unknown country '{value}'")]
    UnknownCountry {
        /// The rejected country name.
        value: String,
    },

    /// The requested order extra is not recognised.
    #[error("unknown order extra '{value}'; expected rabatt, versandkosten or geschenk")]
    UnknownOrderExtra {
        /// The rejected extra name.
        value: String,
    },

    /// A record's field names differ from those of the first record.
    #[error("record at index {index} does not share the batch's field names")]
    MismatchedFields {
        /// Position of the offending record.
        index: usize,
    },
}

/// Errors raised while turning a batch into an export artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The requested format name is not supported.
    #[error("unsupported export format '{value}'; expected json, csv, xlsx, xml or txt")]
    UnsupportedFormat {
        /// The rejected format name.
        value: String,
    },

    /// The encoder for a supported format failed.
    #[error("failed to encode {format} export: {message}")]
    Serialization {
        /// Name of the format being written.
        format: &'static str,
        /// Description of the encoder failure.
        message: String,
    },
}
