//! Serialise batches into downloadable artefacts.
//!
//! Each format lives in its own submodule and turns a [`Batch`] into bytes.
//! Encoders never return partial output: either the whole artefact is
//! produced or an [`ExportError`] is returned.

mod csv;
mod json;
mod txt;
mod xlsx;
mod xml;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::batch::Batch;
use crate::error::ExportError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Pretty-printed JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Excel workbook with a single sheet.
    Xlsx,
    /// XML document with one `<item>` per record.
    Xml,
    /// Fixed-width plain-text table.
    Txt,
}

impl ExportFormat {
    /// Every format, in menu order.
    pub const ALL: [Self; 5] = [Self::Json, Self::Csv, Self::Xlsx, Self::Xml, Self::Txt];

    /// Lower-case format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Xml => "xml",
            Self::Txt => "txt",
        }
    }

    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }

    /// MIME type sent as `Content-Type`.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Xml => "application/xml",
            Self::Txt => "text/plain; charset=utf-8",
        }
    }

    /// Download file name, `data.<ext>`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("data.{}", self.extension())
    }

    /// Whether the artefact is human-readable text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Xlsx)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| ExportError::UnsupportedFormat {
                value: value.to_owned(),
            })
    }
}

/// Encoded batch plus the metadata needed to deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    format: ExportFormat,
    bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Format the bytes are encoded in.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }

    /// Encoded content.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the artefact and return its content.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// MIME type of the content.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Download file name.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.format.file_name()
    }
}

/// Encode `batch` in `format`.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] when the encoder fails.
///
/// # Example
///
/// ```
/// use coffee_data::{Batch, ExportFormat, Record, export};
///
/// let batch = Batch::from_records(vec![
///     Record::new().with_field("name", "Alice").with_field("age", 25_i64),
/// ])
/// .expect("uniform records");
/// let artifact = export(&batch, ExportFormat::Csv).expect("csv export");
///
/// assert_eq!(artifact.bytes(), b"name,age\nAlice,25\n");
/// assert_eq!(artifact.file_name(), "data.csv");
/// ```
pub fn export(batch: &Batch, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Json => json::encode(batch)?,
        ExportFormat::Csv => csv::encode(batch)?,
        ExportFormat::Xlsx => xlsx::encode(batch)?,
        ExportFormat::Xml => xml::encode(batch)?,
        ExportFormat::Txt => txt::encode(batch),
    };
    debug!(format = %format, records = batch.len(), bytes = bytes.len(), "exported batch");
    Ok(ExportArtifact { format, bytes })
}

/// The fixed two-person dataset served by the demo export endpoint.
#[must_use]
pub fn demo_batch() -> Batch {
    use crate::record::Record;

    let people = [("Alice", 25_i64), ("Bob", 30_i64)];
    let records = people
        .into_iter()
        .map(|(name, age)| Record::new().with_field("name", name).with_field("age", age))
        .collect();
    Batch::from_records(records).unwrap_or_default()
}

/// Wrap an encoder failure.
fn serialization_error(format: ExportFormat, error: &dyn fmt::Display) -> ExportError {
    ExportError::Serialization {
        format: format.as_str(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("json", ExportFormat::Json)]
    #[case("CSV", ExportFormat::Csv)]
    #[case(" Xlsx ", ExportFormat::Xlsx)]
    #[case("xml", ExportFormat::Xml)]
    #[case("txt", ExportFormat::Txt)]
    fn parses_format_names(#[case] raw: &str, #[case] expected: ExportFormat) {
        assert_eq!(raw.parse::<ExportFormat>(), Ok(expected));
    }

    #[rstest]
    #[case("pdf")]
    #[case("")]
    #[case("jsonl")]
    fn rejects_unknown_formats(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat {
                value: raw.to_owned()
            })
        );
    }

    #[rstest]
    #[case(ExportFormat::Json, "data.json", "application/json")]
    #[case(ExportFormat::Csv, "data.csv", "text/csv; charset=utf-8")]
    #[case(
        ExportFormat::Xlsx,
        "data.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    )]
    #[case(ExportFormat::Xml, "data.xml", "application/xml")]
    #[case(ExportFormat::Txt, "data.txt", "text/plain; charset=utf-8")]
    fn formats_know_their_delivery_metadata(
        #[case] format: ExportFormat,
        #[case] file_name: &str,
        #[case] mime_type: &str,
    ) {
        assert_eq!(format.file_name(), file_name);
        assert_eq!(format.mime_type(), mime_type);
    }

    #[test]
    fn demo_batch_holds_alice_and_bob() {
        let demo = demo_batch();
        assert_eq!(demo.len(), 2);
        assert_eq!(demo.field_names(), ["name", "age"]);
    }

    #[rstest]
    fn every_format_exports_the_demo_batch(
        #[values(
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Xlsx,
            ExportFormat::Xml,
            ExportFormat::Txt
        )]
        format: ExportFormat,
    ) {
        let artifact = export(&demo_batch(), format).expect("export succeeds");
        assert_eq!(artifact.format(), format);
        assert!(!artifact.bytes().is_empty());
    }
}
