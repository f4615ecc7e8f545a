//! Batch generation and the record-count bounds.

use serde::Serialize;
use tracing::debug;

use crate::assembler::assemble;
use crate::data_type::DataType;
use crate::error::GenerationError;
use crate::generator::FieldGenerator;
use crate::options::GenerationOptions;
use crate::record::Record;

/// Largest batch accepted unless a caller configures another bound.
pub const DEFAULT_MAX_RECORDS: u32 = 10_000;

/// A record count validated against `1..=max`.
///
/// # Example
///
/// ```
/// use coffee_data::{DEFAULT_MAX_RECORDS, GenerationError, RecordCount};
///
/// assert_eq!(RecordCount::new(5, DEFAULT_MAX_RECORDS).map(RecordCount::get), Ok(5));
/// assert_eq!(
///     RecordCount::new(0, DEFAULT_MAX_RECORDS),
///     Err(GenerationError::InvalidCount { count: 0, max: DEFAULT_MAX_RECORDS })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordCount(u32);

impl RecordCount {
    /// Validate `count` against `1..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidCount`] when `count` is zero,
    /// negative or larger than `max`.
    pub fn new(count: i64, max: u32) -> Result<Self, GenerationError> {
        let invalid = GenerationError::InvalidCount { count, max };
        let value = u32::try_from(count).map_err(|_| invalid.clone())?;
        if value == 0 || value > max {
            return Err(invalid);
        }
        Ok(Self(value))
    }

    /// The validated count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// An ordered sequence of records that all share the same field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Batch {
    records: Vec<Record>,
}

impl Batch {
    /// Wrap records, checking that every record carries the first record's
    /// field names in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::MismatchedFields`] naming the first record
    /// that differs.
    ///
    /// # Example
    ///
    /// ```
    /// use coffee_data::{Batch, GenerationError, Record};
    ///
    /// let alice = Record::new().with_field("name", "Alice").with_field("age", 25_i64);
    /// let bob = Record::new().with_field("age", 30_i64).with_field("name", "Bob");
    ///
    /// assert_eq!(
    ///     Batch::from_records(vec![alice, bob]),
    ///     Err(GenerationError::MismatchedFields { index: 1 })
    /// );
    /// ```
    pub fn from_records(records: Vec<Record>) -> Result<Self, GenerationError> {
        if let Some(first) = records.first() {
            if let Some(index) = records
                .iter()
                .position(|record| !record.has_same_fields(first))
            {
                return Err(GenerationError::MismatchedFields { index });
            }
        }
        Ok(Self { records })
    }

    /// Records in generation order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the batch and return its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field names shared by every record; empty for an empty batch.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|record| record.field_names().collect())
            .unwrap_or_default()
    }

    /// A batch holding at most the first `limit` records.
    #[must_use]
    pub fn head(&self, limit: usize) -> Self {
        Self {
            records: self.records.iter().take(limit).cloned().collect(),
        }
    }
}

/// Generate `count` independent records of one shape.
///
/// # Example
///
/// ```
/// use coffee_data::{DataType, GenerationOptions, RecordCount, generate_batch};
///
/// let count = RecordCount::new(3, 10).expect("count in range");
/// let batch = generate_batch(DataType::Order, count, &GenerationOptions::default());
///
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch.field_names(), ["produkt", "menge", "preis"]);
/// ```
#[must_use]
pub fn generate_batch(
    data_type: DataType,
    count: RecordCount,
    options: &GenerationOptions,
) -> Batch {
    debug!(
        data_type = %data_type,
        count = count.get(),
        locale = %options.locale,
        seeded = options.seed.is_some(),
        "generating batch"
    );
    let mut generator = FieldGenerator::new(options);
    let records = (0..count.get())
        .map(|_| assemble(data_type, &mut generator, options))
        .collect();
    Batch { records }
}
