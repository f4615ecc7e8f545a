//! Records and their scalar field values.
//!
//! A [`Record`] keeps its fields in insertion order so every export format
//! sees the same column order the assembler produced.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical field names shared by the record shapes.
pub mod fields {
    /// Username of a registration, login or customer.
    pub const BENUTZERNAME: &str = "benutzername";
    /// Password token.
    pub const PASSWORT: &str = "passwort";
    /// Repeated password on registration.
    pub const PASSWORT_WIEDERHOLEN: &str = "passwort_wiederholen";
    /// Whether the terms and conditions were accepted.
    pub const AGB_AKZEPTIEREN: &str = "agb_akzeptieren";
    /// Family name.
    pub const NACHNAME: &str = "nachname";
    /// Given name.
    pub const VORNAME: &str = "vorname";
    /// Street and building number.
    pub const STRASSE: &str = "straße";
    /// City name.
    pub const STADT: &str = "stadt";
    /// Postal code.
    pub const POSTLEITZAHL: &str = "postleitzahl";
    /// Country name.
    pub const LAND: &str = "land";
    /// Phone number.
    pub const TELEFONNUMMER: &str = "telefonnummer";
    /// Age in years.
    pub const ALTER: &str = "alter";
    /// Gender label.
    pub const GESCHLECHT: &str = "geschlecht";
    /// E-mail address.
    pub const EMAIL: &str = "email";
    /// Ordered product.
    pub const PRODUKT: &str = "produkt";
    /// Ordered quantity.
    pub const MENGE: &str = "menge";
    /// Total price rendered with a euro suffix.
    pub const PREIS: &str = "preis";
    /// Discount in percent.
    pub const RABATT: &str = "rabatt";
    /// Shipping cost rendered with a euro suffix.
    pub const VERSANDKOSTEN: &str = "versandkosten";
    /// Whether the order is wrapped as a gift.
    pub const GESCHENK: &str = "geschenk";
}

/// A scalar field value. Never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag.
    Flag(bool),
    /// Whole number.
    Integer(i64),
    /// Free text, including formatted money amounts.
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// An ordered mapping from field name to value.
///
/// # Example
///
/// ```
/// use coffee_data::{FieldValue, Record};
///
/// let record = Record::new().with_field("produkt", "Kaffee").with_field("menge", 2_i64);
///
/// assert_eq!(record.field_names().collect::<Vec<_>>(), ["produkt", "menge"]);
/// assert_eq!(record.get("menge"), Some(&FieldValue::Integer(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, FieldValue>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing the value in place if the name already exists.
    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append a field, replacing the value in place if the name already exists.
    pub fn insert(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.0.insert(name.to_owned(), value.into());
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Field values in order.
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.0.values()
    }

    /// Name/value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both records carry the same field names in the same order.
    #[must_use]
    pub fn has_same_fields(&self, other: &Self) -> bool {
        self.field_names().eq(other.field_names())
    }
}
