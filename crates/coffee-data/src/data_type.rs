//! The closed set of record shapes.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;
use crate::record::fields;

/// Record shape requested by callers.
///
/// Parsing accepts the German canonical names and their English aliases,
/// ignoring case.
///
/// # Example
///
/// ```
/// use coffee_data::DataType;
///
/// assert_eq!("Bestellung".parse::<DataType>(), Ok(DataType::Order));
/// assert_eq!("order".parse::<DataType>(), Ok(DataType::Order));
/// assert!("kunde".parse::<DataType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Sign-up form (`registrierung`).
    Registration,
    /// Login form (`login`).
    Login,
    /// Customer profile (`profil`).
    Profile,
    /// Coffee order (`bestellung`).
    Order,
}

impl DataType {
    /// Every data type, in menu order.
    pub const ALL: [Self; 4] = [Self::Registration, Self::Login, Self::Profile, Self::Order];

    /// Canonical German name used in URLs and file output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registrierung",
            Self::Login => "login",
            Self::Profile => "profil",
            Self::Order => "bestellung",
        }
    }

    /// Field names of the base shape, in record order.
    ///
    /// Orders may carry more fields when customer data or an extra is
    /// requested.
    #[must_use]
    pub const fn base_fields(self) -> &'static [&'static str] {
        match self {
            Self::Registration => &[
                fields::BENUTZERNAME,
                fields::PASSWORT,
                fields::PASSWORT_WIEDERHOLEN,
                fields::AGB_AKZEPTIEREN,
            ],
            Self::Login => &[fields::BENUTZERNAME, fields::PASSWORT],
            Self::Profile => &[
                fields::NACHNAME,
                fields::VORNAME,
                fields::STRASSE,
                fields::STADT,
                fields::POSTLEITZAHL,
                fields::LAND,
                fields::TELEFONNUMMER,
                fields::ALTER,
                fields::GESCHLECHT,
                fields::EMAIL,
            ],
            Self::Order => &[fields::PRODUKT, fields::MENGE, fields::PREIS],
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "registrierung" | "registration" => Ok(Self::Registration),
            "login" => Ok(Self::Login),
            "profil" | "profile" => Ok(Self::Profile),
            "bestellung" | "order" => Ok(Self::Order),
            _ => Err(GenerationError::InvalidDataType {
                value: value.to_owned(),
            }),
        }
    }
}
