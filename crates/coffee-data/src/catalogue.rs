//! Fixed catalogues: products, countries, cities and order extras.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// Products on the coffee-shop menu.
pub const PRODUCTS: [&str; 5] = ["Kaffee", "Espresso", "Latte", "Cappuccino", "Mokka"];

/// Discount percentages an order may carry.
pub const DISCOUNT_PERCENTAGES: [i64; 5] = [0, 5, 10, 15, 20];

/// Country written to profile and customer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Germany.
    Deutschland,
    /// Poland.
    Polen,
    /// Austria.
    Oesterreich,
    /// The Netherlands.
    Niederlande,
    /// Switzerland.
    Schweiz,
}

impl Country {
    /// Every country in the catalogue.
    pub const ALL: [Self; 5] = [
        Self::Deutschland,
        Self::Polen,
        Self::Oesterreich,
        Self::Niederlande,
        Self::Schweiz,
    ];

    /// German country name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deutschland => "Deutschland",
            Self::Polen => "Polen",
            Self::Oesterreich => "Österreich",
            Self::Niederlande => "Niederlande",
            Self::Schweiz => "Schweiz",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "deutschland" => Ok(Self::Deutschland),
            "polen" => Ok(Self::Polen),
            "österreich" | "oesterreich" => Ok(Self::Oesterreich),
            "niederlande" => Ok(Self::Niederlande),
            "schweiz" => Ok(Self::Schweiz),
            _ => Err(GenerationError::UnknownCountry {
                value: value.to_owned(),
            }),
        }
    }
}

/// A catalogue city with a fixed postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    /// Berlin, 10115.
    Berlin,
    /// Hamburg, 20095.
    Hamburg,
    /// München, 80331.
    Muenchen,
    /// Köln, 50667.
    Koeln,
    /// Frankfurt, 60311.
    Frankfurt,
}

impl City {
    /// Every city in the catalogue.
    pub const ALL: [Self; 5] = [
        Self::Berlin,
        Self::Hamburg,
        Self::Muenchen,
        Self::Koeln,
        Self::Frankfurt,
    ];

    /// City name as written to records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Berlin => "Berlin",
            Self::Hamburg => "Hamburg",
            Self::Muenchen => "München",
            Self::Koeln => "Köln",
            Self::Frankfurt => "Frankfurt",
        }
    }

    /// Postal code looked up for the city.
    #[must_use]
    pub const fn postal_code(self) -> &'static str {
        match self {
            Self::Berlin => "10115",
            Self::Hamburg => "20095",
            Self::Muenchen => "80331",
            Self::Koeln => "50667",
            Self::Frankfurt => "60311",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for City {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "berlin" => Ok(Self::Berlin),
            "hamburg" => Ok(Self::Hamburg),
            "münchen" | "muenchen" | "munich" => Ok(Self::Muenchen),
            "köln" | "koeln" | "cologne" => Ok(Self::Koeln),
            "frankfurt" => Ok(Self::Frankfurt),
            _ => Err(GenerationError::UnknownCity {
                value: value.to_owned(),
            }),
        }
    }
}

/// Optional extra field appended to order records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderExtra {
    /// Discount percentage (`rabatt`).
    Rabatt,
    /// Shipping cost (`versandkosten`).
    Versandkosten,
    /// Gift wrapping flag (`geschenk`).
    Geschenk,
}

impl OrderExtra {
    /// Every order extra.
    pub const ALL: [Self; 3] = [Self::Rabatt, Self::Versandkosten, Self::Geschenk];

    /// Field name the extra is written under.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Rabatt => crate::record::fields::RABATT,
            Self::Versandkosten => crate::record::fields::VERSANDKOSTEN,
            Self::Geschenk => crate::record::fields::GESCHENK,
        }
    }
}

impl fmt::Display for OrderExtra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for OrderExtra {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rabatt" | "discount" => Ok(Self::Rabatt),
            "versandkosten" | "shipping" => Ok(Self::Versandkosten),
            "geschenk" | "gift" => Ok(Self::Geschenk),
            _ => Err(GenerationError::UnknownOrderExtra {
                value: value.to_owned(),
            }),
        }
    }
}
