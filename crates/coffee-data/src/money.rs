//! Euro amounts held in whole cents.

use std::fmt;
use std::str::FromStr;

const CENTS_PER_EURO: u32 = 100;

/// A non-negative euro amount in cents.
///
/// Rendered as `"{euros}.{cents:02} €"`, the format written into price and
/// shipping-cost fields.
///
/// # Example
///
/// ```
/// use coffee_data::EuroAmount;
///
/// let price = EuroAmount::from_cents(400).times(2);
/// assert_eq!(price.to_string(), "8.00 €");
/// assert_eq!("8.00 €".parse::<EuroAmount>(), Ok(price));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EuroAmount(u32);

impl EuroAmount {
    /// Wrap an amount given in cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(self) -> u32 {
        self.0
    }

    /// Multiply by a quantity, saturating at `u32::MAX` cents.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl fmt::Display for EuroAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let euros = self.0.div_euclid(CENTS_PER_EURO);
        let cents = self.0.rem_euclid(CENTS_PER_EURO);
        write!(f, "{euros}.{cents:02} €")
    }
}

/// Error returned when text is not a rendered [`EuroAmount`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a euro amount of the form '1.23 €'")]
pub struct EuroAmountParseError {
    /// The rejected text.
    pub value: String,
}

impl FromStr for EuroAmount {
    type Err = EuroAmountParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || EuroAmountParseError {
            value: value.to_owned(),
        };
        let amount = value.strip_suffix(" €").ok_or_else(invalid)?;
        let (euros, cents) = amount.split_once('.').ok_or_else(invalid)?;
        if cents.len() != 2 || !cents.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: u32 = euros.parse().map_err(|_| invalid())?;
        let fraction: u32 = cents.parse().map_err(|_| invalid())?;
        whole
            .checked_mul(CENTS_PER_EURO)
            .and_then(|total| total.checked_add(fraction))
            .map(Self)
            .ok_or_else(invalid)
    }
}
