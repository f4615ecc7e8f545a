//! Knobs shared by every generation request.

use crate::catalogue::{City, Country, OrderExtra};
use crate::locale::Locale;

/// Whether generated credentials satisfy the validation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Usernames and passwords pass validation.
    #[default]
    Valid,
    /// Usernames carry a special character and passwords are too short.
    Invalid,
}

impl Validity {
    /// Map a `valid` flag to the matching mode.
    #[must_use]
    pub const fn from_flag(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    /// Whether this is [`Validity::Valid`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Order-specific enrichments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Append the customer block after the base order fields.
    pub with_customer: bool,
    /// Append one extra field after the base fields (and customer block).
    pub extra: Option<OrderExtra>,
}

/// Options applied to every record of a batch.
///
/// # Example
///
/// ```
/// use coffee_data::{City, GenerationOptions, Locale};
///
/// let options = GenerationOptions::default()
///     .with_locale(Locale::English)
///     .with_city(City::Hamburg)
///     .with_seed(2026);
///
/// assert_eq!(options.city, Some(City::Hamburg));
/// assert_eq!(options.seed, Some(2026));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Locale used by name, address and phone fakers.
    pub locale: Locale,
    /// Whether credentials should pass validation.
    pub validity: Validity,
    /// Pin every record to one catalogue city.
    pub city: Option<City>,
    /// Pin every record to one country.
    pub country: Option<Country>,
    /// Order enrichments; ignored by other shapes.
    pub order: OrderOptions,
    /// Seed for a reproducible batch; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl GenerationOptions {
    /// Replace the locale.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the validity mode.
    #[must_use]
    pub const fn with_validity(mut self, validity: Validity) -> Self {
        self.validity = validity;
        self
    }

    /// Pin the city.
    #[must_use]
    pub const fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    /// Pin the country.
    #[must_use]
    pub const fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    /// Replace the order enrichments.
    #[must_use]
    pub const fn with_order(mut self, order: OrderOptions) -> Self {
        self.order = order;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
