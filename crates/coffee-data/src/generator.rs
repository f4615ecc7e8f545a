//! Per-field random value producers.
//!
//! A [`FieldGenerator`] owns its random source, so a generator built from a
//! fixed seed replays the same values in the same order. Names, addresses
//! and phone numbers come from `fake` in the configured locale; everything
//! else is drawn from the fixed catalogues.

use std::ops::RangeInclusive;

use fake::faker::address::raw::{BuildingNumber, CityName, PostCode, StreetName};
use fake::faker::internet::raw::{FreeEmailProvider, Username};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalogue::{City, Country, DISCOUNT_PERCENTAGES, PRODUCTS};
use crate::gender::{FEMALE_FIRST_NAMES, Gender, MALE_FIRST_NAMES, NameStyle};
use crate::locale::{Locale, localized};
use crate::money::EuroAmount;
use crate::options::{GenerationOptions, Validity};
use crate::validation::{
    PASSWORD_MAX, PASSWORD_MIN, USERNAME_MAX, USERNAME_MIN, pad_password, sanitize_username,
};

/// Ages assigned to profiles and customers.
pub const AGE_RANGE: RangeInclusive<i64> = 18..=99;

/// Quantities assigned to orders.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=5;

/// Unit prices in cents, 1.00 € to 10.00 €.
pub const UNIT_PRICE_CENTS: RangeInclusive<u32> = 100..=1_000;

/// Shipping costs in cents, 5.00 € to 20.00 €.
pub const SHIPPING_CENTS: RangeInclusive<u32> = 500..=2_000;

/// Characters injected into usernames in invalid mode.
const SPECIAL_CHARACTERS: [char; 8] = ['!', '@', '#', '$', '%', '&', '*', '?'];

/// Appended to passwords that come out shorter than the minimum.
const PASSWORD_FALLBACK: char = 'x';

/// Random field values for one batch.
///
/// # Example
///
/// ```
/// use coffee_data::{FieldGenerator, GenerationOptions, is_valid_username};
///
/// let options = GenerationOptions::default().with_seed(42);
/// let mut first = FieldGenerator::new(&options);
/// let mut second = FieldGenerator::new(&options);
///
/// let username = first.username();
/// assert!(is_valid_username(&username));
/// assert_eq!(username, second.username());
/// ```
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    rng: ChaCha8Rng,
    locale: Locale,
    validity: Validity,
}

impl FieldGenerator {
    /// Build a generator, seeded from `options.seed` when present.
    #[must_use]
    pub fn new(options: &GenerationOptions) -> Self {
        let rng = options.seed.map_or_else(
            || ChaCha8Rng::from_rng(&mut rand::rng()),
            ChaCha8Rng::seed_from_u64,
        );
        Self {
            rng,
            locale: options.locale,
            validity: options.validity,
        }
    }

    /// Username built from a locale-aware fake, sanitized to
    /// `[A-Za-z0-9_]` and padded with digits to the minimum length.
    ///
    /// In invalid mode one special character is injected.
    pub fn username(&mut self) -> String {
        let name = self.valid_username();
        match self.validity {
            Validity::Valid => name,
            Validity::Invalid => self.inject_special_character(name),
        }
    }

    /// Alphanumeric password of 8 to 16 characters.
    ///
    /// In invalid mode the password is shorter than the minimum.
    pub fn password(&mut self) -> String {
        match self.validity {
            Validity::Valid => {
                let length = self.rng.random_range(PASSWORD_MIN..=PASSWORD_MAX);
                pad_password(self.alphanumeric(length), PASSWORD_FALLBACK)
            }
            Validity::Invalid => {
                let length = self.rng.random_range(1..PASSWORD_MIN);
                self.alphanumeric(length)
            }
        }
    }

    /// E-mail address `local@domain`; always well formed.
    pub fn email(&mut self) -> String {
        let local = self.valid_username().to_lowercase();
        let domain = localized!(self.locale, FreeEmailProvider, &mut self.rng);
        format!("{local}@{domain}")
    }

    /// First name conditioned on the gender.
    pub fn first_name(&mut self, gender: Gender) -> String {
        match gender.name_style() {
            NameStyle::Male => self.pick(MALE_FIRST_NAMES),
            NameStyle::Female => self.pick(FEMALE_FIRST_NAMES),
            NameStyle::Neutral => localized!(self.locale, FirstName, &mut self.rng),
        }
    }

    /// Locale-aware family name.
    pub fn last_name(&mut self) -> String {
        localized!(self.locale, LastName, &mut self.rng)
    }

    /// Street name followed by a building number.
    pub fn street(&mut self) -> String {
        let street = localized!(self.locale, StreetName, &mut self.rng);
        let number = localized!(self.locale, BuildingNumber, &mut self.rng);
        format!("{street} {number}")
    }

    /// City and postal code.
    ///
    /// A pinned catalogue city uses its fixed postal code; otherwise both
    /// values come from the locale's fakers.
    pub fn city_with_postal_code(&mut self, pinned: Option<City>) -> (String, String) {
        pinned.map_or_else(
            || {
                let city = localized!(self.locale, CityName, &mut self.rng);
                let postal_code = localized!(self.locale, PostCode, &mut self.rng);
                (city, postal_code)
            },
            |city| (city.label().to_owned(), city.postal_code().to_owned()),
        )
    }

    /// Country from the catalogue, or the pinned one.
    pub fn country(&mut self, pinned: Option<Country>) -> Country {
        pinned.unwrap_or_else(|| {
            Country::ALL
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(Country::Deutschland)
        })
    }

    /// Locale-aware phone number.
    pub fn phone_number(&mut self) -> String {
        localized!(self.locale, PhoneNumber, &mut self.rng)
    }

    /// Age in [`AGE_RANGE`].
    pub fn age(&mut self) -> i64 {
        self.rng.random_range(AGE_RANGE)
    }

    /// Uniformly drawn gender.
    pub fn gender(&mut self) -> Gender {
        Gender::random(&mut self.rng)
    }

    /// Product from [`PRODUCTS`].
    pub fn product(&mut self) -> &'static str {
        PRODUCTS.choose(&mut self.rng).copied().unwrap_or("Kaffee")
    }

    /// Quantity in [`QUANTITY_RANGE`].
    pub fn quantity(&mut self) -> u32 {
        self.rng.random_range(QUANTITY_RANGE)
    }

    /// Unit price in [`UNIT_PRICE_CENTS`].
    pub fn unit_price(&mut self) -> EuroAmount {
        EuroAmount::from_cents(self.rng.random_range(UNIT_PRICE_CENTS))
    }

    /// Discount percentage from [`DISCOUNT_PERCENTAGES`].
    pub fn discount(&mut self) -> i64 {
        DISCOUNT_PERCENTAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
    }

    /// Shipping cost in [`SHIPPING_CENTS`].
    pub fn shipping_cost(&mut self) -> EuroAmount {
        EuroAmount::from_cents(self.rng.random_range(SHIPPING_CENTS))
    }

    /// Coin flip.
    pub fn flag(&mut self) -> bool {
        self.rng.random()
    }

    fn valid_username(&mut self) -> String {
        let raw = localized!(self.locale, Username, &mut self.rng);
        let mut name: String = sanitize_username(&raw).chars().take(USERNAME_MAX).collect();
        while name.chars().count() < USERNAME_MIN {
            let digit = char::from_digit(self.rng.random_range(0..10), 10).unwrap_or('0');
            name.push(digit);
        }
        name
    }

    fn inject_special_character(&mut self, mut name: String) -> String {
        let position = self.rng.random_range(0..=name.chars().count());
        let byte_index = name
            .char_indices()
            .nth(position)
            .map_or(name.len(), |(index, _)| index);
        let special = SPECIAL_CHARACTERS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or('!');
        name.insert(byte_index, special);
        name
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        pool.choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_owned()
    }

    fn alphanumeric(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(self.rng.sample(Alphanumeric)))
            .collect()
    }
}
