//! Locales backing the fake-data generators.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// Locale used for names, addresses and phone numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// German (`de_DE`).
    #[default]
    German,
    /// English (`en`).
    English,
    /// French (`fr_FR`).
    French,
    /// Italian (`it_IT`).
    Italian,
    /// Portuguese (`pt_PT`).
    Portuguese,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 5] = [
        Self::German,
        Self::English,
        Self::French,
        Self::Italian,
        Self::Portuguese,
    ];

    /// Canonical locale code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::German => "de_DE",
            Self::English => "en",
            Self::French => "fr_FR",
            Self::Italian => "it_IT",
            Self::Portuguese => "pt_PT",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = GenerationError;

    /// Accepts the canonical code or its language prefix, ignoring case and
    /// treating `-` like `_`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "de" | "de_de" => Ok(Self::German),
            "en" | "en_us" | "en_gb" => Ok(Self::English),
            "fr" | "fr_fr" => Ok(Self::French),
            "it" | "it_it" => Ok(Self::Italian),
            "pt" | "pt_pt" => Ok(Self::Portuguese),
            _ => Err(GenerationError::UnknownLocale {
                value: value.to_owned(),
            }),
        }
    }
}

/// Run a raw `fake` faker in the given locale and return its `String` output.
macro_rules! localized {
    ($locale:expr, $faker:ident, $rng:expr) => {{
        use fake::Fake as _;
        let value: String = match $locale {
            $crate::locale::Locale::German => $faker(fake::locales::DE_DE).fake_with_rng($rng),
            $crate::locale::Locale::English => $faker(fake::locales::EN).fake_with_rng($rng),
            $crate::locale::Locale::French => $faker(fake::locales::FR_FR).fake_with_rng($rng),
            $crate::locale::Locale::Italian => $faker(fake::locales::IT_IT).fake_with_rng($rng),
            $crate::locale::Locale::Portuguese => {
                $faker(fake::locales::PT_PT).fake_with_rng($rng)
            }
        };
        value
    }};
}

pub(crate) use localized;
