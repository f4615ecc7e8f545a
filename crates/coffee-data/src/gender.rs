//! Gender labels and the first-name pools they select.
//!
//! Profiles carry one of four gender labels. Only two of them have their own
//! first-name pool; the remaining labels draw from the locale's generic
//! first-name faker.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Gender label stored on profile and customer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male.
    Maennlich,
    /// Female.
    Weiblich,
    /// Non-binary.
    Divers,
    /// Not specified.
    KeineAngabe,
}

/// Which first-name source a gender draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Draw from [`MALE_FIRST_NAMES`].
    Male,
    /// Draw from [`FEMALE_FIRST_NAMES`].
    Female,
    /// Draw from the locale's generic first-name faker.
    Neutral,
}

/// First names used for [`Gender::Maennlich`].
pub const MALE_FIRST_NAMES: &[&str] = &[
    "Lukas",
    "Jonas",
    "Maximilian",
    "Felix",
    "Leon",
    "Paul",
    "Tobias",
    "Florian",
    "Matthias",
    "Stefan",
    "Piotr",
    "Tomasz",
    "Daan",
    "Lars",
    "Reto",
];

/// First names used for [`Gender::Weiblich`].
pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Anna",
    "Lea",
    "Sophie",
    "Marie",
    "Laura",
    "Julia",
    "Katharina",
    "Hannah",
    "Lena",
    "Johanna",
    "Agnieszka",
    "Magdalena",
    "Sanne",
    "Emma",
    "Claudia",
];

impl Gender {
    /// Every gender label, in display order.
    pub const ALL: [Self; 4] = [
        Self::Maennlich,
        Self::Weiblich,
        Self::Divers,
        Self::KeineAngabe,
    ];

    /// Label written to records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Maennlich => "Männlich",
            Self::Weiblich => "Weiblich",
            Self::Divers => "Divers",
            Self::KeineAngabe => "Keine Angabe",
        }
    }

    /// First-name source for this gender.
    #[must_use]
    pub const fn name_style(self) -> NameStyle {
        match self {
            Self::Maennlich => NameStyle::Male,
            Self::Weiblich => NameStyle::Female,
            Self::Divers | Self::KeineAngabe => NameStyle::Neutral,
        }
    }

    /// Pick a gender uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::KeineAngabe)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
