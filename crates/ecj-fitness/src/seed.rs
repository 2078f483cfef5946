//! Seed names
//!
//! A seed directory is named after the random seed of the run it holds. The
//! name is kept verbatim for labels and file names, and parsed once into an
//! integer used for column ordering.

use std::{cmp::Ordering, fmt, num::ParseIntError, str::FromStr};

/// Prefix of a seed's column label in the report header
pub const SEED_LABEL_PREFIX: &str = "Seed_";

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("seed name '{name}' is not an integer")]
pub struct InvalidSeedName {
    pub name: String,
    pub source: ParseIntError,
}

/// Integer-valued seed name
///
/// Ordering follows the numeric value, so `2` sorts before `10`. Names with
/// the same value but different text (`7` and `07`) fall back to the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedName {
    text: String,
    value: i64,
}

impl SeedName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Column label used in the report header (`Seed_<name>`)
    #[must_use]
    pub fn column_label(&self) -> String {
        format!("{SEED_LABEL_PREFIX}{}", self.text)
    }
}

impl FromStr for SeedName {
    type Err = InvalidSeedName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<i64>().map_err(|source| InvalidSeedName {
            name: s.to_owned(),
            source,
        })?;
        Ok(Self {
            text: s.to_owned(),
            value,
        })
    }
}

impl fmt::Display for SeedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

impl PartialOrd for SeedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeedName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.text.cmp(&other.text))
    }
}
