//! Identifier and value newtypes shared by the catalog and the cart.

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Plant identifier as issued by the catalog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlantId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u64>() {
            Ok(id) => Ok(PlantId(id)),
            Err(_) => bail!("invalid plant id '{}'", s.trim()),
        }
    }
}

/// Category label. Matching is exact; no case folding.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category(value.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price in minor units (hundredths) so line totals and the grand total add
/// up exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    minor: u64,
}

impl Price {
    pub const ZERO: Price = Price { minor: 0 };

    /// Build a price from whole currency units.
    pub fn from_major(units: u64) -> Self {
        Price {
            minor: units.saturating_mul(100),
        }
    }

    pub fn from_minor(minor: u64) -> Self {
        Price { minor }
    }

    /// Convert an API number into a price, rounding to the nearest hundredth.
    pub fn from_decimal(value: f64) -> Result<Self> {
        if !value.is_finite() {
            bail!("price must be a finite number, got {value}");
        }
        if value < 0.0 {
            bail!("price must not be negative, got {value}");
        }
        let minor = (value * 100.0).round();
        if minor > u64::MAX as f64 {
            bail!("price {value} is out of range");
        }
        Ok(Price {
            minor: minor as u64,
        })
    }

    pub fn minor_units(&self) -> u64 {
        self.minor
    }

    pub fn times(&self, quantity: u32) -> Price {
        Price {
            minor: self.minor.saturating_mul(u64::from(quantity)),
        }
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price {
            minor: self.minor.saturating_add(other.minor),
        }
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

// Shortest decimal form: "200", "12.5", "12.05".
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.minor / 100;
        let cents = self.minor % 100;
        match (cents, cents % 10) {
            (0, _) => write!(f, "{major}"),
            (_, 0) => write!(f, "{major}.{}", cents / 10),
            _ => write!(f, "{major}.{cents:02}"),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Price::from_decimal(raw).map_err(serde::de::Error::custom)
    }
}
