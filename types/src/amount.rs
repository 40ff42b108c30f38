//! Signed fixed-point amounts with 8 fractional digits.
//!
//! A [`Fixed8`] stores raw units in an `i64`; one whole unit is `10^8` raw.
//! Amounts are signed so net asset results can express mints (negative values).

use crate::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Raw units per whole unit.
pub const FIXED8_UNIT: i64 = 100_000_000;

/// Number of fractional decimal digits.
pub const FIXED8_DECIMALS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed8(i64);

impl Fixed8 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(FIXED8_UNIT);
    /// The smallest representable positive amount.
    pub const EPSILON: Self = Self(1);
    pub const MAX: Self = Self(i64::MAX);

    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Whole units to [`Fixed8`], `None` on overflow.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(FIXED8_UNIT).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let unit = FIXED8_UNIT as u64;
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / unit,
            abs % unit,
            width = FIXED8_DECIMALS
        )
    }
}

impl FromStr for Fixed8 {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidAmount(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };
        if whole.is_empty()
            || frac.len() > FIXED8_DECIMALS
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let mut frac_raw: i64 = 0;
        for (i, digit) in frac.bytes().enumerate() {
            frac_raw += i64::from(digit - b'0') * 10i64.pow((FIXED8_DECIMALS - 1 - i) as u32);
        }
        let raw = whole
            .checked_mul(FIXED8_UNIT)
            .and_then(|w| w.checked_add(frac_raw))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -raw } else { raw }))
    }
}

impl Serialize for Fixed8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fixed8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
