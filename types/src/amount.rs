//! Token quantities.
//!
//! Quantities travel on the wire as 8-byte big-endian unsigned integers, so
//! the largest representable amount is `u64::MAX` base units. How many of
//! those make one display unit is fixed per token by its GENESIS decimals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A token quantity in base units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(u64);

impl TokenAmount {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Sum amounts, returning `None` as soon as the total leaves the
    /// representable range.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |total, amount| total.checked_add(amount))
    }

    pub fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// Render the amount in display units for a token with `decimals`
    /// decimal places, e.g. `12345` with 2 decimals is `"123.45"`.
    pub fn display_with_decimals(&self, decimals: u8) -> String {
        if decimals == 0 {
            return self.0.to_string();
        }
        let digits = format!("{:0>width$}", self.0, width = decimals as usize + 1);
        let (whole, frac) = digits.split_at(digits.len() - decimals as usize);
        format!("{whole}.{frac}")
    }
}

impl From<u64> for TokenAmount {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
