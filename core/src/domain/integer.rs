//! Arbitrary-size decimal integers.
//!
//! The spiral rule only needs ordering and parity, so integers are kept as
//! normalised digit strings and never overflow.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A signed base-10 integer of any size.
///
/// Stored without leading zeros; zero is never negative, so derived
/// equality and hashing agree with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    negative: bool,
    digits: String,
}

impl Integer {
    /// Parse an optional `+`/`-` sign followed by ASCII digits.
    pub fn parse(token: &str) -> Option<Self> {
        let (negative, body) = match token.as_bytes().first() {
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            _ => (false, token),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = body.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && self.digits != "0"
    }

    pub fn is_odd(&self) -> bool {
        self.digits
            .as_bytes()
            .last()
            .is_some_and(|d| (d - b'0') % 2 == 1)
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.digits.parse().ok()
    }

    pub fn to_usize(&self) -> Option<usize> {
        if self.negative {
            return None;
        }
        self.digits.parse().ok()
    }
}

fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.digits, &other.digits),
            (true, true) => cmp_magnitude(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Integer {
    fn eq(&self, other: &i64) -> bool {
        self.to_i64() == Some(*other)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self {
            negative: false,
            digits: value.to_string(),
        }
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::NonIntegerToken {
            token: s.to_string(),
            position: 0,
        })
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.digits)
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// JSON numbers when the value fits 64 bits, decimal strings otherwise.
impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if let Some(v) = self.to_i64() {
            serializer.serialize_i64(v)
        } else if let Some(v) = self.to_u64() {
            serializer.serialize_u64(v)
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}
