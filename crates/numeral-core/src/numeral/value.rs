use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::decode::decode;
use super::table::{greedy_parts, MAX_VALUE, MIN_VALUE};
use super::NumeralError;

/// An integer known to have a classical Roman representation.
///
/// Displays as its canonical numeral and parses strictly, so
/// `n.to_string().parse::<RomanNumeral>()` always returns `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    pub const MIN: RomanNumeral = RomanNumeral(MIN_VALUE as u16);
    pub const MAX: RomanNumeral = RomanNumeral(MAX_VALUE as u16);

    pub fn new(value: u32) -> Result<Self, NumeralError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(RomanNumeral(value as u16))
        } else {
            Err(NumeralError::OutOfRange {
                value: i64::from(value),
            })
        }
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        RomanNumeral::new(value)
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map_err(|_| NumeralError::OutOfRange { value })
            .and_then(RomanNumeral::new)
    }
}

impl From<RomanNumeral> for u32 {
    fn from(n: RomanNumeral) -> u32 {
        n.value()
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (numeral, count) in greedy_parts(self.value()) {
            for _ in 0..count {
                f.write_str(numeral.symbol)?;
            }
        }
        Ok(())
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).and_then(RomanNumeral::new)
    }
}

impl Serialize for RomanNumeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RomanNumeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
