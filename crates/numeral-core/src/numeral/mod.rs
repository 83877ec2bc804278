//! Roman numeral conversion engine.
//!
//! Both directions share one descending symbol table: `encode` walks it
//! greedily, `decode` consumes the longest matching symbol at each position.

mod decode;
mod encode;
mod table;
mod value;


pub use decode::{decode, decode_with, DecodeMode, DecodeOptions};
pub use encode::{encode, encode_with, EncodeOptions};
pub use table::{symbol_table, NumeralSymbol, MAX_VALUE, MIN_VALUE};
pub use value::RomanNumeral;

pub(crate) use decode::scan;
pub(crate) use table::greedy_parts;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("{value} is outside the representable range 1..=3999")]
    OutOfRange { value: i64 },
    #[error("invalid numeral {input:?}: {issue}")]
    InvalidFormat { input: String, issue: FormatIssue },
}

/// Why a decode input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatIssue {
    #[error("empty input")]
    Empty,
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("value exceeds {}", MAX_VALUE)]
    TooLarge,
    #[error("non-canonical form, expected {canonical}")]
    NonCanonical { canonical: String },
}

impl NumeralError {
    pub(crate) fn invalid(input: &str, issue: FormatIssue) -> Self {
        NumeralError::InvalidFormat {
            input: input.to_string(),
            issue,
        }
    }
}
