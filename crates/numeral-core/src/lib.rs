//! Conversion between integers and classical Roman numerals.

pub mod explain;
pub mod numeral;
pub mod settings;

pub use numeral::{
    decode, decode_with, encode, encode_with, symbol_table, DecodeMode, DecodeOptions,
    EncodeOptions, FormatIssue, NumeralError, NumeralSymbol, RomanNumeral, MAX_VALUE, MIN_VALUE,
};
