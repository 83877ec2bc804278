use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;

use numeral_core::explain::{self, Direction, ExplainResult};
use numeral_core::{
    decode_with, encode_with, symbol_table, DecodeOptions, EncodeOptions, NumeralError,
    NumeralSymbol,
};

use super::CommandError;

/// Digits (with an optional leading minus) are encoded; anything else is decoded.
pub fn detect_direction(input: &str) -> Direction {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Direction::Encode
    } else {
        Direction::Decode
    }
}

/// Parse a decimal argument, keeping negative and oversized values so they
/// report as out of range.
pub fn parse_arabic(input: &str) -> Result<u32, CommandError> {
    let value: i64 = input.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => {
            CommandError::from(NumeralError::OutOfRange { value: i64::MAX })
        }
        IntErrorKind::NegOverflow => {
            CommandError::from(NumeralError::OutOfRange { value: i64::MIN })
        }
        _ => CommandError::NotAnInteger(input.to_string()),
    })?;
    u32::try_from(value).map_err(|_| NumeralError::OutOfRange { value }.into())
}

pub fn encode_arg(input: &str, options: &EncodeOptions) -> Result<String, CommandError> {
    let arabic = parse_arabic(input)?;
    Ok(encode_with(arabic, options)?)
}

/// Convert in whichever direction the input looks like.
pub fn convert_auto(
    input: &str,
    encode_options: &EncodeOptions,
    decode_options: &DecodeOptions,
) -> (Direction, Result<String, CommandError>) {
    match detect_direction(input) {
        Direction::Encode => (Direction::Encode, encode_arg(input, encode_options)),
        Direction::Decode => (
            Direction::Decode,
            decode_with(input, decode_options)
                .map(|n| n.to_string())
                .map_err(CommandError::from),
        ),
    }
}

pub fn encode_cmd(values: &[String], options: &EncodeOptions) {
    for value in values {
        let roman = die!(encode_arg(value, options), "Error: {}");
        println!("{roman}");
    }
}

pub fn decode_cmd(numerals: &[String], options: &DecodeOptions) {
    for numeral in numerals {
        let n = die!(decode_with(numeral, options), "Error: {}");
        println!("{n}");
    }
}

/// Explain a conversion in whichever direction the input looks like.
pub fn explain_auto(
    input: &str,
    encode_options: &EncodeOptions,
    decode_options: &DecodeOptions,
) -> Result<ExplainResult, CommandError> {
    match detect_direction(input) {
        Direction::Encode => {
            let arabic = parse_arabic(input)?;
            Ok(explain::explain_encode_with(arabic, encode_options)?)
        }
        Direction::Decode => Ok(explain::explain_decode(input, decode_options)?),
    }
}

pub fn explain_cmd(
    input: &str,
    json: bool,
    encode_options: &EncodeOptions,
    decode_options: &DecodeOptions,
) {
    let result = die!(
        explain_auto(input, encode_options, decode_options),
        "Error: {}"
    );

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&result), "JSON serialization failed: {}")
        );
    } else {
        print!("{}", explain::format_text(&result));
    }
}

#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(flatten)]
    symbol: NumeralSymbol,
    subtractive: bool,
}

fn table_rows() -> Vec<TableRow> {
    symbol_table()
        .iter()
        .map(|s| TableRow {
            symbol: *s,
            subtractive: s.symbol.len() == 2,
        })
        .collect()
}

pub fn table_cmd(json: bool) {
    let rows = table_rows();
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&rows), "JSON serialization failed: {}")
        );
        return;
    }
    for row in &rows {
        let kind = if row.subtractive { "subtractive" } else { "additive" };
        println!("{:<2} {:>5}  {}", row.symbol.symbol, row.symbol.value, kind);
    }
}
