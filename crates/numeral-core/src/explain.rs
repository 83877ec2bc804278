//! Step-by-step breakdown of a conversion, for diagnostics.

use serde::Serialize;
use tracing::debug_span;

use crate::numeral::{
    encode_with, greedy_parts, scan, DecodeOptions, EncodeOptions, NumeralError, MAX_VALUE,
    MIN_VALUE,
};

/// Full diagnostic result for a single conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub direction: Direction,
    pub steps: Vec<ExplainStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

/// One symbol's contribution to the result.
#[derive(Debug, Serialize)]
pub struct ExplainStep {
    pub symbol: &'static str,
    pub value: u32,
    /// Repetitions of the symbol (always 1 when decoding).
    pub count: u32,
    /// Byte offset in the input; only set when decoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Value still to encode after this step, or the running total when decoding.
    pub tally: u32,
}

/// Explain the greedy walk that encodes `arabic`.
pub fn explain_encode(arabic: u32) -> Result<ExplainResult, NumeralError> {
    explain_encode_with(arabic, &EncodeOptions::default())
}

/// Like [`explain_encode`], rendering the output with `options`.
pub fn explain_encode_with(
    arabic: u32,
    options: &EncodeOptions,
) -> Result<ExplainResult, NumeralError> {
    let _span = debug_span!("explain_encode", arabic).entered();
    if !(MIN_VALUE..=MAX_VALUE).contains(&arabic) {
        return Err(NumeralError::OutOfRange {
            value: i64::from(arabic),
        });
    }

    let mut remaining = arabic;
    let steps: Vec<ExplainStep> = greedy_parts(arabic)
        .map(|(numeral, count)| {
            remaining -= count * numeral.value;
            ExplainStep {
                symbol: numeral.symbol,
                value: numeral.value,
                count,
                position: None,
                tally: remaining,
            }
        })
        .collect();

    Ok(ExplainResult {
        input: arabic.to_string(),
        output: encode_with(arabic, options)?,
        direction: Direction::Encode,
        steps,
    })
}

/// Explain how `roman` is split into table symbols.
pub fn explain_decode(
    roman: &str,
    options: &DecodeOptions,
) -> Result<ExplainResult, NumeralError> {
    let _span = debug_span!("explain_decode", roman).entered();
    let tokens = scan(roman, options)?;

    let mut total = 0;
    let steps: Vec<ExplainStep> = tokens
        .iter()
        .map(|t| {
            total += t.symbol.value;
            ExplainStep {
                symbol: t.symbol.symbol,
                value: t.symbol.value,
                count: 1,
                position: Some(t.position),
                tally: total,
            }
        })
        .collect();

    Ok(ExplainResult {
        input: roman.to_string(),
        output: total.to_string(),
        direction: Direction::Decode,
        steps,
    })
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    let verb = match result.direction {
        Direction::Encode => "Encode",
        Direction::Decode => "Decode",
    };
    out.push_str(&format!(
        "=== {} {} -> {} ({} steps) ===\n",
        verb,
        result.input,
        result.output,
        result.steps.len(),
    ));

    for (i, step) in result.steps.iter().enumerate() {
        match result.direction {
            Direction::Encode => out.push_str(&format!(
                "  step[{}]: {:<2} x{} = {:<5} remaining={}\n",
                i,
                step.symbol,
                step.count,
                step.value * step.count,
                step.tally,
            )),
            Direction::Decode => out.push_str(&format!(
                "  step[{}]: @{:<2} {:<2} +{:<5} total={}\n",
                i,
                step.position.unwrap_or_default(),
                step.symbol,
                step.value,
                step.tally,
            )),
        }
    }

    out
}
