use std::borrow::Cow;

use serde::Deserialize;
use tracing::{debug, debug_span};

use super::encode::encode;
use super::table::{is_numeral_letter, symbol_table, NumeralSymbol, MAX_VALUE};
use super::{FormatIssue, NumeralError};

/// How strictly [`decode_with`] treats spellings that `encode` never produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Only canonical spellings are accepted (`IIII` is rejected).
    #[default]
    Strict,
    /// Every recognized symbol is summed (`IIII` is 4).
    Additive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub mode: DecodeMode,
    /// Uppercase ASCII input before scanning.
    pub accept_lowercase: bool,
}

impl DecodeOptions {
    pub fn additive() -> Self {
        Self {
            mode: DecodeMode::Additive,
            ..Self::default()
        }
    }
}

/// A symbol consumed from the input, with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub position: usize,
    pub symbol: &'static NumeralSymbol,
}

/// Decode a canonical Roman numeral.
pub fn decode(roman: &str) -> Result<u32, NumeralError> {
    decode_with(roman, &DecodeOptions::default())
}

/// Decode a Roman numeral with explicit options.
pub fn decode_with(roman: &str, options: &DecodeOptions) -> Result<u32, NumeralError> {
    let _span = debug_span!("decode", roman, mode = ?options.mode).entered();
    let tokens = scan(roman, options)?;
    let total: u32 = tokens.iter().map(|t| t.symbol.value).sum();
    debug!(total, tokens = tokens.len(), "decoded");
    Ok(total)
}

/// Split the input into table symbols and apply the mode's acceptance rules.
///
/// At each position the first table entry whose text prefixes the rest of
/// the input wins. The table is descending, so this is the longest match.
pub(crate) fn scan(roman: &str, options: &DecodeOptions) -> Result<Vec<Token>, NumeralError> {
    if roman.is_empty() {
        debug!("rejected: empty input");
        return Err(NumeralError::invalid(roman, FormatIssue::Empty));
    }

    let normalized: Cow<'_, str> = if options.accept_lowercase {
        Cow::Owned(roman.to_ascii_uppercase())
    } else {
        Cow::Borrowed(roman)
    };

    if let Some((position, ch)) = normalized
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_numeral_letter(c))
    {
        debug!(?ch, position, "rejected: unexpected character");
        return Err(NumeralError::invalid(
            roman,
            FormatIssue::UnexpectedChar { ch, position },
        ));
    }

    let mut tokens = Vec::new();
    let mut total: u32 = 0;
    let mut pos = 0;
    while pos < normalized.len() {
        let rest = &normalized[pos..];
        let Some(symbol) = symbol_table().iter().find(|s| rest.starts_with(s.symbol)) else {
            // Every numeral letter is a table entry on its own.
            let ch = rest.chars().next().unwrap_or_default();
            return Err(NumeralError::invalid(
                roman,
                FormatIssue::UnexpectedChar { ch, position: pos },
            ));
        };
        total += symbol.value;
        if total > MAX_VALUE {
            debug!(position = pos, "rejected: value too large");
            return Err(NumeralError::invalid(roman, FormatIssue::TooLarge));
        }
        tokens.push(Token {
            position: pos,
            symbol,
        });
        pos += symbol.symbol.len();
    }

    if options.mode == DecodeMode::Strict {
        let canonical = encode(total)?;
        if canonical != normalized {
            debug!(%canonical, "rejected: non-canonical");
            return Err(NumeralError::invalid(
                roman,
                FormatIssue::NonCanonical { canonical },
            ));
        }
    }

    Ok(tokens)
}
