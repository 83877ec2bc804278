use tracing::{debug, debug_span};

use super::table::{greedy_parts, MAX_VALUE, MIN_VALUE};
use super::NumeralError;

/// Rendering options for [`encode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit lowercase letters (`xiv`), as used for page numbers.
    pub lowercase: bool,
}

/// Encode an integer as its canonical Roman numeral.
///
/// Values outside `MIN_VALUE..=MAX_VALUE` (zero included) fail with
/// [`NumeralError::OutOfRange`].
pub fn encode(arabic: u32) -> Result<String, NumeralError> {
    encode_with(arabic, &EncodeOptions::default())
}

/// Encode an integer with explicit rendering options.
pub fn encode_with(arabic: u32, options: &EncodeOptions) -> Result<String, NumeralError> {
    let _span = debug_span!("encode", arabic).entered();

    if !(MIN_VALUE..=MAX_VALUE).contains(&arabic) {
        debug!(arabic, "rejected: out of range");
        return Err(NumeralError::OutOfRange {
            value: i64::from(arabic),
        });
    }

    let mut out = String::new();
    for (numeral, count) in greedy_parts(arabic) {
        for _ in 0..count {
            out.push_str(numeral.symbol);
        }
    }

    if options.lowercase {
        out.make_ascii_lowercase();
    }
    debug!(numeral = %out, "encoded");
    Ok(out)
}
