use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::Serialize;
use tracing::debug;

use numeral_core::explain::Direction;
use numeral_core::{DecodeOptions, EncodeOptions};

use super::convert_ops::convert_auto;

/// One JSONL output line.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub input: String,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert every non-empty, non-comment line of `reader` and write JSONL to `writer`.
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    encode_options: &EncodeOptions,
    decode_options: &DecodeOptions,
) -> Result<BatchSummary, BatchError> {
    let mut summary = BatchSummary::default();

    for line in reader.lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }

        let (direction, result) = convert_auto(input, encode_options, decode_options);
        summary.total += 1;
        let record = match result {
            Ok(output) => {
                summary.converted += 1;
                BatchRecord {
                    input: input.to_string(),
                    direction,
                    output: Some(output),
                    error: None,
                }
            }
            Err(e) => {
                summary.failed += 1;
                debug!(input, error = %e, "batch line failed");
                BatchRecord {
                    input: input.to_string(),
                    direction,
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        };

        serde_json::to_writer(&mut writer, &record)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(summary)
}

pub fn batch_cmd(
    input_file: &str,
    output_file: &str,
    encode_options: &EncodeOptions,
    decode_options: &DecodeOptions,
) {
    let input = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    let output = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );

    let summary = die!(
        run_batch(
            BufReader::new(input),
            BufWriter::new(output),
            encode_options,
            decode_options,
        ),
        "Batch failed: {}"
    );

    eprintln!(
        "Batch written: {} lines -> {}",
        summary.total, output_file
    );
    println!();
    println!("=== Summary ===");
    println!("  Total:      {}", summary.total);
    println!("  Converted:  {}", summary.converted);
    println!("  Failed:     {}", summary.failed);

    if summary.failed > 0 {
        process::exit(1);
    }
}
