use clap::{Parser, Subcommand};

use numeral_cli::commands::{batch_ops, config_ops, convert_ops};
use numeral_core::settings::settings;
use numeral_core::DecodeMode;

#[derive(Parser)]
#[command(name = "numeraltool", about = "Roman numeral conversion tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode integers as Roman numerals
    Encode {
        /// Values in 1..=3999
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Emit lowercase numerals
        #[arg(long)]
        lowercase: bool,
    },
    /// Decode Roman numerals to integers
    Decode {
        /// Numerals to decode
        #[arg(required = true)]
        numerals: Vec<String>,
        /// Sum every symbol instead of requiring canonical spelling
        #[arg(long)]
        additive: bool,
        /// Accept lowercase input
        #[arg(long)]
        ignore_case: bool,
    },
    /// Show the step-by-step conversion (digits encode, anything else decodes)
    Explain {
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the symbol table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a file line by line and write JSONL results
    Batch {
        /// Path to the input file (one value or numeral per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    numeral_cli::trace_init::init_tracing();
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        config_ops::load_config(path);
    }
    let s = settings();

    match cli.command {
        Command::Encode { values, lowercase } => {
            let mut options = s.encode_options();
            options.lowercase |= lowercase;
            convert_ops::encode_cmd(&values, &options);
        }
        Command::Decode {
            numerals,
            additive,
            ignore_case,
        } => {
            let mut options = s.decode_options();
            if additive {
                options.mode = DecodeMode::Additive;
            }
            options.accept_lowercase |= ignore_case;
            convert_ops::decode_cmd(&numerals, &options);
        }
        Command::Explain { input, json } => {
            convert_ops::explain_cmd(&input, json, &s.encode_options(), &s.decode_options());
        }
        Command::Table { json } => convert_ops::table_cmd(json),
        Command::Batch {
            input_file,
            output_file,
        } => batch_ops::batch_cmd(
            &input_file,
            &output_file,
            &s.encode_options(),
            &s.decode_options(),
        ),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
