use std::fs;

pub fn settings_export() {
    print!("{}", numeral_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        numeral_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: encode.lowercase={}, decode.mode={:?}, decode.accept_lowercase={}",
        s.encode.lowercase, s.decode.mode, s.decode.accept_lowercase
    );
}

/// Install a custom settings file as the process-wide settings.
pub fn load_config(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        numeral_core::settings::init_custom(content),
        "Error loading {file}: {}"
    );
}
