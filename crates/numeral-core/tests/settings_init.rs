//! Custom settings install once per process, so this lives in its own test binary.

use numeral_core::settings::{init_custom, settings, SettingsError};
use numeral_core::{DecodeMode, DecodeOptions, EncodeOptions};

#[test]
fn custom_settings_install_once() {
    let custom = r#"
[encode]
lowercase = true

[decode]
mode = "additive"
"#;
    init_custom(custom.to_string()).unwrap();

    let other = r#"
[encode]
lowercase = false

[decode]
mode = "strict"
"#;
    let err = init_custom(other.to_string()).unwrap_err();
    assert!(matches!(err, SettingsError::AlreadyInitialized));

    let s = settings();
    assert_eq!(s.encode_options(), EncodeOptions { lowercase: true });
    assert_eq!(
        s.decode_options(),
        DecodeOptions {
            mode: DecodeMode::Additive,
            accept_lowercase: false,
        }
    );

    // Still rejected once the singleton has been read.
    assert!(matches!(
        init_custom(other.to_string()),
        Err(SettingsError::AlreadyInitialized)
    ));
}
