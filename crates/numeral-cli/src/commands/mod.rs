macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod batch_ops;
pub mod config_ops;
pub mod convert_ops;

use numeral_core::NumeralError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Numeral(#[from] NumeralError),
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
}
