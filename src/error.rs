use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Clipboard(arboard::Error),
    Io(io::Error),
    Generic(&'static str),
    ConfigError(config::ConfigError),
    NoCharacterClass,
    InvalidLength(String),
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Self::Clipboard(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Clipboard(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::NoCharacterClass => write!(
                f,
                "To generate password you must select at least one checkbox"
            ),
            Self::InvalidLength(input) => write!(
                f,
                "Password length must be a number between {} and {}, got '{input}'",
                crate::form::MIN_PASSWORD_LENGTH,
                crate::form::MAX_PASSWORD_LENGTH
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
