use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::form::{DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::notification::DEFAULT_AUTO_CLOSE;
use crate::password_generator::CharacterClasses;

/// Prefix of the environment variables that override the settings file, `PASSGEN_LENGTH=20`.
pub const ENV_PREFIX: &str = "PASSGEN";

/// Initial values of the form and behaviour of the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub default_length: usize,
    pub classes: CharacterClasses,
    pub toast_timeout: Duration,
    pub newest_on_top: bool,
    /// 0 means the clipboard is never cleared
    pub clipboard_clear_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_length: DEFAULT_PASSWORD_LENGTH,
            classes: CharacterClasses::default(),
            toast_timeout: DEFAULT_AUTO_CLOSE,
            newest_on_top: false,
            clipboard_clear_seconds: 0,
        }
    }
}

impl Settings {
    pub fn from_config(settings: &config::Config) -> Result<Settings> {
        let length = settings.get_int("length")?;
        if length < MIN_PASSWORD_LENGTH as i64 || length > MAX_PASSWORD_LENGTH as i64 {
            return Err(Error::InvalidLength(length.to_string()));
        }

        let toast_timeout_ms = settings.get_int("toast_timeout_ms")?;
        if toast_timeout_ms < 0 {
            return Err(Error::Generic("toast_timeout_ms can't be negative"));
        }

        let clipboard_clear_seconds = settings.get_int("clipboard_clear_seconds")?;
        if clipboard_clear_seconds < 0 {
            return Err(Error::Generic("clipboard_clear_seconds can't be negative"));
        }

        Ok(Settings {
            default_length: length as usize,
            classes: CharacterClasses {
                numbers: settings.get_bool("numbers")?,
                upper_case: settings.get_bool("uppercase")?,
                lower_case: settings.get_bool("lowercase")?,
                symbols: settings.get_bool("symbols")?,
            },
            toast_timeout: Duration::from_millis(toast_timeout_ms as u64),
            newest_on_top: settings.get_bool("newest_on_top")?,
            clipboard_clear_seconds: clipboard_clear_seconds as u64,
        })
    }

    pub fn clipboard_clear_delay(&self) -> Option<Duration> {
        if self.clipboard_clear_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.clipboard_clear_seconds))
        }
    }
}

/// Location of `settings.toml`, `$XDG_CONFIG_HOME/passgen/` wins over `$HOME/.config/passgen/`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    match xdg_config_home {
        Some(p) => Ok(p.join("passgen").join("settings.toml")),
        None => match home {
            Some(h) => Ok(h.join(".config").join("passgen").join("settings.toml")),
            None => Err(Error::Generic("no home directory set")),
        },
    }
}

pub fn file_settings(path: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(path.to_path_buf()).required(false)
}

/// Builds the layered configuration: built in defaults, then the settings file, then
/// `PASSGEN_*` environment variables. Also returns where the settings file was looked for.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(config::Config, PathBuf)> {
    let mut settings = config::Config::default();
    let defaults = Settings::default();

    settings.set_default("length", defaults.default_length as i64)?;
    settings.set_default("numbers", defaults.classes.numbers)?;
    settings.set_default("uppercase", defaults.classes.upper_case)?;
    settings.set_default("lowercase", defaults.classes.lower_case)?;
    settings.set_default("symbols", defaults.classes.symbols)?;
    settings.set_default("toast_timeout_ms", defaults.toast_timeout.as_millis() as i64)?;
    settings.set_default("newest_on_top", defaults.newest_on_top)?;
    settings.set_default("clipboard_clear_seconds", defaults.clipboard_clear_seconds as i64)?;

    let config_file_location = xdg_config_file_location(home, xdg_config_home)?;
    if config_file_location.exists() {
        log::debug!("reading settings from {}", config_file_location.display());
        settings.merge(file_settings(&config_file_location))?;
    }

    settings.merge(config::Environment::with_prefix(ENV_PREFIX))?;

    Ok((settings, config_file_location))
}

/// Reads the settings for the current user.
pub fn load() -> Result<Settings> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

    let (settings, _) = read_config(&home, &xdg_config_home)?;
    Settings::from_config(&settings)
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod config_tests;
