use rand::Rng;
use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::notification::Notification;
use crate::password_generator::{password_generator_with_rng, CharacterClass, CharacterClasses};

pub const DEFAULT_PASSWORD_LENGTH: usize = 15;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 26;

/// Shown in place of the password until there is one.
pub const PLACEHOLDER: &str = "Generated Password is here";

pub const COPY_SUCCESS: &str = "Password successfully copied to clipboard";
pub const COPY_FAIL: &str = "There is no password to copy, generate one first";
pub const MANUAL_PASSWORD_SET: &str = "Manual password set successfully";
pub const PASSWORD_GENERATED: &str = "Password is generated successfully";
pub const FIELDS_RESET: &str = "Fields have been reset";

/// Everything the user can see and change on the generator form.
#[derive(Debug)]
pub struct PasswordForm {
    password: String,
    manual_password: String,
    length_input: String,
    classes: CharacterClasses,
}

impl Default for PasswordForm {
    fn default() -> Self {
        PasswordForm::new(&Settings::default())
    }
}

impl Drop for PasswordForm {
    fn drop(&mut self) {
        self.password.zeroize();
        self.manual_password.zeroize();
    }
}

impl PasswordForm {
    /// A blank form with the length and character classes taken from the settings.
    pub fn new(settings: &Settings) -> PasswordForm {
        PasswordForm {
            password: String::new(),
            manual_password: String::new(),
            length_input: settings.default_length.to_string(),
            classes: settings.classes,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// The password, or the placeholder text when nothing has been generated yet.
    pub fn displayed_password(&self) -> &str {
        if self.password.is_empty() {
            PLACEHOLDER
        } else {
            &self.password
        }
    }

    pub fn manual_password(&self) -> &str {
        &self.manual_password
    }

    pub fn set_manual_password(&mut self, manual_password: &str) {
        self.manual_password.zeroize();
        self.manual_password = manual_password.to_owned();
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn set_length_input(&mut self, length_input: &str) {
        self.length_input = length_input.to_owned();
    }

    /// Parses the length field, it has to be a whole number inside the allowed range.
    pub fn length(&self) -> Result<usize> {
        let trimmed = self.length_input.trim();
        match trimmed.parse::<usize>() {
            Ok(l) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&l) => Ok(l),
            _ => Err(Error::InvalidLength(trimmed.to_owned())),
        }
    }

    pub fn classes(&self) -> &CharacterClasses {
        &self.classes
    }

    pub fn is_class_set(&self, class: CharacterClass) -> bool {
        self.classes.is_set(class)
    }

    pub fn set_class(&mut self, class: CharacterClass, on: bool) {
        self.classes.set(class, on);
    }

    /// Handles the "Generate Password" button.
    pub fn generate(&mut self) -> Notification {
        let mut rng = rand::thread_rng();
        self.generate_with_rng(&mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Notification {
        if !self.manual_password.is_empty() {
            self.password.zeroize();
            self.password = self.manual_password.clone();
            log::info!("using manual password");
            return Notification::info(MANUAL_PASSWORD_SET);
        }

        match self.try_generate(rng) {
            Ok(password) => {
                self.password.zeroize();
                self.password = password;
                log::info!("generated a password of {} characters", self.password.len());
                Notification::info(PASSWORD_GENERATED)
            }
            Err(err) => {
                log::debug!("not generating password: {}", err);
                Notification::from_error(&err)
            }
        }
    }

    fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        if !self.classes.any() {
            return Err(Error::NoCharacterClass);
        }
        let length = self.length()?;
        password_generator_with_rng(length, &self.classes, rng)
    }

    /// Handles the copy icon next to the password.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Notification {
        if self.password.is_empty() {
            return Notification::error(COPY_FAIL);
        }

        match clipboard.set_contents(&self.password) {
            Ok(()) => {
                log::info!("copied password to clipboard");
                Notification::info(COPY_SUCCESS)
            }
            Err(err) => {
                log::warn!("copy to clipboard failed: {}", err);
                Notification::from_error(&err)
            }
        }
    }

    /// Handles the "Reset" button, every field goes back to its initial value.
    pub fn reset(&mut self, settings: &Settings) -> Notification {
        self.password.zeroize();
        self.manual_password.zeroize();
        self.length_input = settings.default_length.to_string();
        self.classes = settings.classes;
        log::debug!("form reset");
        Notification::info(FIELDS_RESET)
    }
}

#[cfg(test)]
#[path = "tests/form.rs"]
mod form_tests;
