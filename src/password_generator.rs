use rand::Rng;

use crate::error::{Error, Result};

pub const NUMBERS: &str = "0123456789";
pub const UPPER_CASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_CASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SPECIAL_CHARACTERS: &str = "!'^+%&/()=?_#${[]}|;:>`<.*-@";

/// One of the toggles on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Numbers,
    UpperCase,
    LowerCase,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order their characters are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Numbers,
        CharacterClass::UpperCase,
        CharacterClass::LowerCase,
        CharacterClass::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            Self::Numbers => NUMBERS,
            Self::UpperCase => UPPER_CASE_LETTERS,
            Self::LowerCase => LOWER_CASE_LETTERS,
            Self::Symbols => SPECIAL_CHARACTERS,
        }
    }
}

/// Which character classes are switched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub numbers: bool,
    pub upper_case: bool,
    pub lower_case: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn set(&mut self, class: CharacterClass, on: bool) {
        match class {
            CharacterClass::Numbers => self.numbers = on,
            CharacterClass::UpperCase => self.upper_case = on,
            CharacterClass::LowerCase => self.lower_case = on,
            CharacterClass::Symbols => self.symbols = on,
        }
    }

    pub fn is_set(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Numbers => self.numbers,
            CharacterClass::UpperCase => self.upper_case,
            CharacterClass::LowerCase => self.lower_case,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// true if at least one class is selected
    pub fn any(&self) -> bool {
        CharacterClass::ALL.iter().any(|c| self.is_set(*c))
    }

    /// The characters of every selected class, concatenated in `CharacterClass::ALL` order.
    pub fn character_list(&self) -> String {
        CharacterClass::ALL
            .iter()
            .filter(|c| self.is_set(**c))
            .map(|c| c.characters())
            .collect()
    }
}

/// Generates a password of `length` characters drawn uniformly from the selected classes.
///
/// Uses the thread local rng, which is fine for a form like this but makes no promises
/// about cryptographic quality.
pub fn password_generator(length: usize, classes: &CharacterClasses) -> Result<String> {
    let mut rng = rand::thread_rng();
    password_generator_with_rng(length, classes, &mut rng)
}

/// Same as `password_generator` but samples from the supplied rng.
pub fn password_generator_with_rng<R: Rng + ?Sized>(
    length: usize,
    classes: &CharacterClasses,
    rng: &mut R,
) -> Result<String> {
    let character_list: Vec<char> = classes.character_list().chars().collect();
    if character_list.is_empty() {
        return Err(Error::NoCharacterClass);
    }

    let password: String = (0..length)
        .map(|_| character_list[rng.gen_range(0..character_list.len())])
        .collect();

    Ok(password)
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator_tests;
