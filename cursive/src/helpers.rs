/*  Passgen - a password generator form
    Copyright (C) 2019 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::time::Instant;

use cursive::event::Key;
use cursive::views::{Dialog, OnEventView, TextView};
use cursive::Cursive;

use passgen::notification::{Level, Toaster};
use passgen::password_generator::CharacterClass;

pub fn errorbox(ui: &mut Cursive, err: &passgen::Error) {
    let text = match err {
        passgen::Error::InvalidLength(_) | passgen::Error::NoCharacterClass => err.to_string(),
        _ => format!("{:?}", err),
    };

    let d = Dialog::around(TextView::new(text))
        .dismiss_button(super::CATALOG.gettext("Ok"))
        .title(super::CATALOG.gettext("Error"));

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

/// Name of the checkbox view for a character class.
pub fn checkbox_name(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::UpperCase => "uppercase_letters",
        CharacterClass::LowerCase => "lowercase_letters",
        CharacterClass::Numbers => "include_numbers",
        CharacterClass::Symbols => "include_symbols",
    }
}

/// Untranslated label of the checkbox for a character class.
pub fn checkbox_label(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::UpperCase => "Add Uppercase Letters",
        CharacterClass::LowerCase => "Add Lowercase Letters",
        CharacterClass::Numbers => "Include Numbers",
        CharacterClass::Symbols => "Include Symbols",
    }
}

/// The order the checkboxes appear in on the form.
pub const CHECKBOX_ORDER: [CharacterClass; 4] = [
    CharacterClass::UpperCase,
    CharacterClass::LowerCase,
    CharacterClass::Numbers,
    CharacterClass::Symbols,
];

pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
}

/// One line per visible toast, errors are marked with a cross.
pub fn render_toasts(toaster: &Toaster, now: Instant) -> String {
    toaster
        .visible()
        .iter()
        .map(|t| {
            let marker = match t.notification.level {
                Level::Info => "✔",
                Level::Error => "✖",
            };
            let progress = toaster.progress(t.id, now).unwrap_or(0.0);
            format!(
                "{} {} {}",
                marker,
                t.notification.message,
                progress_bar(progress, 10)
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
