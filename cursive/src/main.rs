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

use cursive::align::HAlign;
use cursive::direction::Orientation;
use cursive::event::{Event, Key};
use cursive::menu::Tree;
use cursive::traits::*;
use cursive::views::{Button, Checkbox, Dialog, EditView, LinearLayout, TextView};
use cursive::Cursive;

use passgen::clipboard::{Clipboard, SystemClipboard};
use passgen::config::{self, Settings};
use passgen::form::PasswordForm;
use passgen::notification::{Notification, Toaster};
use passgen::password_generator::CharacterClass;

use std::process;
use std::time::Instant;
use std::{thread, time};

use unic_langid::LanguageIdentifier;

mod helpers;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref CATALOG: gettext::Catalog = get_translation_catalog();
}

/// Everything behind the widgets, stored as the cursive user data.
pub struct AppState {
    pub form: PasswordForm,
    pub toaster: Toaster,
    pub settings: Settings,
    pub clipboard: Box<dyn Clipboard>,
    /// Bumped on every successful copy, a pending clear only runs if nothing was copied since.
    pub copies: u64,
}

impl AppState {
    pub fn new(settings: Settings, clipboard: Box<dyn Clipboard>) -> AppState {
        AppState {
            form: PasswordForm::new(&settings),
            toaster: Toaster::new(settings.toast_timeout, settings.newest_on_top),
            settings,
            clipboard,
            copies: 0,
        }
    }
}

fn notify(ui: &mut Cursive, notification: Notification) {
    let notification = Notification {
        message: CATALOG.gettext(&notification.message).to_string(),
        level: notification.level,
    };
    let now = Instant::now();
    ui.with_user_data(|state: &mut AppState| {
        state.toaster.push(notification, now);
    });
    refresh_toasts(ui);
}

fn refresh_toasts(ui: &mut Cursive) {
    let now = Instant::now();
    let text = ui
        .with_user_data(|state: &mut AppState| helpers::render_toasts(&state.toaster, now))
        .unwrap_or_default();
    ui.call_on_name("toasts", |l: &mut TextView| {
        l.set_content(text);
    });
}

/// Runs on every refresh, drops the toasts that have timed out.
fn tick(ui: &mut Cursive) {
    let now = Instant::now();
    let shown = ui
        .with_user_data(|state: &mut AppState| {
            state.toaster.expire(now);
            !state.toaster.is_empty()
        })
        .unwrap_or(false);

    if shown {
        refresh_toasts(ui);
    } else {
        ui.call_on_name("toasts", |l: &mut TextView| {
            l.set_content("");
        });
    }
}

fn dismiss_toast(ui: &mut Cursive) {
    ui.with_user_data(|state: &mut AppState| state.toaster.dismiss_oldest());
    refresh_toasts(ui);
}

/// Holds the toasts on screen until toggled again.
fn toggle_toast_pause(ui: &mut Cursive) {
    let now = Instant::now();
    let paused = ui.with_user_data(|state: &mut AppState| {
        if state.toaster.is_paused() {
            state.toaster.resume(now);
        } else {
            state.toaster.pause(now);
        }
        state.toaster.is_paused()
    });
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(match paused {
            Some(true) => CATALOG.gettext("Notifications paused"),
            _ => "",
        });
    });
}

fn refresh_password(ui: &mut Cursive) {
    let text = ui
        .with_user_data(|state: &mut AppState| match state.form.password() {
            "" => CATALOG.gettext(passgen::form::PLACEHOLDER).to_string(),
            p => p.to_string(),
        })
        .unwrap_or_default();
    ui.call_on_name("password_display", |l: &mut TextView| {
        l.set_content(text);
    });
}

fn generate(ui: &mut Cursive) {
    let notification = ui.with_user_data(|state: &mut AppState| state.form.generate());
    if let Some(notification) = notification {
        notify(ui, notification);
    }
    refresh_password(ui);
}

fn copy(ui: &mut Cursive) {
    let result = ui.with_user_data(|state: &mut AppState| {
        let notification = state.form.copy(state.clipboard.as_mut());
        if !notification.is_error() {
            state.copies += 1;
        }
        (notification, state.settings.clipboard_clear_delay(), state.copies)
    });
    let (notification, clear_delay, copies) = match result {
        Some(r) => r,
        None => return,
    };

    if !notification.is_error() {
        if let Some(delay) = clear_delay {
            schedule_clipboard_clear(ui, delay, copies);
        }
    }
    notify(ui, notification);
}

/// Clears the clipboard unless another password was copied after copy number `copy`.
fn clear_clipboard_if_current(s: &mut Cursive, copy: u64) {
    let res = s.with_user_data(|state: &mut AppState| {
        if state.copies != copy {
            log::debug!(
                "skipping clipboard clear for copy {}, latest is {}",
                copy,
                state.copies
            );
            return None;
        }
        Some(state.clipboard.clear())
    });
    match res {
        Some(Some(Err(err))) => helpers::errorbox(s, &err),
        Some(Some(Ok(()))) => {
            s.call_on_name("status_bar", |l: &mut TextView| {
                l.set_content(CATALOG.gettext("Clipboard cleared"));
            });
        }
        _ => {}
    }
}

fn schedule_clipboard_clear(ui: &mut Cursive, delay: time::Duration, copy: u64) {
    let sink = ui.cb_sink().clone();
    thread::spawn(move || {
        thread::sleep(delay);
        let res = sink.send(Box::new(move |s: &mut Cursive| {
            clear_clipboard_if_current(s, copy);
        }));
        if res.is_err() {
            log::debug!("ui gone before the clipboard was cleared");
        }
    });
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(
            CATALOG
                .gettext("Copied password to copy buffer for {} seconds")
                .replace("{}", &delay.as_secs().to_string()),
        );
    });
}

fn reset(ui: &mut Cursive) {
    let notification = ui.with_user_data(|state: &mut AppState| {
        let settings = state.settings.clone();
        state.form.reset(&settings)
    });
    sync_inputs(ui);
    refresh_password(ui);
    if let Some(notification) = notification {
        notify(ui, notification);
    }
}

/// Writes the form state back into the input widgets.
fn sync_inputs(ui: &mut Cursive) {
    let values = ui.with_user_data(|state: &mut AppState| {
        (
            state.form.manual_password().to_string(),
            state.form.length_input().to_string(),
            *state.form.classes(),
        )
    });
    let (manual_password, length_input, classes) = match values {
        Some(v) => v,
        None => return,
    };

    ui.call_on_name("manual_password_input", |e: &mut EditView| {
        e.set_content(manual_password);
    });
    ui.call_on_name("length_input", |e: &mut EditView| {
        e.set_content(length_input);
    });
    for class in helpers::CHECKBOX_ORDER {
        ui.call_on_name(helpers::checkbox_name(class), |c: &mut Checkbox| {
            c.set_checked(classes.is_set(class));
        });
    }
}

fn manual_password_edited(ui: &mut Cursive, text: &str) {
    ui.with_user_data(|state: &mut AppState| state.form.set_manual_password(text));
}

fn length_edited(ui: &mut Cursive, text: &str) {
    ui.with_user_data(|state: &mut AppState| state.form.set_length_input(text));
}

fn class_toggled(ui: &mut Cursive, class: CharacterClass, checked: bool) {
    ui.with_user_data(|state: &mut AppState| state.form.set_class(class, checked));
}

fn labelled_row<V: View>(label: &str, view: V) -> LinearLayout {
    LinearLayout::horizontal()
        .child(TextView::new(CATALOG.gettext(label)).fixed_width(24))
        .child(view)
}

/// The generator form, with its inputs initialised from the settings.
fn create_form(settings: &Settings) -> Dialog {
    let form = PasswordForm::new(settings);

    let password_row = LinearLayout::horizontal()
        .child(
            TextView::new(CATALOG.gettext(passgen::form::PLACEHOLDER))
                .with_name("password_display")
                .fixed_width(30),
        )
        .child(Button::new(CATALOG.gettext("Copy"), copy));

    let manual_password = EditView::new()
        .on_edit(|ui, text, _| manual_password_edited(ui, text))
        .with_name("manual_password_input")
        .fixed_width(30);

    let length = EditView::new()
        .content(form.length_input())
        .max_content_width(2)
        .on_edit(|ui, text, _| length_edited(ui, text))
        .with_name("length_input")
        .fixed_width(4);

    let mut fields = LinearLayout::vertical()
        .child(password_row)
        .child(TextView::new(""))
        .child(labelled_row("Manual Password", manual_password))
        .child(labelled_row("Password length", length));

    for class in helpers::CHECKBOX_ORDER {
        let mut checkbox =
            Checkbox::new().on_change(move |ui, checked| class_toggled(ui, class, checked));
        checkbox.set_checked(form.is_class_set(class));
        fields.add_child(labelled_row(
            helpers::checkbox_label(class),
            checkbox.with_name(helpers::checkbox_name(class)),
        ));
    }

    Dialog::around(fields)
        .title(CATALOG.gettext("Password Generator 🔒"))
        .button(CATALOG.gettext("Generate Password"), generate)
        .button(CATALOG.gettext("Reset"), reset)
        .button(CATALOG.gettext("Quit"), |s| s.quit())
}

fn create_layout(settings: &Settings) -> LinearLayout {
    LinearLayout::new(Orientation::Vertical)
        .child(
            TextView::new("")
                .h_align(HAlign::Right)
                .with_name("toasts")
                .full_width(),
        )
        .child(create_form(settings))
        .child(
            LinearLayout::new(Orientation::Horizontal)
                .child(TextView::new(CATALOG.gettext(KEY_HINTS)).with_name("key_hints"))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        )
}

const KEY_HINTS: &str = "F1: Menu | ctrl-g: Generate | ctrl-y: Copy | ctrl-r: Reset | ctrl-d: Dismiss | ctrl-p: Pause | Esc: Quit | ";

fn help() {
    println!("{}", CATALOG.gettext("A password generator. Pick which character classes to use and a length between 8 and 26, or type your own password, then copy it to the clipboard. Defaults are read from $XDG_CONFIG_HOME/passgen/settings.toml and PASSGEN_* environment variables."));
}

fn get_translation_catalog() -> gettext::Catalog {
    let locale = locale_config::Locale::current();

    let mut translation_locations = vec!["/usr/share/passgen"];
    if let Some(path) = option_env!("TRANSLATION_INPUT_PATH") {
        translation_locations.insert(0, path);
    }
    if cfg!(debug_assertions) {
        translation_locations.insert(0, "./cursive/res");
    }

    for preferred in locale.tags_for("messages") {
        for loc in &translation_locations {
            let langid_res: Result<LanguageIdentifier, _> = format!("{}", preferred).parse();

            if let Ok(langid) = langid_res {
                let file = std::fs::File::open(format!("{}/{}.mo", loc, langid.language));
                if let Ok(file) = file {
                    if let Ok(catalog) = gettext::Catalog::parse(file) {
                        return catalog;
                    }
                }
            }
        }
    }

    gettext::Catalog::empty()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 => {
            if args[1] == "-h" || args[1] == "--help" {
                help();
                std::process::exit(0);
            } else {
                eprintln!(
                    "{}",
                    CATALOG.gettext("Unknown argument, usage: passgen-cursive [-h|--help]")
                );
                process::exit(1);
            }
        }
        _ => {
            eprintln!(
                "{}",
                CATALOG.gettext("Unknown argument, usage: passgen-cursive [-h|--help]")
            );
            process::exit(1);
        }
    }

    let settings = match config::load() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };
    log::debug!("starting with {:?}", settings);

    let mut ui = cursive::default();

    ui.set_user_data(AppState::new(
        settings.clone(),
        Box::new(SystemClipboard::new()),
    ));

    ui.add_global_callback(Event::CtrlChar('g'), generate);
    ui.add_global_callback(Event::CtrlChar('y'), copy);
    ui.add_global_callback(Event::CtrlChar('r'), reset);
    ui.add_global_callback(Event::CtrlChar('d'), dismiss_toast);
    ui.add_global_callback(Event::CtrlChar('p'), toggle_toast_pause);
    ui.add_global_callback(Event::Refresh, tick);
    ui.add_global_callback(Event::Key(Key::Esc), |s| s.quit());

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        log::warn!("could not load theme: {:?}", err);
    }

    ui.add_layer(create_layout(&settings));

    ui.menubar().add_subtree(
        CATALOG.gettext("Operations"),
        Tree::new()
            .leaf(CATALOG.gettext("Generate (ctrl-g)"), generate)
            .leaf(CATALOG.gettext("Copy (ctrl-y)"), copy)
            .leaf(CATALOG.gettext("Reset (ctrl-r)"), reset)
            .leaf(CATALOG.gettext("Dismiss notification (ctrl-d)"), dismiss_toast)
            .leaf(CATALOG.gettext("Pause notifications (ctrl-p)"), toggle_toast_pause)
            .delimiter()
            .leaf(CATALOG.gettext("Quit (esc)"), |s| s.quit()),
    );
    ui.add_global_callback(Key::F1, |s| s.select_menubar());

    ui.set_autorefresh(true);
    ui.run();
}

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
mod test_helpers;

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
