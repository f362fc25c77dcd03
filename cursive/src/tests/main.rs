use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::test_helpers::{get_value_from_input, is_checkbox_checked};

/// Keeps what was copied so the tests never need a desktop session.
#[derive(Clone, Default)]
struct RecordingClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl Clipboard for RecordingClipboard {
    fn set_contents(&mut self, contents: &str) -> passgen::Result<()> {
        *self.contents.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }
}

fn setup(settings: Settings) -> (cursive::CursiveRunnable, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let mut siv = cursive::default();
    siv.set_user_data(AppState::new(settings.clone(), Box::new(clipboard.clone())));
    siv.add_layer(create_layout(&settings));
    (siv, clipboard)
}

fn displayed_password(siv: &mut Cursive) -> String {
    siv.call_on_name("password_display", |l: &mut TextView| {
        l.get_content().source().to_owned()
    })
    .unwrap()
}

fn toasts(siv: &mut Cursive) -> String {
    siv.call_on_name("toasts", |l: &mut TextView| {
        l.get_content().source().to_owned()
    })
    .unwrap()
}

#[test]
fn initial_form_shows_placeholder() {
    let (mut siv, _) = setup(Settings::default());

    assert_eq!(passgen::form::PLACEHOLDER, displayed_password(&mut siv));
    assert_eq!(
        Some(Rc::new("15".to_owned())),
        get_value_from_input(&mut siv, "length_input")
    );
    for class in helpers::CHECKBOX_ORDER {
        assert!(!is_checkbox_checked(
            &mut siv,
            helpers::checkbox_name(class)
        ));
    }
}

#[test]
fn initial_form_follows_settings() {
    let mut settings = Settings::default();
    settings.default_length = 20;
    settings.classes.symbols = true;
    let (mut siv, _) = setup(settings);

    assert_eq!(
        Some(Rc::new("20".to_owned())),
        get_value_from_input(&mut siv, "length_input")
    );
    assert!(is_checkbox_checked(&mut siv, "include_symbols"));
    assert!(!is_checkbox_checked(&mut siv, "include_numbers"));
}

#[test]
fn generate_without_classes_shows_error_toast() {
    let (mut siv, _) = setup(Settings::default());

    generate(&mut siv);

    assert_eq!(passgen::form::PLACEHOLDER, displayed_password(&mut siv));
    assert!(toasts(&mut siv)
        .starts_with("✖ To generate password you must select at least one checkbox"));
}

#[test]
fn generate_after_toggling_class() {
    let (mut siv, _) = setup(Settings::default());

    class_toggled(&mut siv, CharacterClass::Numbers, true);
    generate(&mut siv);

    let password = displayed_password(&mut siv);
    assert_eq!(15, password.len());
    assert!(password.chars().all(|c| c.is_ascii_digit()));
    assert!(toasts(&mut siv).starts_with("✔ Password is generated successfully"));
}

#[test]
fn generate_uses_edited_length() {
    let (mut siv, _) = setup(Settings::default());

    class_toggled(&mut siv, CharacterClass::UpperCase, true);
    length_edited(&mut siv, "9");
    generate(&mut siv);

    assert_eq!(9, displayed_password(&mut siv).len());
}

#[test]
fn manual_password_is_shown() {
    let (mut siv, _) = setup(Settings::default());

    manual_password_edited(&mut siv, "my own password");
    generate(&mut siv);

    assert_eq!("my own password", displayed_password(&mut siv));
    assert!(toasts(&mut siv).starts_with("✔ Manual password set successfully"));
}

#[test]
fn copy_without_password() {
    let (mut siv, clipboard) = setup(Settings::default());

    copy(&mut siv);

    assert_eq!(None, *clipboard.contents.borrow());
    assert!(toasts(&mut siv).starts_with("✖ "));
}

#[test]
fn copy_generated_password() {
    let (mut siv, clipboard) = setup(Settings::default());

    manual_password_edited(&mut siv, "copy me");
    generate(&mut siv);
    copy(&mut siv);

    assert_eq!(Some("copy me".to_owned()), *clipboard.contents.borrow());
    assert!(toasts(&mut siv).contains("✔ Password successfully copied to clipboard"));
}

#[test]
fn reset_restores_widgets() {
    let (mut siv, _) = setup(Settings::default());

    siv.call_on_name("manual_password_input", |e: &mut EditView| {
        e.set_content("typed");
    });
    manual_password_edited(&mut siv, "typed");
    length_edited(&mut siv, "22");
    siv.call_on_name("length_input", |e: &mut EditView| {
        e.set_content("22");
    });
    class_toggled(&mut siv, CharacterClass::LowerCase, true);
    siv.call_on_name("lowercase_letters", |c: &mut Checkbox| {
        c.set_checked(true);
    });
    generate(&mut siv);

    reset(&mut siv);

    assert_eq!(passgen::form::PLACEHOLDER, displayed_password(&mut siv));
    assert_eq!(
        Some(Rc::new("".to_owned())),
        get_value_from_input(&mut siv, "manual_password_input")
    );
    assert_eq!(
        Some(Rc::new("15".to_owned())),
        get_value_from_input(&mut siv, "length_input")
    );
    assert!(!is_checkbox_checked(&mut siv, "lowercase_letters"));
    assert!(toasts(&mut siv).contains("✔ Fields have been reset"));
    assert_eq!(
        "",
        siv.user_data::<AppState>().unwrap().form.manual_password()
    );
}

#[test]
fn dismiss_toast_removes_oldest() {
    let (mut siv, _) = setup(Settings::default());

    generate(&mut siv);
    reset(&mut siv);
    dismiss_toast(&mut siv);

    let shown = toasts(&mut siv);
    assert!(shown.starts_with("✔ Fields have been reset"));
    assert_eq!(1, shown.lines().count());
}

#[test]
fn tick_expires_toasts() {
    let mut settings = Settings::default();
    settings.toast_timeout = std::time::Duration::from_millis(0);
    let (mut siv, _) = setup(settings);

    generate(&mut siv);
    tick(&mut siv);

    assert_eq!("", toasts(&mut siv));
    assert!(siv.user_data::<AppState>().unwrap().toaster.is_empty());
}

#[test]
fn toggle_toast_pause_keeps_toasts() {
    let mut settings = Settings::default();
    settings.toast_timeout = std::time::Duration::from_millis(0);
    let (mut siv, _) = setup(settings);

    toggle_toast_pause(&mut siv);
    generate(&mut siv);
    tick(&mut siv);

    assert_eq!(1, siv.user_data::<AppState>().unwrap().toaster.len());

    toggle_toast_pause(&mut siv);
    tick(&mut siv);

    assert!(siv.user_data::<AppState>().unwrap().toaster.is_empty());
}

#[test]
fn key_hints_list_every_shortcut() {
    let (mut siv, _) = setup(Settings::default());

    let hints = siv
        .call_on_name("key_hints", |l: &mut TextView| {
            l.get_content().source().to_owned()
        })
        .unwrap();

    for key in ["F1", "ctrl-g", "ctrl-y", "ctrl-r", "ctrl-d", "ctrl-p", "Esc"] {
        assert!(hints.contains(key), "{key} missing from '{hints}'");
    }
}

#[test]
fn stale_clipboard_clear_keeps_newer_copy() {
    let (mut siv, clipboard) = setup(Settings::default());

    manual_password_edited(&mut siv, "first");
    generate(&mut siv);
    copy(&mut siv);
    manual_password_edited(&mut siv, "second");
    generate(&mut siv);
    copy(&mut siv);

    clear_clipboard_if_current(&mut siv, 1);
    assert_eq!(Some("second".to_owned()), *clipboard.contents.borrow());

    clear_clipboard_if_current(&mut siv, 2);
    assert_eq!(Some("".to_owned()), *clipboard.contents.borrow());
}

#[test]
fn failed_copy_does_not_count() {
    let (mut siv, _) = setup(Settings::default());

    copy(&mut siv);

    assert_eq!(0, siv.user_data::<AppState>().unwrap().copies);
}
