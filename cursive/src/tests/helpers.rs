use std::rc::Rc;
use std::time::Duration;

use cursive::view::Nameable;
use cursive::views::{Checkbox, EditView};

use passgen::notification::Notification;

use super::*;
use crate::test_helpers::{get_value_from_input, is_checkbox_checked};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(Rc::new(String::from("unit test content"))),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn test_get_value_from_input_missing() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn is_checkbox_checked_false() {
    let mut siv = cursive::default();
    siv.add_layer(Checkbox::new().with_name("unit_test"));

    assert!(!is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_checkbox_checked_true() {
    let mut siv = cursive::default();
    let mut c_b = Checkbox::new();
    c_b.set_checked(true);
    siv.add_layer(c_b.with_name("unit_test"));

    assert!(is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn checkbox_names_are_unique() {
    let mut names: Vec<&str> = CHECKBOX_ORDER.iter().map(|c| checkbox_name(*c)).collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(4, names.len());
}

#[test]
fn progress_bar_full_half_empty() {
    assert_eq!("[==========]", progress_bar(1.0, 10));
    assert_eq!("[=====     ]", progress_bar(0.5, 10));
    assert_eq!("[          ]", progress_bar(0.0, 10));
    assert_eq!("[====]", progress_bar(7.0, 4));
}

#[test]
fn render_toasts_empty() {
    let toaster = Toaster::default();

    assert_eq!("", render_toasts(&toaster, Instant::now()));
}

#[test]
fn render_toasts_marks_errors() {
    let mut toaster = Toaster::new(Duration::from_millis(5000), false);
    let now = Instant::now();
    toaster.push(Notification::info("Fields have been reset"), now);
    toaster.push(Notification::error("Nothing to copy"), now);

    let rendered = render_toasts(&toaster, now);

    assert_eq!(
        "✔ Fields have been reset [==========]\n✖ Nothing to copy [==========]",
        rendered
    );
}
