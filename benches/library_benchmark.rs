use passgen::form::PasswordForm;
use passgen::password_generator::{password_generator, CharacterClass, CharacterClasses};

use criterion::{criterion_group, criterion_main, Criterion};

fn all_classes() -> CharacterClasses {
    let mut classes = CharacterClasses::default();
    for class in CharacterClass::ALL {
        classes.set(class, true);
    }
    classes
}

fn criterion_benchmark_password_generator(c: &mut Criterion) {
    let classes = all_classes();

    c.bench_function("password_generator 15 chars all classes", |b| {
        b.iter(|| password_generator(15, &classes))
    });
    c.bench_function("password_generator 26 chars all classes", |b| {
        b.iter(|| password_generator(26, &classes))
    });
}

fn criterion_benchmark_form_generate(c: &mut Criterion) {
    let mut form = PasswordForm::default();
    form.set_class(CharacterClass::LowerCase, true);
    form.set_class(CharacterClass::Numbers, true);

    c.bench_function("form generate", |b| b.iter(|| form.generate()));
}

criterion_group!(
    benches,
    criterion_benchmark_password_generator,
    criterion_benchmark_form_generate
);
criterion_main!(benches);
