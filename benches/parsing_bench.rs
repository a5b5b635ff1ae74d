use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bdphonenumber::{PHONE_NUMBER_UTIL, TransformOptions, ValidationOptions};

use phonenumber::{self as rlp, country::Id::BD};

/// A mix of valid numbers in every accepted shape and a few that fail at
/// different stages of normalization.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        "01712345678",
        "+880 1712-345678",
        "008801812345678",
        "8801612345678",
        "1512345678",
        "0171234567",
        "02712345678",
        "01212345678",
        "+911712345678",
        "017-CALL-NOW",
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();
    let options = ValidationOptions::default();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("bdphonenumber: validate()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.validate(black_box(*number), black_box(&options));
            }
        })
    });

    group.bench_function("bdphonenumber: parse()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(*number), black_box(&options));
            }
        })
    });

    let transform = TransformOptions::new()
        .with_remove_from_start(1)
        .with_prefix("+880")
        .with_separator(" ");
    group.bench_function("bdphonenumber: customize()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.customize(black_box(*number), black_box(&transform));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(BD)), black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
