use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bdphonenumber::{PHONE_NUMBER_UTIL, PhoneNumberFormat, ValidationOptions};

use phonenumber::{self as rlp, Mode, country::Id::BD};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "01712345678",
        "+8801812345678",
        "008801612345678",
        "+880 1912-345678",
        "1512345678",
        "8801312345678",
        "014 1234 5678",
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let options = ValidationOptions::default();
    let rlp_numbers = numbers
        .iter()
        .map(|s| rlp::parse(Some(BD), s).unwrap())
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("Formatting Comparison");

    for format in [
        PhoneNumberFormat::Local,
        PhoneNumberFormat::International,
        PhoneNumberFormat::E164,
        PhoneNumberFormat::Pretty,
        PhoneNumberFormat::Masked,
    ] {
        group.bench_function(format!("bdphonenumber: format({})", format), |b| {
            b.iter(|| {
                for number in &numbers {
                    PHONE_NUMBER_UTIL
                        .format(black_box(*number), black_box(format), &options)
                        .unwrap();
                }
            })
        });
    }

    group.bench_function("rust-phonenumber: format(E164)", |b| {
        b.iter(|| {
            for number in &rlp_numbers {
                rlp::format(black_box(number)).mode(Mode::E164).to_string();
            }
        })
    });

    for (number, rlp_number) in numbers.iter().zip(rlp_numbers.iter()) {
        assert_eq!(
            rlp::format(rlp_number).mode(Mode::E164).to_string(),
            PHONE_NUMBER_UTIL
                .format(*number, PhoneNumberFormat::E164, &options)
                .unwrap()
        );
    }
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
