// Built-in rule throughput.
//
// Measures the per-call cost of the predicates and of the tag driver on a
// small record. No I/O; the UUID regex is compiled before measuring.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fieldcheck_validator::foundation::{Kind, Value};
use fieldcheck_validator::record::{Field, RecordValidator};
use fieldcheck_validator::validators::{latitude, longitude, required, uuid};

fn presence(c: &mut Criterion) {
    let present = Value::reference(0_i32);
    let missing = Value::null(Kind::Int);

    c.bench_function("required_present", |b| {
        b.iter(|| required(black_box(&present), ""));
    });
    c.bench_function("required_missing", |b| {
        b.iter(|| required(black_box(&missing), ""));
    });
}

fn coordinates(c: &mut Criterion) {
    let float = Value::from(51.5074);
    let text = Value::from("-0.1278");
    let bad = Value::from("east");

    c.bench_function("latitude_float", |b| {
        b.iter(|| latitude(black_box(&float), ""));
    });
    c.bench_function("longitude_string", |b| {
        b.iter(|| longitude(black_box(&text), ""));
    });
    c.bench_function("longitude_unparseable", |b| {
        b.iter(|| longitude(black_box(&bad), ""));
    });
}

fn uuid_format(c: &mut Criterion) {
    let good = Value::from("f47ac10b-58cc-4372-a567-0e02b2c3d479");
    let bad = Value::from("f47ac10b-58cc-0372-a567-0e02b2c3d479");

    // Warm up: force the shared pattern to compile.
    let _ = uuid(&good, "");

    c.bench_function("uuid_match", |b| {
        b.iter(|| uuid(black_box(&good), ""));
    });
    c.bench_function("uuid_mismatch", |b| {
        b.iter(|| uuid(black_box(&bad), ""));
    });
}

fn record_driver(c: &mut Criterion) {
    let validator = RecordValidator::new();
    let fields = vec![
        Field::new("id", "required,uuid", "f47ac10b-58cc-4372-a567-0e02b2c3d479"),
        Field::new("lat", "required,latitude", Some(51.5074)),
        Field::new("lng", "required,longitude", "-0.1278"),
    ];

    c.bench_function("validate_three_fields", |b| {
        b.iter(|| validator.validate(black_box(&fields)));
    });
}

criterion_group!(benches, presence, coordinates, uuid_format, record_driver);
criterion_main!(benches);
