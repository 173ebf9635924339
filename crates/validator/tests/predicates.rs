//! Behaviour tables for the built-in rules.

use fieldcheck_validator::foundation::{ErrorKind, Kind, ValidationError, Value};
use fieldcheck_validator::validators::{latitude, longitude, nonzero, regexp, required, uuid};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn outcome(result: Result<(), ValidationError>) -> Option<ErrorKind> {
    result.err().map(|e| e.kind)
}

// ============================================================================
// REQUIRED
// ============================================================================

#[rstest]
#[case::empty_string(Value::from(""))]
#[case::zero_int(Value::from(0_i64))]
#[case::zero_uint(Value::from(0_u32))]
#[case::zero_float(Value::from(0.0_f64))]
#[case::false_bool(Value::from(false))]
#[case::empty_seq(Value::Seq(vec![]))]
#[case::empty_map(Value::Map(vec![]))]
#[case::empty_record(Value::Record(vec![]))]
#[case::ref_to_zero(Value::reference(0_i32))]
#[case::ref_to_empty_string(Value::from(Some(String::new())))]
fn required_accepts_present_values(#[case] value: Value) {
    assert_eq!(outcome(required(&value, "")), None);
}

#[rstest]
#[case::null_int(Value::null(Kind::Int))]
#[case::null_string(Value::from(None::<String>))]
#[case::null_seq(Value::null(Kind::Seq))]
#[case::empty_dyn(Value::Dyn(None))]
#[case::absent(Value::Absent)]
fn required_rejects_missing_values(#[case] value: Value) {
    assert_eq!(outcome(required(&value, "")), Some(ErrorKind::Required));
}

#[rstest]
#[case::func(Value::Func)]
#[case::chan(Value::Chan)]
#[case::complex(Value::Complex { re: 0.0, im: 0.0 })]
fn required_rejects_unsupported_shapes(#[case] value: Value) {
    assert_eq!(outcome(required(&value, "")), Some(ErrorKind::Unsupported));
}

// ============================================================================
// NONZERO
// ============================================================================

#[rstest]
#[case(Value::from(""), Some(ErrorKind::Zero))]
#[case(Value::from("a"), None)]
#[case(Value::from(0_i8), Some(ErrorKind::Zero))]
#[case(Value::from(-1_i8), None)]
#[case(Value::null(Kind::Float), Some(ErrorKind::Zero))]
#[case(Value::reference(0.0_f64), None)]
#[case(Value::Func, Some(ErrorKind::Unsupported))]
fn nonzero_table(#[case] value: Value, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(nonzero(&value, "")), expected);
}

// ============================================================================
// LATITUDE / LONGITUDE
// ============================================================================

#[rstest]
#[case(-90.0, None)]
#[case(0.0, None)]
#[case(45.5, None)]
#[case(90.0, None)]
#[case(-90.000_001, Some(ErrorKind::Invalid))]
#[case(90.000_001, Some(ErrorKind::Invalid))]
#[case(f64::NAN, Some(ErrorKind::Invalid))]
#[case(f64::INFINITY, Some(ErrorKind::Invalid))]
fn latitude_range(#[case] v: f64, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(latitude(&Value::from(v), "")), expected);
    assert_eq!(outcome(latitude(&Value::from(Some(v)), "")), expected);
}

#[rstest]
#[case(-180.0, None)]
#[case(179.999, None)]
#[case(180.0, None)]
#[case(-180.5, Some(ErrorKind::Invalid))]
#[case(180.5, Some(ErrorKind::Invalid))]
#[case(f64::NEG_INFINITY, Some(ErrorKind::Invalid))]
fn longitude_range(#[case] v: f64, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(longitude(&Value::from(v), "")), expected);
}

#[rstest]
#[case("45.0", None)]
#[case("-90", None)]
#[case("1e1", None)]
#[case("90.5", Some(ErrorKind::Invalid))]
#[case("not-a-number", Some(ErrorKind::Invalid))]
#[case("", Some(ErrorKind::Invalid))]
fn latitude_strings(#[case] text: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(latitude(&Value::from(text), "")), expected);
}

#[test]
fn unparseable_coordinate_message_contains_text() {
    let err = longitude(&Value::from("not-a-number"), "").unwrap_err();
    assert!(err.message.contains("not-a-number"), "{}", err.message);
    assert_eq!(err.param("value"), Some("not-a-number"));
}

#[test]
fn out_of_range_coordinate_reports_bounds() {
    let err = latitude(&Value::from(91.0), "").unwrap_err();
    assert_eq!(err.message, "91 is not a valid latitude");
    assert_eq!(err.param("min"), Some("-90"));
    assert_eq!(err.param("max"), Some("90"));
}

#[rstest]
#[case::null_float(Value::null(Kind::Float))]
#[case::null_string(Value::null(Kind::String))]
#[case::empty_dyn(Value::Dyn(None))]
#[case::absent(Value::Absent)]
fn coordinates_skip_unset_values(#[case] value: Value) {
    assert_eq!(outcome(latitude(&value, "")), None);
    assert_eq!(outcome(longitude(&value, "")), None);
}

#[rstest]
#[case::int(Value::from(45_i32))]
#[case::uint(Value::from(45_u8))]
#[case::bool(Value::from(true))]
#[case::seq(Value::from(vec![1.0_f64]))]
#[case::null_int(Value::null(Kind::Int))]
#[case::ref_to_ref(Value::reference(Value::reference(1.0_f64)))]
#[case::func(Value::Func)]
fn coordinates_reject_other_shapes(#[case] value: Value) {
    assert_eq!(outcome(latitude(&value, "")), Some(ErrorKind::Unsupported));
    assert_eq!(outcome(longitude(&value, "")), Some(ErrorKind::Unsupported));
}

// ============================================================================
// UUID / REGEXP
// ============================================================================

#[rstest]
#[case("123e4567-e89b-12d3-a456-426614174000", None)]
#[case("123E4567-E89B-12D3-A456-426614174000", None)]
#[case("123e4567-e89b-62d3-a456-426614174000", Some(ErrorKind::Invalid))]
#[case("123e4567-e89b-12d3-c456-426614174000", Some(ErrorKind::Invalid))]
#[case("123e4567e89b12d3a456426614174000", Some(ErrorKind::Invalid))]
#[case("not-a-uuid", Some(ErrorKind::Invalid))]
fn uuid_table(#[case] text: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(uuid(&Value::from(text), "")), expected);
    assert_eq!(outcome(uuid(&Value::reference(text), "")), expected);
}

#[rstest]
#[case::null_string(Value::null(Kind::String), None)]
#[case::absent(Value::Absent, None)]
#[case::int(Value::from(1_i32), Some(ErrorKind::Unsupported))]
#[case::null_int(Value::null(Kind::Int), Some(ErrorKind::Unsupported))]
fn uuid_shapes(#[case] value: Value, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(uuid(&value, "")), expected);
}

#[rstest]
#[case("abc", "^[a-z]+$", None)]
#[case("ABC", "(?i)^[a-z]+$", None)]
#[case("abc1", "^[a-z]+$", Some(ErrorKind::Invalid))]
#[case("abc", "[", Some(ErrorKind::BadParameter))]
fn regexp_table(#[case] text: &str, #[case] pattern: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(outcome(regexp(&Value::from(text), pattern)), expected);
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[test]
fn violations_and_usage_errors_are_distinguished() {
    let violation = required(&Value::Absent, "").unwrap_err();
    let usage = latitude(&Value::from(1_i32), "").unwrap_err();

    assert!(violation.is_violation());
    assert!(!usage.is_violation());
    assert_eq!(usage.rule.as_deref(), Some("latitude"));
    assert_eq!(usage.param("kind"), Some("int"));
}
