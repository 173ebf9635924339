//! Geographic coordinate rules
//!
//! [`latitude`] and [`longitude`] share one implementation parameterized by
//! [`Axis`]. Both accept a float, a string holding a decimal float, or a
//! nullable reference to either. Null references are skipped: presence is
//! the job of [`required`](super::required).
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::{ErrorKind, Kind, Value};
//! use fieldcheck_validator::validators::{latitude, longitude};
//!
//! assert!(latitude(&Value::from(48.8566), "").is_ok());
//! assert!(latitude(&Value::from("-33.87"), "").is_ok());
//! assert!(longitude(&Value::null(Kind::Float), "").is_ok());
//!
//! let err = latitude(&Value::from(91.0), "").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Invalid);
//! assert_eq!(err.message, "91 is not a valid latitude");
//! ```

use std::fmt;

use crate::foundation::{Kind, Pointee, Validate, ValidationError, Value};

/// Rule name of [`latitude`].
pub const LATITUDE: &str = "latitude";

/// Rule name of [`longitude`].
pub const LONGITUDE: &str = "longitude";

// ============================================================================
// AXIS
// ============================================================================

/// A coordinate axis and its inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `[-90, 90]`
    Latitude,
    /// `[-180, 180]`
    Longitude,
}

impl Axis {
    /// Axis name, also the rule name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Latitude => LATITUDE,
            Self::Longitude => LONGITUDE,
        }
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub const fn min(self) -> f64 {
        match self {
            Self::Latitude => -90.0,
            Self::Longitude => -180.0,
        }
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// Returns true if `v` lies within the bounds. NaN never does.
    #[must_use]
    pub fn contains(self, v: f64) -> bool {
        (self.min()..=self.max()).contains(&v)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TYPED VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a float lies within an axis' inclusive bounds.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Coordinate { axis: Axis } for f64;
    rule(self, input) { self.axis.contains(*input) }
    error(self, input) {
        let shown = compact(*input);
        ValidationError::invalid(format!("{shown} is not a valid {}", self.axis))
            .with_param("value", shown)
            .with_param("min", self.axis.min().to_string())
            .with_param("max", self.axis.max().to_string())
    }
    fn coordinate(axis: Axis);
}

/// Renders a float for messages, switching to exponent form outside
/// `[1e-4, 1e21)`.
fn compact(v: f64) -> String {
    let magnitude = v.abs();
    if v.is_finite() && v != 0.0 && !(1e-4..1e21).contains(&magnitude) {
        format!("{v:e}")
    } else {
        v.to_string()
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Checks that a value is a latitude in `[-90, 90]`.
///
/// `param` is ignored.
pub fn latitude(value: &Value, _param: &str) -> Result<(), ValidationError> {
    check_coordinate(Axis::Latitude, value)
}

/// Checks that a value is a longitude in `[-180, 180]`.
///
/// `param` is ignored.
pub fn longitude(value: &Value, _param: &str) -> Result<(), ValidationError> {
    check_coordinate(Axis::Longitude, value)
}

fn check_coordinate(axis: Axis, value: &Value) -> Result<(), ValidationError> {
    let value = match value.pointee() {
        // Unset optional field: nothing to check.
        Pointee::Null(None | Some(Kind::Float | Kind::String)) => return Ok(()),
        Pointee::Null(Some(kind)) => return Err(ValidationError::unsupported(axis.name(), kind)),
        Pointee::Value(value) => value,
    };

    let checker = coordinate(axis);
    match value {
        Value::Float(v) => checker.validate(v),
        Value::String(text) => match text.parse::<f64>() {
            Ok(v) => checker.validate(&v),
            Err(_) => Err(
                ValidationError::invalid(format!("{text} is not a valid {axis}"))
                    .with_param("value", text.clone()),
            ),
        },
        other => Err(ValidationError::unsupported(axis.name(), other.kind())),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_axis_bounds() {
        assert!(Axis::Latitude.contains(90.0));
        assert!(Axis::Latitude.contains(-90.0));
        assert!(!Axis::Latitude.contains(90.000_000_1));
        assert!(Axis::Longitude.contains(-180.0));
        assert!(!Axis::Longitude.contains(180.5));
        assert!(!Axis::Longitude.contains(f64::NAN));
    }

    #[test]
    fn test_coordinate_validator() {
        let v = coordinate(Axis::Latitude);
        assert!(v.validate(&45.0).is_ok());

        let err = v.validate(&-91.0).unwrap_err();
        assert_eq!(err.message, "-91 is not a valid latitude");
        assert_eq!(err.param("value"), Some("-91"));
        assert_eq!(err.param("min"), Some("-90"));
        assert_eq!(err.param("max"), Some("90"));
    }

    #[test]
    fn test_extreme_values_use_exponent_form() {
        let err = latitude(&Value::from(1e300), "").unwrap_err();
        assert_eq!(err.message, "1e300 is not a valid latitude");
        assert_eq!(err.param("value"), Some("1e300"));

        let err = longitude(&Value::from(-4e25), "").unwrap_err();
        assert_eq!(err.message, "-4e25 is not a valid longitude");

        assert_eq!(compact(-2.5e-7), "-2.5e-7");
        assert_eq!(compact(123.25), "123.25");
        assert_eq!(compact(0.0), "0");
        assert_eq!(compact(f64::INFINITY), "inf");
    }

    #[test]
    fn test_latitude_float() {
        assert!(latitude(&Value::from(0.0), "").is_ok());
        assert!(latitude(&Value::from(90.0), "").is_ok());
        assert!(latitude(&Value::from(-90.0), "").is_ok());
        assert!(latitude(&Value::from(90.0001), "").is_err());
        assert!(latitude(&Value::from(-91.0), "").is_err());
    }

    #[test]
    fn test_longitude_float() {
        assert!(longitude(&Value::from(180.0), "").is_ok());
        assert!(longitude(&Value::from(-180.0), "").is_ok());
        assert!(longitude(&Value::from(120.5_f32), "").is_ok());
        assert!(longitude(&Value::from(180.0001), "").is_err());

        let err = longitude(&Value::from(-200.0), "").unwrap_err();
        assert_eq!(err.message, "-200 is not a valid longitude");
    }

    #[test]
    fn test_null_references_skip() {
        assert!(latitude(&Value::null(Kind::Float), "").is_ok());
        assert!(latitude(&Value::null(Kind::String), "").is_ok());
        assert!(longitude(&Value::from(None::<f64>), "").is_ok());
        assert!(longitude(&Value::Dyn(None), "").is_ok());
        assert!(longitude(&Value::Absent, "").is_ok());
    }

    #[test]
    fn test_references_are_followed() {
        assert!(latitude(&Value::reference(12.5), "").is_ok());
        assert!(latitude(&Value::from(Some("12.5")), "").is_ok());
        assert!(latitude(&Value::reference(100.0), "").is_err());
        assert!(latitude(&Value::dynamic("-12"), "").is_ok());
    }

    #[test]
    fn test_string_parse() {
        assert!(latitude(&Value::from("45.0"), "").is_ok());
        assert!(latitude(&Value::from("-4.5e1"), "").is_ok());
        assert!(latitude(&Value::from("+90"), "").is_ok());
        assert!(latitude(&Value::from("90.5"), "").is_err());
    }

    #[test]
    fn test_unparseable_string_names_the_text() {
        let err = latitude(&Value::from("not-a-number"), "").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert_eq!(err.message, "not-a-number is not a valid latitude");
        assert_eq!(err.param("value"), Some("not-a-number"));

        // whitespace is not trimmed
        assert!(latitude(&Value::from(" 45"), "").is_err());
        assert!(longitude(&Value::from(""), "").is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(latitude(&Value::from(f64::NAN), "").is_err());
        assert!(latitude(&Value::from("NaN"), "").is_err());
        assert!(longitude(&Value::from("inf"), "").is_err());
    }

    #[test]
    fn test_other_shapes_are_unsupported() {
        for value in [
            Value::from(45_i32),
            Value::from(true),
            Value::from(vec![1.0_f64]),
            Value::null(Kind::Int),
            Value::reference(Value::reference(1.0)),
        ] {
            let err = latitude(&value, "").unwrap_err();
            assert_eq!(err.kind, ErrorKind::Unsupported, "{value:?}");
            assert_eq!(err.rule.as_deref(), Some(LATITUDE));
        }
    }
}
