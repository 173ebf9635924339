//! String format rules
//!
//! Format rules lower a value to a string and hand it to a regular
//! expression. [`matches_pattern`] is the shared matcher; [`uuid`] calls it
//! with a fixed pattern and [`regexp`] with the pattern given as the rule
//! parameter.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Kind, Pointee, Validate, ValidationError, Value};

/// Rule name of [`uuid`].
pub const UUID: &str = "uuid";

/// Rule name of [`regexp`].
pub const REGEXP: &str = "regexp";

/// Canonical RFC 4122 textual form, versions 1 to 5, any case.
pub const UUID_PATTERN: &str =
    "(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(UUID_PATTERN).unwrap());

static UUID_VALIDATOR: LazyLock<Uuid> = LazyLock::new(Uuid::new);

// ============================================================================
// TYPED VALIDATORS
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid(format!("{input} does not match {}", self.pattern.as_str()))
            .with_param("pattern", self.pattern.as_str().to_owned())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

crate::validator! {
    /// Validates the canonical UUID format.
    pub Uuid { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid(format!("{input} is not a valid UUID")) }
    new() {
        Self {
            pattern: UUID_REGEX.clone(),
        }
    }
    fn uuid_format();
}

// ============================================================================
// MATCHER
// ============================================================================

/// Matches a value against `pattern` using the `regex` crate's syntax.
///
/// Accepts a string or a non-null reference to one. Null references and
/// empty dynamic slots are skipped. An invalid pattern is a
/// [`BadParameter`](crate::foundation::ErrorKind::BadParameter) error, other
/// shapes are [`Unsupported`](crate::foundation::ErrorKind::Unsupported).
pub fn matches_pattern(value: &Value, pattern: &str) -> Result<(), ValidationError> {
    let Some(text) = text_of(REGEXP, value)? else {
        return Ok(());
    };

    let validator = MatchesRegex::new(pattern).map_err(|e| {
        ValidationError::bad_parameter(format!("invalid pattern '{pattern}': {e}"))
            .with_rule(REGEXP)
            .with_param("pattern", pattern.to_owned())
    })?;
    validator.validate(text)
}

/// Lowers a value to the string a format rule checks, `None` for a null.
fn text_of<'a>(rule: &'static str, value: &'a Value) -> Result<Option<&'a str>, ValidationError> {
    match value.pointee() {
        Pointee::Null(None | Some(Kind::String)) => Ok(None),
        Pointee::Null(Some(kind)) => Err(ValidationError::unsupported(rule, kind)),
        Pointee::Value(Value::String(text)) => Ok(Some(text.as_str())),
        Pointee::Value(other) => Err(ValidationError::unsupported(rule, other.kind())),
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Checks that a value is a UUID in canonical hyphenated form.
///
/// Case-insensitive; the version digit must be 1-5 and the variant digit
/// one of `8`, `9`, `a`, `b`. `param` is ignored.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::Value;
/// use fieldcheck_validator::validators::uuid;
///
/// assert!(uuid(&Value::from("550e8400-e29b-41d4-a716-446655440000"), "").is_ok());
/// assert!(uuid(&Value::from("550E8400-E29B-41D4-A716-446655440000"), "").is_ok());
/// assert!(uuid(&Value::from("not-a-uuid"), "").is_err());
/// ```
pub fn uuid(value: &Value, _param: &str) -> Result<(), ValidationError> {
    match text_of(UUID, value)? {
        Some(text) => UUID_VALIDATOR.validate(text),
        None => Ok(()),
    }
}

/// Checks that a value matches the pattern given as `param`.
pub fn regexp(value: &Value, param: &str) -> Result<(), ValidationError> {
    matches_pattern(value, param)
}

// ============================================================================
// TESTS
// ============================================================================
